//! # botkit
//!
//! A pluggable chat-automation runtime: one process-wide [`Runtime`] tracks
//! the available transport adapters, message handlers, and lifecycle hooks,
//! holds configuration and shared resource handles, and starts the robot.
//!
//! ```no_run
//! use std::sync::Arc;
//! use botkit::{Runtime, protocols::{Adapter, AdapterBuilder, RobotHandle}};
//! use botkit::protocols::error::AdapterError;
//!
//! struct Shell;
//!
//! impl Adapter for Shell {
//!     fn run(&mut self) -> Result<(), AdapterError> {
//!         Ok(())
//!     }
//! }
//!
//! struct ShellBuilder;
//!
//! impl AdapterBuilder for ShellBuilder {
//!     fn build(&self, _robot: &RobotHandle) -> Box<dyn Adapter> {
//!         Box::new(Shell)
//!     }
//! }
//!
//! let runtime = Runtime::new();
//! runtime.register_adapter("shell", Arc::new(ShellBuilder)).unwrap();
//! runtime.configure(|c| c.robot.name = "Marvin".to_string());
//! runtime.run(None).unwrap();
//! ```

pub use botkit_config::{Config, ConfigError, ConfigLoader, RedisConfig, RobotConfig};
pub use botkit_core::{
    dispatch, normalize_locale, AdapterRegistry, CoreError, HandlerRegistry, HookRegistry,
    LocalePaths, MemoryCatalog, NormalizedKey, Robot, Runtime, BEFORE_RUN,
};
pub use botkit_protocols as protocols;
