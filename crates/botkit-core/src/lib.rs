//! # botkit Core
//!
//! The registry and lifecycle core of the botkit runtime.
//!
//! ## Components
//!
//! - [`Runtime`] - the process-wide context owning configuration and the
//!   three registries
//! - [`registry`] - adapter, handler, and hook registries with their
//!   distinct duplicate policies
//! - [`Robot`] - the execution unit the lifecycle orchestrator starts
//! - [`NormalizedKey`] - canonical registry key form
//!
//! Registration happens during a setup phase, then [`Runtime::run`] fires
//! the `before_run` hooks and hands control to the robot. [`Runtime::reset`]
//! clears configuration and registries for clean reinitialization; the
//! memoized store handle deliberately survives it.

pub mod error;
pub mod key;
pub mod locale;
pub mod registry;
pub mod robot;
pub mod runtime;

pub use error::CoreError;
pub use key::NormalizedKey;
pub use locale::{normalize_locale, LocalePaths, MemoryCatalog};
pub use registry::{dispatch, AdapterRegistry, HandlerRegistry, HookRegistry};
pub use robot::Robot;
pub use runtime::{Runtime, BEFORE_RUN};
