//! # botkit Config
//!
//! Configuration schema and file loading for the botkit runtime.
//!
//! The schema is typed with a small set of known fields (the `[robot]` and
//! `[redis]` tables) plus a generic `[extensions.*]` escape hatch for
//! adapter- and handler-specific settings.

mod error;
mod loader;
mod schema;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{Config, RedisConfig, RobotConfig};
