//! Umbrella error for the lifecycle path.

use thiserror::Error;

use botkit_config::ConfigError;
use botkit_protocols::error::{AdapterError, HookError, RegistryError};

/// Everything `Runtime::run` and the robot startup path can surface.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Hook(#[from] HookError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The configured adapter name has no registration.
    #[error("Unknown adapter: {0}")]
    UnknownAdapter(String),
}
