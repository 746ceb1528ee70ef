//! Hook dispatch errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    /// A listener reported failure. The dispatcher does not catch this;
    /// it aborts the fan-out and surfaces to the trigger caller.
    #[error("Hook listener failed: {0}")]
    ListenerFailed(String),

    #[error("{0}")]
    Custom(String),
}
