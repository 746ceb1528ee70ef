//! Hook listener protocol.
//!
//! Hooks are named lifecycle events with zero or more subscribed listeners.
//! The core dispatches them synchronously on the calling thread; a listener
//! error aborts the fan-out and propagates to whoever triggered the event.

use serde_json::Value;

use crate::error::HookError;

/// A lifecycle event subscriber.
///
/// Listeners receive one structured payload per invocation (a JSON object
/// such as `{"config_path": "..."}`); any successful return value is
/// ignored. Errors are not caught by the dispatcher.
pub trait HookListener: Send + Sync {
    /// Handle one event dispatch.
    fn call(&self, payload: &Value) -> Result<(), HookError>;
}

impl<F> HookListener for F
where
    F: Fn(&Value) -> Result<(), HookError> + Send + Sync,
{
    fn call(&self, payload: &Value) -> Result<(), HookError> {
        self(payload)
    }
}
