//! Hook registry and synchronous dispatcher.
//!
//! Event names are normalized keys; listeners under one event form an
//! identity set, so re-registering the same listener is a no-op. Dispatch
//! is sequential fan-out on the calling thread with no ordering guarantee
//! between listeners of the same event, and a listener error aborts the
//! fan-out and propagates to the caller.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

use botkit_protocols::error::{HookError, RegistryError};
use botkit_protocols::hook::HookListener;

use crate::error::CoreError;
use crate::key::NormalizedKey;

/// Invoke every listener in the set with the payload.
///
/// The fan-out primitive on its own, independent of any registry: callers
/// that hold a listener set can dispatch without going through a
/// [`HookRegistry`].
///
/// # Errors
///
/// The first listener error aborts the remaining invocations and is
/// returned as-is.
pub fn dispatch(listeners: &[Arc<dyn HookListener>], payload: &Value) -> Result<(), HookError> {
    for listener in listeners {
        listener.call(payload)?;
    }
    Ok(())
}

/// Event-name-keyed registry of listener sets.
pub struct HookRegistry {
    items: RwLock<HashMap<NormalizedKey, Vec<Arc<dyn HookListener>>>>,
}

impl HookRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }

    /// Subscribe a listener to an event.
    ///
    /// Membership is by listener identity: inserting the identical listener
    /// under the same normalized event a second time changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error only when the event name fails key normalization.
    pub fn register(
        &self,
        event: &str,
        listener: Arc<dyn HookListener>,
    ) -> Result<(), RegistryError> {
        let key = NormalizedKey::normalize(event)?;
        let mut items = self.items.write();
        let set = items.entry(key).or_default();
        if !set.iter().any(|existing| Arc::ptr_eq(existing, &listener)) {
            set.push(listener);
        }
        Ok(())
    }

    /// Snapshot of the listener set for an event; empty when nothing is
    /// subscribed.
    pub fn listeners(&self, event: &str) -> Vec<Arc<dyn HookListener>> {
        let Ok(key) = NormalizedKey::normalize(event) else {
            return Vec::new();
        };
        self.items.read().get(&key).cloned().unwrap_or_default()
    }

    /// Snapshot of the full event-to-listeners mapping.
    pub fn all(&self) -> HashMap<NormalizedKey, Vec<Arc<dyn HookListener>>> {
        self.items.read().clone()
    }

    /// Dispatch an event to its listener set.
    ///
    /// A missing key is the empty set, not an error; listener failures
    /// propagate uncaught.
    ///
    /// # Errors
    ///
    /// Key normalization failure for the event name, or the first listener
    /// error.
    pub fn trigger(&self, event: &str, payload: &Value) -> Result<(), CoreError> {
        let key = NormalizedKey::normalize(event)?;
        let set = self.items.read().get(&key).cloned().unwrap_or_default();
        debug!(event = %key, listeners = set.len(), "Dispatching hook");
        dispatch(&set, payload)?;
        Ok(())
    }

    /// Check if no listeners are registered at all.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Remove every subscription.
    pub fn clear(&self) {
        self.items.write().clear();
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "hook_tests.rs"]
mod tests;
