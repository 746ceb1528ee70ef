//! Adapter registry.
//!
//! One builder per transport name. Re-registering a name replaces the
//! previous entry silently; that supports hot-reloading an adapter under
//! test and re-registration during configuration reload.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use botkit_protocols::adapter::AdapterBuilder;
use botkit_protocols::error::RegistryError;

use crate::key::NormalizedKey;

/// Name-keyed registry of adapter builders.
pub struct AdapterRegistry {
    items: DashMap<NormalizedKey, Arc<dyn AdapterBuilder>>,
}

impl AdapterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }

    /// Register a builder under a normalized name, overwriting any prior
    /// entry for the same key.
    ///
    /// # Errors
    ///
    /// Returns an error only when the name fails key normalization.
    pub fn register(
        &self,
        name: &str,
        builder: Arc<dyn AdapterBuilder>,
    ) -> Result<(), RegistryError> {
        let key = NormalizedKey::normalize(name)?;
        if self.items.insert(key.clone(), builder).is_some() {
            debug!(adapter = %key, "Adapter re-registered, previous entry replaced");
        }
        Ok(())
    }

    /// Look up a builder by raw name (normalized before lookup).
    pub fn get(&self, name: &str) -> Option<Arc<dyn AdapterBuilder>> {
        let key = NormalizedKey::normalize(name).ok()?;
        self.items.get(&key).map(|entry| entry.value().clone())
    }

    /// All registered adapter names.
    pub fn names(&self) -> Vec<NormalizedKey> {
        self.items.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Number of registered adapters.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.items.clear();
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "adapter_tests.rs"]
mod tests;
