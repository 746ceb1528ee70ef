//! Registry key normalization.
//!
//! Every name-keyed registry (adapters, hooks) goes through [`NormalizedKey`]
//! so that identifiers differing only in case or surrounding whitespace land
//! on the same entry. Handlers are keyless and exempt.

use std::fmt;

use botkit_protocols::error::RegistryError;

/// Canonical (trimmed, lowercased) form of a registry key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    /// Normalize a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidKey` when the input is empty after
    /// trimming; any non-empty identifier normalizes deterministically.
    pub fn normalize(raw: &str) -> Result<Self, RegistryError> {
        let token = raw.trim();
        if token.is_empty() {
            return Err(RegistryError::InvalidKey(raw.to_string()));
        }
        Ok(Self(token.to_lowercase()))
    }

    /// The canonical token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
