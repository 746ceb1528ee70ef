//! Registry-related errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// The raw identifier could not be normalized into a registry key.
    /// Duplicate registration is never an error; key policy is the only
    /// thing a registration call can trip over.
    #[error("Invalid registry key: {0:?}")]
    InvalidKey(String),
}
