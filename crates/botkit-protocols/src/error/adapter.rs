//! Adapter-related errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Adapter failed to start: {0}")]
    StartupFailed(String),

    #[error("Adapter connection lost: {0}")]
    ConnectionLost(String),

    #[error("{0}")]
    Custom(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_variants_display() {
        let errors = vec![
            AdapterError::StartupFailed("a".to_string()),
            AdapterError::ConnectionLost("b".to_string()),
            AdapterError::Custom("c".to_string()),
        ];
        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
