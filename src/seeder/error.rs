//! Error types and handling
//!
//! This module contains the error type shared by every seeding operation.

use crate::types::ConfigError;
use thiserror::Error;

/// Errors that can occur during a seeding run
#[derive(Debug, Error)]
pub enum SeederError {
    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// A database operation failed
    #[error("Database error: {0}")]
    Store(#[from] rusqlite::Error),

    /// Hashing the shared password failed
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generated data violated an internal expectation
    #[error("Generation failed: {0}")]
    Generation(String),
}

impl SeederError {
    /// Create a generation error
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    /// Get the error category, for log routing
    pub fn category(&self) -> &'static str {
        match self {
            SeederError::Configuration(_) => "Configuration",
            SeederError::Store(_) => "Database",
            SeederError::PasswordHash(_) => "Password",
            SeederError::Io(_) => "IO",
            SeederError::Serialization(_) => "Serialization",
            SeederError::Generation(_) => "Generation",
        }
    }
}

/// Result type for seeding operations
pub type SeederResult<T> = Result<T, SeederError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_generation_error_message() {
        let error = SeederError::generation("no residents to attach documents to");
        assert!(matches!(error, SeederError::Generation(_)));
        assert_eq!(error.to_string(), "Generation failed: no residents to attach documents to");
    }

    #[test]
    fn test_error_from_config_error() {
        let error: SeederError = ConfigError::Invalid("bad".to_string()).into();
        assert!(matches!(error, SeederError::Configuration(_)));
        assert_eq!(error.category(), "Configuration");
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "missing");
        let error: SeederError = io_error.into();
        assert!(matches!(error, SeederError::Io(_)));
        assert_eq!(error.category(), "IO");
    }

    #[test]
    fn test_error_from_sqlite_error() {
        let error: SeederError = rusqlite::Error::InvalidQuery.into();
        assert!(matches!(error, SeederError::Store(_)));
        assert_eq!(error.category(), "Database");
    }
}
