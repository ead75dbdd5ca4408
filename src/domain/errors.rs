//! Domain layer error types
//!
//! All errors that can occur in domain layer operations.

use thiserror::Error;

/// Main domain error type
#[derive(Error, Debug)]
pub enum DomainError {
    /// Entity not found
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Invalid entity state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Persisted store rejected or failed an operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// Encoding or decoding persisted data failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error (wrapped)
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for DomainError {
    fn from(err: toml::de::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for DomainError {
    fn from(err: toml::ser::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}
