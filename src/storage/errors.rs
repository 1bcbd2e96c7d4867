//! Storage error types

use thiserror::Error;

/// Result type for repository operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors surfaced by the storage collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// Another stored record already holds this unique key.
    ///
    /// The repository's own constraint is the authoritative uniqueness
    /// guarantee; the validator's pre-check only exists for a better error
    /// message.
    #[error("duplicate {key}: '{value}' is already registered")]
    DuplicateKey { key: String, value: String },

    /// No stored record matches the requested id.
    #[error("student '{0}' not found")]
    NotFound(String),

    /// The backing store failed (lock poisoned, connection lost, ...).
    #[error("storage failure: {0}")]
    Internal(String),
}

impl StorageError {
    pub fn duplicate_key(key: impl Into<String>, value: impl Into<String>) -> Self {
        StorageError::DuplicateKey {
            key: key.into(),
            value: value.into(),
        }
    }
}
