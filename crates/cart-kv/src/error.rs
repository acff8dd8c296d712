//! Storage error types.

use thiserror::Error;

/// Errors that can occur when talking to a Key-Value backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read or write the underlying medium.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Stored bytes are not a valid value, e.g. not UTF-8.
    #[error("Corrupt value: {0}")]
    Corrupt(String),

    /// Key cannot be stored by this backend.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Backend-specific failure.
    #[error("Store operation failed: {0}")]
    Backend(String),
}

impl StorageError {
    /// Whether the stored value itself is unreadable, as opposed to the
    /// backend failing.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Serialize(_) | Self::Corrupt(_))
    }
}

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
