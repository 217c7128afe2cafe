//! Store error types.

use thiserror::Error;

/// Errors that can occur when using a key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the store.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Filesystem error in a file-backed store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key cannot be stored by this backend.
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// Failed to perform store operation.
    #[error("Store operation failed: {0}")]
    StoreError(String),
}
