//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using device storage.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the backing file.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to write the backing file.
    #[error("Store operation failed: {0}")]
    StoreError(String),
}
