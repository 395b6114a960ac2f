//! Storage error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// An object already exists at the key; writes never overwrite.
    #[error("Object already exists: {0}")]
    AlreadyExists(String),

    /// The key is not a valid object path.
    #[error("Invalid object key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    /// The configured backend cannot produce signed URLs.
    #[error("Signed URLs are not available for this storage backend")]
    SigningUnavailable,

    /// Backend construction failed.
    #[error("Storage configuration error: {0}")]
    Config(String),

    /// Underlying object store error.
    #[error("Object store error: {0}")]
    ObjectStore(#[source] object_store::Error),
}

impl From<object_store::Error> for StorageError {
    fn from(err: object_store::Error) -> Self {
        match err {
            object_store::Error::AlreadyExists { path, .. } => Self::AlreadyExists(path),
            other => Self::ObjectStore(other),
        }
    }
}
