use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing a storage slot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
    #[error("Record serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Storage unavailable: {0}")]
    #[allow(dead_code)]
    Unavailable(String),
}
