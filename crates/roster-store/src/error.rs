//! Store error types.

use std::path::PathBuf;
use thiserror::Error;

/// Store operation error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error.
    #[error("failed to {operation} store file {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a roster store.
    #[error("invalid store file {path}: {reason}")]
    InvalidFormat { path: PathBuf, reason: String },

    /// The store was written by a newer version.
    #[error("store file version {found} is not supported (maximum: {max_supported})")]
    UnsupportedVersion {
        found: u32,
        max_supported: u32,
        path: PathBuf,
    },

    /// Serialization error.
    #[error("failed to serialize store data")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("failed to complete store write to {target_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
