//! Error types for roster ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a roster file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Roster file not found.
    #[error("roster file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read roster {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
