//! Store error types.
//!
//! Storage failures never escape the store's mutation API; they are logged and
//! remembered instead. These types surface through the [`crate::Storage`]
//! trait and CSV export.

use std::path::PathBuf;
use thiserror::Error;

/// Storage backend error.
#[derive(Debug, Error)]
pub enum StorageError {
    /// File I/O error.
    #[error("failed to {operation} file: {}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("failed to replace {} with {}", target_path.display(), temp_path.display())]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Storage keys are limited to ASCII letters, digits, `_` and `-`.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// CSV export error.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write csv row")]
    Csv(#[from] csv::Error),
    #[error("failed to finish csv output: {0}")]
    Buffer(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;
