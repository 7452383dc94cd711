//! Error types for source discovery and CSV scanning.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering or scanning source files.
///
/// A file without a detectable header row is not an error; the scanner
/// reports that as a [`crate::scan::ScanOutcome::NoHeader`] skip.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to open a CSV file.
    #[error("failed to open file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed while reading CSV records from a file.
    #[error("failed to read CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
