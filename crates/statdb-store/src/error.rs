//! Error types for the SQLite store.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while opening the store or loading a table.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened. Fatal for the whole run.
    #[error("failed to open database {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A SQL statement failed.
    #[error("sql error: {source}")]
    Sql {
        #[from]
        source: rusqlite::Error,
    },

    /// A row's width did not match the table's column count at insert
    /// time. The scanner filters these out, so hitting this means a
    /// caller bypassed it; refuse rather than truncate or pad.
    #[error("table {table}: row has {actual} fields, expected {expected}")]
    ColumnCount {
        table: String,
        expected: usize,
        actual: usize,
    },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
