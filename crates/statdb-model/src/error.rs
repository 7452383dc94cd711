//! Error types for schema construction.

use thiserror::Error;

/// Errors that can occur while building a table schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The header row produced zero columns.
    #[error("cannot build a table with zero columns")]
    Empty,
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
