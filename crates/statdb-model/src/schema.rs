//! Table schema construction from scanned headers and rows.

use crate::error::{Result, SchemaError};
use crate::infer::StorageKind;

/// Name of the synthetic grouping column appended to every table.
pub const YEAR_COLUMN: &str = "year";

/// One column of a table to be created: sanitized name plus the
/// storage kind inferred from the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub kind: StorageKind,
}

/// An ordered column list for one destination table.
///
/// The final column is always the synthetic [`YEAR_COLUMN`], typed
/// integer, holding the source file's group value on every row.
#[derive(Debug, Clone)]
pub struct TableSchema {
    columns: Vec<ColumnDef>,
}

impl TableSchema {
    /// Builds a schema from sanitized headers and the accepted rows.
    ///
    /// Each column's kind comes from the first non-blank value at that
    /// position across `rows`; a column with no non-blank sample is
    /// text. Duplicate header names are disambiguated with `_2`, `_3`,
    /// … suffixes. The `year` name is reserved up front, so a header
    /// that sanitizes to `year` is the one that gets suffixed.
    pub fn build(headers: &[String], rows: &[Vec<String>]) -> Result<Self> {
        if headers.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut taken: Vec<String> = vec![YEAR_COLUMN.to_string()];
        let mut columns = Vec::with_capacity(headers.len() + 1);

        for (idx, header) in headers.iter().enumerate() {
            let sample = rows
                .iter()
                .filter_map(|row| row.get(idx))
                .find(|value| !value.trim().is_empty())
                .map_or("", |value| value.as_str());

            let name = disambiguate(header, &taken);
            taken.push(name.clone());
            columns.push(ColumnDef {
                name,
                kind: StorageKind::from_sample(sample),
            });
        }

        columns.push(ColumnDef {
            name: YEAR_COLUMN.to_string(),
            kind: StorageKind::Integer,
        });

        Ok(Self { columns })
    }

    /// All columns in creation order, synthetic year column last.
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Total column count, including the synthetic year column.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Appends `_2`, `_3`, … until `name` no longer collides with `taken`.
fn disambiguate(name: &str, taken: &[String]) -> String {
    if !taken.iter().any(|t| t == name) {
        return name.to_string();
    }
    let mut counter = 2usize;
    loop {
        let candidate = format!("{name}_{counter}");
        if !taken.iter().any(|t| t == &candidate) {
            return candidate;
        }
        counter += 1;
    }
}
