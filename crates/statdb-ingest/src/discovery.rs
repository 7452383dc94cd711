//! Source file discovery and filename decoding.
//!
//! Scraped exports are named `<year>_<index>_<title>.csv`, one file per
//! detected web table. The year and index together form the logical key
//! that decides which destination table a file loads into.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{IngestError, Result};

static FILE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})_(\d+)_.*\.csv$").expect("valid regex"));

/// Logical grouping key decoded from a source file name.
///
/// Two files decoding to the same key target the same table; the later
/// one wins. That is deliberate overwrite semantics, not an accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableKey {
    /// Four-digit year from the file name, if it matched the grammar.
    pub year: Option<i64>,
    /// Ordinal of the table within its year's page; 0 when unmatched.
    pub ordinal: u64,
}

impl TableKey {
    /// Decodes a file name into its logical key.
    ///
    /// Names that do not match the grammar still ingest; they fall back
    /// to `(None, 0)` and share the `table_none_0` destination.
    pub fn decode(file_name: &str) -> Self {
        let Some(captures) = FILE_NAME.captures(file_name) else {
            return Self {
                year: None,
                ordinal: 0,
            };
        };
        // Both captures are digit-only; a parse failure means overflow,
        // which gets the same lenient fallback as a non-matching name.
        match (captures[1].parse(), captures[2].parse()) {
            (Ok(year), Ok(ordinal)) => Self {
                year: Some(year),
                ordinal,
            },
            _ => Self {
                year: None,
                ordinal: 0,
            },
        }
    }

    /// Destination table name, `table_<year>_<ordinal>`.
    pub fn table_name(&self) -> String {
        match self.year {
            Some(year) => format!("table_{year}_{}", self.ordinal),
            None => format!("table_none_{}", self.ordinal),
        }
    }
}

/// Lists all CSV files in a directory.
///
/// Matches the `.csv` extension case-insensitively and returns files
/// sorted by filename so a run processes them in a deterministic order.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn decodes_year_and_ordinal() {
        let key = TableKey::decode("2007_03_batting_leaders.csv");
        assert_eq!(key.year, Some(2007));
        assert_eq!(key.ordinal, 3);
        assert_eq!(key.table_name(), "table_2007_3");
    }

    #[test]
    fn non_matching_names_fall_back() {
        for name in ["notes.csv", "07_1_short_year.csv", "2007-1-dashes.csv"] {
            let key = TableKey::decode(name);
            assert_eq!(key.year, None, "name {name:?}");
            assert_eq!(key.ordinal, 0);
            assert_eq!(key.table_name(), "table_none_0");
        }
    }

    #[test]
    fn same_key_means_same_table() {
        let a = TableKey::decode("2008_05_home_runs.csv");
        let b = TableKey::decode("2008_5_strikeouts.csv");
        assert_eq!(a, b);
        assert_eq!(a.table_name(), b.table_name());
    }

    #[test]
    fn lists_only_csv_files_sorted() {
        let dir = TempDir::new().unwrap();
        for name in ["2007_02_b.csv", "2007_01_a.csv", "README.md", "data.CSV"] {
            std::fs::write(dir.path().join(name), "x\n").unwrap();
        }

        let files = list_csv_files(dir.path()).unwrap();
        let names: Vec<&str> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["2007_01_a.csv", "2007_02_b.csv", "data.CSV"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = list_csv_files(Path::new("/no/such/dir")).unwrap_err();
        assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
    }
}
