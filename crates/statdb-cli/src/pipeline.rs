//! The ingestion driver.
//!
//! Stages per file, in order:
//! 1. **Decode**: derive the logical table key from the file name
//! 2. **Scan**: locate the header row, collect well-formed data rows
//! 3. **Schema**: sanitize headers into typed column definitions
//! 4. **Load**: drop, create, and bulk-insert the destination table
//!
//! Any error inside stages 2-4 is contained at the per-file boundary
//! and reported as a [`FileOutcome::Failed`]; the run continues with
//! the next file. Only a database that cannot be opened aborts the run.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use statdb_ingest::{ScanOptions, ScanOutcome, TableKey, list_csv_files, scan_file};
use statdb_model::TableSchema;
use statdb_store::Store;

use crate::types::{FileOutcome, FileReport, ImportResult};

/// Options for one ingestion run.
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    pub scan: ScanOptions,
}

/// Imports every CSV file under `csv_dir` into the database at
/// `db_path`, one table per file.
pub fn run_import(csv_dir: &Path, db_path: &Path, options: &ImportOptions) -> Result<ImportResult> {
    let mut store = Store::open(db_path).context("open destination database")?;
    let files = list_csv_files(csv_dir).context("list source files")?;
    info!(
        dir = %csv_dir.display(),
        files = files.len(),
        "starting import"
    );

    let mut reports = Vec::with_capacity(files.len());
    for path in &files {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        let outcome = match import_file(&mut store, path, &file_name, &options.scan) {
            Ok(outcome) => outcome,
            Err(error) => FileOutcome::Failed {
                error: format!("{error:#}"),
            },
        };

        match &outcome {
            FileOutcome::Loaded {
                table,
                rows,
                dropped,
            } => {
                info!(file = %file_name, table = %table, rows, dropped, "loaded");
            }
            FileOutcome::Skipped { reason } => {
                warn!(file = %file_name, reason = %reason, "skipped");
            }
            FileOutcome::Failed { error } => {
                warn!(file = %file_name, error = %error, "failed");
            }
        }

        reports.push(FileReport { file_name, outcome });
    }

    let has_errors = reports
        .iter()
        .any(|r| matches!(r.outcome, FileOutcome::Failed { .. }));

    Ok(ImportResult {
        db_path: db_path.to_path_buf(),
        files: reports,
        has_errors,
    })
}

/// Runs the per-file stages. Errors returned here are converted into
/// [`FileOutcome::Failed`] by the caller; nothing propagates past it.
fn import_file(
    store: &mut Store,
    path: &Path,
    file_name: &str,
    scan_options: &ScanOptions,
) -> Result<FileOutcome> {
    let key = TableKey::decode(file_name);

    let table = match scan_file(path, scan_options)? {
        ScanOutcome::Table(table) => table,
        ScanOutcome::NoHeader => {
            return Ok(FileOutcome::Skipped {
                reason: "no header row found".to_string(),
            });
        }
    };

    let schema = TableSchema::build(&table.headers, &table.rows)?;
    let name = key.table_name();
    let rows = store.replace_table(&name, &schema, &table.rows, key.year)?;

    Ok(FileOutcome::Loaded {
        table: name,
        rows,
        dropped: table.dropped,
    })
}
