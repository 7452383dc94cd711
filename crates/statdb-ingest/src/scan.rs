//! Header detection and row collection for one CSV file.
//!
//! Scraped exports carry noise before the real header: page titles,
//! blank separator lines, stray caption rows. The scanner walks the
//! file as a small state machine (seek the header row, then collect
//! every data row whose width matches it) and reports everything else
//! as dropped.

use std::path::Path;

use tracing::debug;

use statdb_model::sanitize_identifier;

use crate::error::{IngestError, Result};

/// First-field marker identifying the true header row.
pub const HEADER_SENTINEL: &str = "Statistic";

/// Options controlling a scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Value the first field of the header row must equal, after
    /// trimming. Case-sensitive.
    pub header_sentinel: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            header_sentinel: HEADER_SENTINEL.to_string(),
        }
    }
}

/// Result of scanning one file.
#[derive(Debug)]
pub enum ScanOutcome {
    /// A header was found; sanitized headers and well-formed rows.
    Table(ScannedTable),
    /// No row matched the header sentinel. A per-file skip, not an
    /// error.
    NoHeader,
}

/// The usable content of one scanned file.
#[derive(Debug)]
pub struct ScannedTable {
    /// Sanitized header names, in source order.
    pub headers: Vec<String>,
    /// Accepted data rows; every row has exactly `headers.len()` fields.
    pub rows: Vec<Vec<String>>,
    /// Count of rows dropped for a field-count mismatch.
    pub dropped: usize,
}

enum ScanState {
    SeekingHeader,
    Collecting,
}

/// Scans a CSV file from disk.
pub fn scan_file(path: &Path, options: &ScanOptions) -> Result<ScanOutcome> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::FileOpen {
            path: path.to_path_buf(),
            source: e,
        })?;

    scan_records(reader, options).map_err(|e| IngestError::CsvRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Scans CSV records from any reader.
///
/// Callers with a file path should prefer [`scan_file`], which wraps
/// read failures with the offending path.
pub fn scan_records<R: std::io::Read>(
    mut reader: csv::Reader<R>,
    options: &ScanOptions,
) -> std::result::Result<ScanOutcome, csv::Error> {
    let mut state = ScanState::SeekingHeader;
    let mut headers: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut dropped = 0usize;

    for record_result in reader.records() {
        let record = record_result?;

        match state {
            ScanState::SeekingHeader => {
                let is_header = record
                    .get(0)
                    .map(|field| field.trim() == options.header_sentinel)
                    .unwrap_or(false);
                if is_header {
                    headers = record.iter().map(sanitize_identifier).collect();
                    state = ScanState::Collecting;
                }
            }
            ScanState::Collecting => {
                if record.len() == headers.len() {
                    rows.push(record.iter().map(ToString::to_string).collect());
                } else {
                    dropped += 1;
                }
            }
        }
    }

    match state {
        ScanState::SeekingHeader => Ok(ScanOutcome::NoHeader),
        ScanState::Collecting => {
            debug!(
                columns = headers.len(),
                rows = rows.len(),
                dropped,
                "scan complete"
            );
            Ok(ScanOutcome::Table(ScannedTable {
                headers,
                rows,
                dropped,
            }))
        }
    }
}
