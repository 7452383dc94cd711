pub mod discovery;
pub mod error;
pub mod scan;

pub use discovery::{TableKey, list_csv_files};
pub use error::{IngestError, Result};
pub use scan::{HEADER_SENTINEL, ScanOptions, ScanOutcome, ScannedTable, scan_file, scan_records};
