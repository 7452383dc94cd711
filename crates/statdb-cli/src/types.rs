use std::path::PathBuf;

/// Aggregated result of one ingestion run.
#[derive(Debug)]
pub struct ImportResult {
    pub db_path: PathBuf,
    pub files: Vec<FileReport>,
    pub has_errors: bool,
}

/// Outcome for a single source file.
#[derive(Debug)]
pub struct FileReport {
    pub file_name: String,
    pub outcome: FileOutcome,
}

/// What happened to one file, contained at the per-file boundary.
#[derive(Debug)]
pub enum FileOutcome {
    Loaded {
        table: String,
        rows: usize,
        dropped: usize,
    },
    Skipped {
        reason: String,
    },
    Failed {
        error: String,
    },
}
