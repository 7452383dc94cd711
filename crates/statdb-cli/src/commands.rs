//! Command entry points.

use anyhow::{Context, Result};

use statdb_cli::pipeline::{ImportOptions, run_import};
use statdb_cli::types::ImportResult;
use statdb_ingest::ScanOptions;
use statdb_store::Store;

use crate::cli::{ImportArgs, TablesArgs};

pub fn run_import_command(args: &ImportArgs) -> Result<ImportResult> {
    let options = ImportOptions {
        scan: ScanOptions {
            header_sentinel: args.sentinel.clone(),
        },
    };
    run_import(&args.csv_dir, &args.db, &options)
}

pub fn run_tables(args: &TablesArgs) -> Result<()> {
    let store = Store::open(&args.db).context("open database")?;
    let tables = store.ingested_tables().context("list tables")?;

    if tables.is_empty() {
        println!("no ingested tables in {}", args.db.display());
        return Ok(());
    }
    for (name, rows) in tables {
        println!("{name}\t{rows}");
    }
    Ok(())
}
