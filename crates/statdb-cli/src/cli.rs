//! CLI argument definitions for statdb.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use statdb_ingest::HEADER_SENTINEL;

#[derive(Parser)]
#[command(
    name = "statdb",
    version,
    about = "Import scraped CSV stat tables into a SQLite database",
    long_about = "Import a directory of scraped CSV exports into SQLite, one table per file.\n\n\
                  Each file's schema is inferred from its own content: the header row is\n\
                  located by sentinel, column names are sanitized, and column types are\n\
                  inferred from sampled values."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import every CSV file in a directory, one table per file.
    Import(ImportArgs),

    /// List ingested tables in a database with their row counts.
    Tables(TablesArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Directory containing the scraped CSV files.
    #[arg(value_name = "CSV_DIR")]
    pub csv_dir: PathBuf,

    /// Destination SQLite database (created if absent).
    #[arg(long = "db", value_name = "PATH", default_value = "stats.db")]
    pub db: PathBuf,

    /// First-field value identifying the header row (case-sensitive).
    #[arg(long = "sentinel", value_name = "VALUE", default_value = HEADER_SENTINEL)]
    pub sentinel: String,
}

#[derive(Parser)]
pub struct TablesArgs {
    /// SQLite database to inspect.
    #[arg(long = "db", value_name = "PATH", default_value = "stats.db")]
    pub db: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
