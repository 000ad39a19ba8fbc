use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about = "Parse log files through a column schema")]
pub struct Args {
    /// Column schema file (TOML)
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Log file to ingest (defaults to stdin)
    pub input: Option<PathBuf>,

    /// Output representation
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit a header row before CSV or table output
    #[arg(long)]
    pub header: bool,

    /// Display format for rendered timestamps (table output)
    #[arg(long, default_value = columnizer::record::DEFAULT_TIMESTAMP_DISPLAY)]
    pub timestamp_format: String,

    /// Display-only offset in milliseconds added to rendered timestamps
    /// (table output); stored record data is never shifted
    #[arg(long, default_value_t = 0)]
    pub time_shift_ms: i64,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Quoted, comma-separated line per record
    Csv,
    /// Flat JSON object per record (the scripting-bridge mapping)
    Json,
    /// Tab-separated display values per record
    Table,
}
