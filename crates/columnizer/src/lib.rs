// Schema-driven log line decomposition for the columnize tools.

// Core configuration and parsing
pub mod schema;
pub mod parse;
pub mod record;

// Presentation and export surfaces
pub mod timeshift;
pub mod export;
pub mod metrics;

// Re-export commonly used types
pub use parse::{parse_line, ParseError};
pub use record::{LogRecord, RenderOptions};
pub use schema::{
    Column, ColumnKind, ColumnSpec, Columnizer, LevelRule, LevelTable, LogLevel, SchemaError,
    SchemaSpec,
};
pub use timeshift::TimeShift;

/// Column name conventionally carrying the logger label (see `parse_line`).
pub const LOGGER_COLUMN: &str = "Logger";

/// Placeholder logger label used when the schema has no `Logger` column.
pub const NO_LOGGER_PLACEHOLDER: &str = "No Logger column";
