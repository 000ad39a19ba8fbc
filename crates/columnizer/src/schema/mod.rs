//! Column schema — the validated, immutable configuration every parse
//! call consults.
//!
//! A schema arrives as a declarative [`SchemaSpec`] (what configuration
//! storage hands us) and is compiled into a [`Columnizer`]: expressions
//! compiled, names checked for uniqueness, level rules compiled in
//! declaration order. Compilation is the only place a malformed schema can
//! surface — a `Columnizer` never fails mid-stream.

pub mod column;
pub mod level;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub use column::{Column, ColumnKind, ColumnSpec};
pub use level::{LevelRule, LevelTable, LogLevel};

/// Schema validation failures. All of these are fatal to schema
/// construction and are detected before any line is parsed.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema has no columns")]
    Empty,

    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),

    #[error("column '{column}' has an invalid expression: {source}")]
    InvalidExpression {
        column: String,
        #[source]
        source: regex::Error,
    },

    #[error("column '{0}' expression has no capture group")]
    MissingCaptureGroup(String),

    #[error("level rule '{level}' has an invalid pattern: {source}")]
    InvalidLevelPattern {
        level: LogLevel,
        #[source]
        source: regex::Error,
    },
}

/// Declarative schema as consumed from configuration storage.
///
/// This is the serde-facing representation; compile it into a
/// [`Columnizer`] before parsing anything with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaSpec {
    /// Ordered column definitions (extraction and display order).
    pub columns: Vec<ColumnSpec>,

    /// chrono format string used to parse the Timestamp column's text.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Ordered severity classification rules; first match wins.
    #[serde(default)]
    pub levels: Vec<LevelRule>,
}

fn default_timestamp_format() -> String {
    "%Y-%m-%dT%H:%M:%S".to_string()
}

/// Compiled column schema. Immutable after construction and safe to share
/// read-only across concurrent parse calls (wrap in `Arc`).
#[derive(Debug)]
pub struct Columnizer {
    columns: Vec<Column>,
    timestamp_format: String,
    levels: LevelTable,
}

impl Columnizer {
    /// Validate and compile a declarative schema.
    ///
    /// Checks that the column list is non-empty, every name is unique,
    /// every expression compiles (multi-line mode) and carries the capture
    /// group that supplies the extracted value, and every non-empty level
    /// pattern compiles.
    pub fn compile(spec: SchemaSpec) -> Result<Self, SchemaError> {
        if spec.columns.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut seen = HashSet::new();
        let mut columns = Vec::with_capacity(spec.columns.len());

        for column_spec in &spec.columns {
            if !seen.insert(column_spec.name.clone()) {
                return Err(SchemaError::DuplicateColumn(column_spec.name.clone()));
            }
            columns.push(Column::compile(column_spec)?);
        }

        if !columns.iter().any(|c| c.kind == ColumnKind::Message) {
            // Downstream consumers expect a message; tolerated but suspicious.
            warn!("schema has no message column; records will carry empty messages");
        }

        let levels = LevelTable::compile(&spec.levels)?;

        Ok(Self {
            columns,
            timestamp_format: spec.timestamp_format,
            levels,
        })
    }

    /// Compiled columns in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Position of the column with the given name, if any.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }

    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }
}
