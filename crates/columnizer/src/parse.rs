//! Line parser — pure decomposition of one raw line into a [`LogRecord`].
//!
//! Parsing is all-or-nothing per line: any required column whose expression
//! fails to match rejects the whole line and no partial record is ever
//! produced. Everything else degrades gracefully — an unparseable timestamp
//! resolves to the unset sentinel and an unclassified level keeps the Info
//! baseline — so a single malformed field never discards an otherwise
//! parseable line.
//!
//! `parse_line` holds no mutable state beyond the read-only schema, so it is
//! safe to fan out across worker threads one call per line; the caller
//! assigns `index` to preserve original ordering downstream.

use std::sync::Arc;

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::trace;

use crate::record::LogRecord;
use crate::schema::{ColumnKind, Columnizer, LogLevel};
use crate::{LOGGER_COLUMN, NO_LOGGER_PLACEHOLDER};

/// Failures surfaced to the ingestion caller. Non-fatal conditions
/// (timestamp format mismatch, unresolved level) never appear here; they
/// resolve to sentinel or default values instead.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("required column '{column}' did not match line {index}")]
    RequiredColumnMismatch { column: String, index: usize },
}

/// Decompose `raw` into a structured record using the given schema.
///
/// Columns are applied in schema order. Each expression runs in multi-line
/// mode and capture group 1 supplies the extracted value; an optional
/// column that does not match records an empty field instead of failing.
pub fn parse_line(
    raw: &str,
    index: usize,
    schema: &Arc<Columnizer>,
) -> Result<LogRecord, ParseError> {
    let mut fields = Vec::with_capacity(schema.column_count());
    let mut timestamp: Option<NaiveDateTime> = None;
    let mut level = LogLevel::default();
    let mut message = String::new();

    for column in schema.columns() {
        let value = match column.extract(raw) {
            Some(text) => text.to_string(),
            None if column.optional => String::new(),
            None => {
                return Err(ParseError::RequiredColumnMismatch {
                    column: column.name.clone(),
                    index,
                });
            }
        };

        match column.kind {
            ColumnKind::Timestamp => {
                timestamp = match NaiveDateTime::parse_from_str(&value, schema.timestamp_format())
                {
                    Ok(parsed) => Some(parsed),
                    Err(err) => {
                        trace!(
                            line = index,
                            value = %value,
                            "timestamp did not match format: {err}"
                        );
                        None
                    }
                };
            }
            ColumnKind::Level => {
                if let Some(resolved) = schema.levels().classify(&value) {
                    level = resolved;
                }
            }
            ColumnKind::Message => message = value.clone(),
            ColumnKind::Generic => {}
        }

        fields.push(value);
    }

    // Logger label comes from the conventionally-named column, when present.
    let logger = schema
        .index_of(LOGGER_COLUMN)
        .and_then(|position| fields.get(position).cloned())
        .unwrap_or_else(|| NO_LOGGER_PLACEHOLDER.to_string());

    Ok(LogRecord::new(
        index,
        raw.to_string(),
        fields,
        timestamp,
        level,
        message,
        logger,
        Arc::clone(schema),
    ))
}
