//! Log record — the immutable result of parsing one raw line, plus the
//! display accessors the grid/table surface consumes.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

use crate::schema::{ColumnKind, Columnizer, LogLevel};
use crate::timeshift::TimeShift;

/// Default display format for rendered timestamps.
pub const DEFAULT_TIMESTAMP_DISPLAY: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Presentation parameters for [`LogRecord::value_at`].
///
/// The time shift is an explicit parameter here rather than ambient state:
/// the shared handle is supplied by whoever owns the log session, and
/// changing it never mutates stored record data.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// chrono format string used when rendering the Timestamp column.
    pub timestamp_format: String,

    /// Shared display-only offset added to rendered timestamps.
    pub time_shift: TimeShift,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_DISPLAY.to_string(),
            time_shift: TimeShift::new(),
        }
    }
}

/// One parsed log record. Constructed exactly once per raw line by
/// [`crate::parse_line`] and read-only for its entire lifetime.
#[derive(Debug, Clone)]
pub struct LogRecord {
    index: usize,
    raw: String,
    fields: Vec<String>,
    timestamp: Option<NaiveDateTime>,
    level: LogLevel,
    message: String,
    logger: String,
    schema: Arc<Columnizer>,
}

impl LogRecord {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        index: usize,
        raw: String,
        fields: Vec<String>,
        timestamp: Option<NaiveDateTime>,
        level: LogLevel,
        message: String,
        logger: String,
        schema: Arc<Columnizer>,
    ) -> Self {
        Self {
            index,
            raw,
            fields,
            timestamp,
            level,
            message,
            logger,
            schema,
        }
    }

    /// Sequence position assigned by the ingestion caller.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Original line text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Extracted values, one per schema column, in schema order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Resolved timestamp, or `None` when parsing failed or the schema has
    /// no Timestamp column.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    /// Resolved timestamp for presentation, falling back to "now" rather
    /// than a faulty date when unset.
    pub fn display_timestamp(&self) -> NaiveDateTime {
        self.timestamp
            .unwrap_or_else(|| Local::now().naive_local())
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Logger label derived from the `Logger` column, or the fixed
    /// placeholder when the schema has none.
    pub fn logger(&self) -> &str {
        &self.logger
    }

    /// The schema this record was parsed with.
    pub fn schema(&self) -> &Arc<Columnizer> {
        &self.schema
    }

    /// Display value for a grid column position.
    ///
    /// Position 0 is reserved, position 1 is the record's sequence index,
    /// and positions ≥ 2 map to `fields[position - 2]`. The Timestamp
    /// column renders as `display_timestamp + time_shift` in the caller's
    /// display format; the shift never alters the stored timestamp, and a
    /// shift that would push the sum out of chrono's representable range is
    /// ignored for that render. Out-of-range positions yield the empty
    /// string.
    pub fn value_at(&self, position: usize, render: &RenderOptions) -> String {
        match position {
            1 => self.index.to_string(),
            p if p >= 2 && p - 2 < self.fields.len() => {
                let column = &self.schema.columns()[p - 2];
                if column.kind == ColumnKind::Timestamp {
                    let displayed = self.display_timestamp();
                    displayed
                        .checked_add_signed(render.time_shift.get())
                        .unwrap_or(displayed)
                        .format(&render.timestamp_format)
                        .to_string()
                } else {
                    self.fields[p - 2].clone()
                }
            }
            _ => String::new(),
        }
    }

    /// Parsed value of the column with the given name, or `default` when
    /// the name is unknown to the schema.
    pub fn value_by_name(&self, name: &str, default: &str) -> String {
        self.schema
            .index_of(name)
            .and_then(|position| self.fields.get(position).cloned())
            .unwrap_or_else(|| default.to_string())
    }
}
