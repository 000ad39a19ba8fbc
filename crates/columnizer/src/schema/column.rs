use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::SchemaError;

/// What a column's extracted text means to the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Extracted text is parsed with the schema's timestamp format.
    Timestamp,
    /// Extracted text is classified through the level table.
    Level,
    /// Extracted text becomes the record's message verbatim.
    Message,
    /// Extracted text is stored positionally with no further semantics.
    Generic,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Timestamp => "timestamp",
            ColumnKind::Level => "level",
            ColumnKind::Message => "message",
            ColumnKind::Generic => "generic",
        }
    }
}

/// Declarative column definition as supplied by configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Unique name within the schema, used for name-based lookup.
    pub name: String,

    /// Regular expression; capture group 1 is the extracted value.
    pub expression: String,

    pub kind: ColumnKind,

    /// When true, a non-match yields an empty field instead of rejecting
    /// the whole line.
    #[serde(default)]
    pub optional: bool,
}

/// A compiled column: its spec plus the compiled expression.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub optional: bool,
    expression: Regex,
}

impl Column {
    /// Compile a column spec, verifying the expression and its capture group.
    pub(crate) fn compile(spec: &ColumnSpec) -> Result<Self, SchemaError> {
        // Anchors align to line boundaries within the text, matching how the
        // expressions behave when a raw line spans multiple physical lines.
        let expression = RegexBuilder::new(&spec.expression)
            .multi_line(true)
            .build()
            .map_err(|source| SchemaError::InvalidExpression {
                column: spec.name.clone(),
                source,
            })?;

        // captures_len() counts the implicit whole-match group 0.
        if expression.captures_len() < 2 {
            return Err(SchemaError::MissingCaptureGroup(spec.name.clone()));
        }

        Ok(Self {
            name: spec.name.clone(),
            kind: spec.kind,
            optional: spec.optional,
            expression,
        })
    }

    /// Run the expression against a raw line and return the text of capture
    /// group 1, or `None` when the expression does not match.
    pub fn extract<'t>(&self, raw: &'t str) -> Option<&'t str> {
        self.expression
            .captures(raw)
            .map(|caps| caps.get(1).map(|m| m.as_str()).unwrap_or(""))
    }

    /// The source pattern this column was compiled from.
    pub fn pattern(&self) -> &str {
        self.expression.as_str()
    }
}
