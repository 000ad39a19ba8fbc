use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::SchemaError;

/// Record severity, ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Fatal,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declarative classification rule: extracted Level text matching
/// `pattern` resolves to `level`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelRule {
    pub level: LogLevel,
    pub pattern: String,
}

/// Compiled severity classification table.
///
/// Rules are evaluated in declaration order and the first match wins.
/// Rules with empty patterns are dropped at compile time — they can never
/// match and must never classify anything.
#[derive(Debug, Default)]
pub struct LevelTable {
    rules: Vec<(LogLevel, Regex)>,
}

impl LevelTable {
    pub(crate) fn compile(rules: &[LevelRule]) -> Result<Self, SchemaError> {
        let mut compiled = Vec::with_capacity(rules.len());

        for rule in rules {
            if rule.pattern.is_empty() {
                continue;
            }
            let pattern = Regex::new(&rule.pattern).map_err(|source| {
                SchemaError::InvalidLevelPattern {
                    level: rule.level,
                    source,
                }
            })?;
            compiled.push((rule.level, pattern));
        }

        Ok(Self { rules: compiled })
    }

    /// Resolve the severity of extracted Level text, or `None` when no rule
    /// matches (the caller keeps its baseline).
    pub fn classify(&self, text: &str) -> Option<LogLevel> {
        self.rules
            .iter()
            .find(|(_, pattern)| pattern.is_match(text))
            .map(|(level, _)| *level)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
