//! Schema file loading — TOML into a declarative [`SchemaSpec`].

use std::fs;
use std::path::Path;

use anyhow::Context;
use columnizer::SchemaSpec;

/// Load a declarative schema from a TOML file.
pub fn load(path: &Path) -> anyhow::Result<SchemaSpec> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading schema file {}", path.display()))?;

    let spec: SchemaSpec = toml::from_str(&contents)
        .with_context(|| format!("parsing schema file {}", path.display()))?;

    Ok(spec)
}

#[cfg(test)]
mod tests {
    use columnizer::{ColumnKind, Columnizer, LogLevel, SchemaSpec};

    const EXAMPLE: &str = r#"
        timestamp_format = "%Y-%m-%dT%H:%M:%S"

        [[columns]]
        name = "Time"
        expression = '^(\S+)'
        kind = "timestamp"

        [[columns]]
        name = "Level"
        expression = '\[(\w+)\]'
        kind = "level"

        [[columns]]
        name = "Msg"
        expression = '\]\s(.*)$'
        kind = "message"

        [[columns]]
        name = "Pid"
        expression = 'pid=(\d+)'
        kind = "generic"
        optional = true

        [[levels]]
        level = "error"
        pattern = "ERR"

        [[levels]]
        level = "info"
        pattern = "INFO"
    "#;

    #[test]
    fn test_example_schema_deserializes() {
        let spec: SchemaSpec = toml::from_str(EXAMPLE).unwrap();

        assert_eq!(spec.columns.len(), 4);
        assert_eq!(spec.columns[0].kind, ColumnKind::Timestamp);
        assert!(spec.columns[3].optional);
        assert_eq!(spec.levels[0].level, LogLevel::Error);
    }

    #[test]
    fn test_example_schema_compiles() {
        let spec: SchemaSpec = toml::from_str(EXAMPLE).unwrap();
        let schema = Columnizer::compile(spec).unwrap();

        assert_eq!(schema.column_count(), 4);
        assert_eq!(schema.index_of("Pid"), Some(3));
    }

    #[test]
    fn test_optional_defaults_to_false() {
        let spec: SchemaSpec = toml::from_str(EXAMPLE).unwrap();
        assert!(!spec.columns[0].optional);
    }
}
