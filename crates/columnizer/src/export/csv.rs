//! Delimited-text export.
//!
//! One line per record: the record's index quoted first, then every field
//! in schema order, each individually quoted with internal quotes doubled,
//! comma-separated, no trailing comma, terminated by the platform line
//! break. Downstream spreadsheet consumers depend on this byte-for-byte, so
//! empty optional fields still emit `""` to preserve column alignment.

use crate::record::LogRecord;
use crate::schema::Columnizer;

/// Platform line terminator appended to every exported record.
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";

/// Header label for the leading index column.
const INDEX_HEADER: &str = "Number";

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Render one record as a delimited-text line.
pub fn csv_line(record: &LogRecord) -> String {
    let mut out = quote(&record.index().to_string());

    for field in record.fields() {
        out.push(',');
        out.push_str(&quote(field));
    }

    out.push_str(LINE_TERMINATOR);
    out
}

/// Render the header row matching [`csv_line`]'s column layout.
pub fn csv_header(schema: &Columnizer) -> String {
    let mut out = quote(INDEX_HEADER);

    for column in schema.columns() {
        out.push(',');
        out.push_str(&quote(&column.name));
    }

    out.push_str(LINE_TERMINATOR);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_line;
    use crate::schema::{ColumnKind, ColumnSpec, SchemaSpec};
    use std::sync::Arc;

    fn schema(columns: Vec<ColumnSpec>) -> Arc<Columnizer> {
        Arc::new(
            Columnizer::compile(SchemaSpec {
                columns,
                timestamp_format: "%Y-%m-%dT%H:%M:%S".into(),
                levels: Vec::new(),
            })
            .unwrap(),
        )
    }

    fn column(name: &str, expression: &str, optional: bool) -> ColumnSpec {
        ColumnSpec {
            name: name.to_string(),
            expression: expression.to_string(),
            kind: ColumnKind::Generic,
            optional,
        }
    }

    /// Split one exported line on unescaped commas, undoing the quoting.
    /// Mirrors what a spreadsheet consumer does with the format.
    fn split_csv(line: &str) -> Vec<String> {
        let line = line.strip_suffix(LINE_TERMINATOR).unwrap();
        let mut cells = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '"' if in_quotes && chars.peek() == Some(&'"') => {
                    chars.next();
                    current.push('"');
                }
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => cells.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        cells.push(current);
        cells
    }

    #[test]
    fn test_csv_line_format() {
        let schema = schema(vec![
            column("Host", r"^(\S+)", false),
            column("Rest", r"\s(.*)$", false),
        ]);
        let record = parse_line("web-01 request handled", 5, &schema).unwrap();

        assert_eq!(
            csv_line(&record),
            format!("\"5\",\"web-01\",\"request handled\"{LINE_TERMINATOR}")
        );
    }

    #[test]
    fn test_csv_quotes_are_doubled() {
        let schema = schema(vec![column("Msg", r"^(.*)$", false)]);
        let record = parse_line("said \"hello\" twice", 0, &schema).unwrap();

        assert_eq!(
            csv_line(&record),
            format!("\"0\",\"said \"\"hello\"\" twice\"{LINE_TERMINATOR}")
        );
    }

    #[test]
    fn test_csv_empty_optional_field_emits_empty_quotes() {
        let schema = schema(vec![
            column("Msg", r"^(.*)$", false),
            column("Pid", r"pid=(\d+)", true),
        ]);
        let record = parse_line("no pid here", 2, &schema).unwrap();

        assert_eq!(
            csv_line(&record),
            format!("\"2\",\"no pid here\",\"\"{LINE_TERMINATOR}")
        );
    }

    #[test]
    fn test_csv_round_trip_recovers_values() {
        let schema = schema(vec![
            column("Msg", r"^([^|]*)", false),
            column("Extra", r"\|(.*)$", true),
        ]);
        let record = parse_line("comma, \"quote\" and more|tail", 12, &schema).unwrap();

        let cells = split_csv(&csv_line(&record));
        assert_eq!(cells[0], "12");
        assert_eq!(cells[1], record.fields()[0]);
        assert_eq!(cells[2], record.fields()[1]);
    }

    #[test]
    fn test_csv_header_matches_layout() {
        let schema = schema(vec![
            column("Host", r"^(\S+)", false),
            column("Rest", r"\s(.*)$", false),
        ]);

        assert_eq!(
            csv_header(&schema),
            format!("\"Number\",\"Host\",\"Rest\"{LINE_TERMINATOR}")
        );
    }
}
