//! Ingestion loop — logging init, schema compile, line-by-line parse,
//! export, and the rejected-line accounting the parsing core leaves to its
//! caller.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::sync::Arc;

use anyhow::Context;
use columnizer::export::{csv_header, csv_line, ToFlatMap};
use columnizer::metrics::IngestMetrics;
use columnizer::{parse_line, Columnizer, LogRecord, RenderOptions, TimeShift};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::{Args, OutputFormat};
use crate::schema_file;

/// Initialise the tracing / logging subsystem.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "columnize=info,columnizer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let spec = schema_file::load(&args.schema)?;
    let schema = Arc::new(
        Columnizer::compile(spec)
            .with_context(|| format!("compiling schema {}", args.schema.display()))?,
    );
    info!(
        columns = schema.column_count(),
        level_rules = schema.levels().len(),
        "compiled column schema"
    );

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let render = RenderOptions {
        timestamp_format: args.timestamp_format.clone(),
        time_shift: TimeShift::from_millis(args.time_shift_ms),
    };

    if args.header {
        match args.format {
            OutputFormat::Csv => writer.write_all(csv_header(&schema).as_bytes())?,
            OutputFormat::Table => {
                writer.write_all(table_header(&schema).as_bytes())?;
            }
            OutputFormat::Json => {}
        }
    }

    let metrics = IngestMetrics::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.context("reading input line")?;

        match parse_line(&line, index, &schema) {
            Ok(record) => {
                metrics.record_parsed(&record);
                write_record(&mut *writer, &record, args.format, &render)?;
            }
            Err(err) => {
                metrics.record_rejected();
                warn!("{err}");
            }
        }
    }

    writer.flush()?;

    let snapshot = metrics.snapshot();
    info!(
        parsed = snapshot.lines_parsed,
        rejected = snapshot.lines_rejected,
        timestamp_fallbacks = snapshot.timestamp_fallbacks,
        "ingestion finished"
    );

    Ok(())
}

fn write_record(
    writer: &mut dyn Write,
    record: &LogRecord,
    format: OutputFormat,
    render: &RenderOptions,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Csv => writer.write_all(csv_line(record).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, &record.to_flat_map())?;
            writer.write_all(b"\n")?;
        }
        OutputFormat::Table => {
            writer.write_all(table_row(record, render).as_bytes())?;
        }
    }
    Ok(())
}

/// Tab-separated header matching [`table_row`]'s layout.
fn table_header(schema: &Columnizer) -> String {
    let mut out = String::from("Number");
    for column in schema.columns() {
        out.push('\t');
        out.push_str(&column.name);
    }
    out.push('\n');
    out
}

/// One record rendered through the display accessor: the index at display
/// position 1, then each column at positions 2 and up.
fn table_row(record: &LogRecord, render: &RenderOptions) -> String {
    let columns = record.schema().column_count();
    let mut out = String::new();

    for position in 1..columns + 2 {
        if position > 1 {
            out.push('\t');
        }
        out.push_str(&record.value_at(position, render));
    }
    out.push('\n');
    out
}
