//! Exporters — stateless transformers from a [`crate::LogRecord`] to an
//! external representation.

pub mod bridge;
pub mod csv;

pub use bridge::ToFlatMap;
pub use csv::{csv_header, csv_line, LINE_TERMINATOR};
