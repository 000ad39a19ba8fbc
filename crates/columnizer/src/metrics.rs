//! Ingest accounting.
//!
//! Rejected lines must be counted and reported, never silently dropped.
//! The counters use `Relaxed` atomics — parsing fans out across worker
//! threads and eventual correctness is all observability needs here.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::record::LogRecord;

/// Shared counters for one bulk ingestion run.
#[derive(Debug, Default)]
pub struct IngestMetrics {
    lines_parsed: AtomicU64,
    lines_rejected: AtomicU64,
    timestamp_fallbacks: AtomicU64,
}

impl IngestMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully parsed line.
    #[inline]
    pub fn record_parsed(&self, record: &LogRecord) {
        self.lines_parsed.fetch_add(1, Ordering::Relaxed);
        if record.timestamp().is_none() {
            self.timestamp_fallbacks.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a line rejected by a required-column mismatch.
    #[inline]
    pub fn record_rejected(&self) {
        self.lines_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Read the current counters.
    ///
    /// Individual reads are atomic but the snapshot as a whole is not
    /// transactional; slight tearing across fields is acceptable.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let parsed = self.lines_parsed.load(Ordering::Relaxed);
        let rejected = self.lines_rejected.load(Ordering::Relaxed);
        let total = parsed + rejected;

        MetricsSnapshot {
            lines_parsed: parsed,
            lines_rejected: rejected,
            timestamp_fallbacks: self.timestamp_fallbacks.load(Ordering::Relaxed),
            accept_rate: if total > 0 {
                parsed as f64 / total as f64
            } else {
                1.0
            },
        }
    }
}

/// A read-only snapshot of ingest counters, serializable for logging or
/// structured output.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub lines_parsed: u64,
    pub lines_rejected: u64,
    /// Lines whose Timestamp column text did not match the schema format.
    pub timestamp_fallbacks: u64,
    pub accept_rate: f64,
}
