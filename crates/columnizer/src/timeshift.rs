//! Shared display-time offset.
//!
//! One handle per log session, written by the presentation layer whenever
//! the user adjusts the shift and read on every render. Stored as whole
//! milliseconds in an atomic so single-value reads never need a lock and a
//! write is visible to all subsequent display reads.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Duration;

/// Cloneable handle to a shared, atomically-updated display offset.
///
/// Cloning shares the underlying value: every clone observes writes made
/// through any other clone.
#[derive(Debug, Clone, Default)]
pub struct TimeShift {
    millis: Arc<AtomicI64>,
}

impl TimeShift {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle pre-set to the given offset.
    pub fn from_millis(millis: i64) -> Self {
        let shift = Self::new();
        shift.millis.store(millis, Ordering::Relaxed);
        shift
    }

    /// Replace the current offset. Sub-millisecond precision is discarded.
    pub fn set(&self, offset: Duration) {
        self.millis.store(offset.num_milliseconds(), Ordering::Relaxed);
    }

    /// Current offset.
    pub fn get(&self) -> Duration {
        Duration::milliseconds(self.millis.load(Ordering::Relaxed))
    }

    /// Reset the offset to zero.
    pub fn clear(&self) {
        self.millis.store(0, Ordering::Relaxed);
    }
}
