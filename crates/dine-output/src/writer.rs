//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, PhilosopherSnapshotRow, TickSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors never abort the run. The observer stores the first one, which is
/// retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of philosopher snapshots.
    fn write_snapshots(&mut self, rows: &[PhilosopherSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Push everything written so far to disk.
    ///
    /// Idempotent, and writing may continue afterwards.
    fn flush(&mut self) -> OutputResult<()>;
}
