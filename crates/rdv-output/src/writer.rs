//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, RobotStatsRow, TickSummaryRow, TraceRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write the end-of-run per-robot statistics.
    fn write_robot_stats(&mut self, rows: &[RobotStatsRow]) -> OutputResult<()>;

    /// Write the full position traces.
    fn write_traces(&mut self, rows: &[TraceRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
