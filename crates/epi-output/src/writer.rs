//! The `OutputWriter` trait implemented by backend writers.

use crate::{AgentSnapshotRow, DailyStatusRow, OutputResult, RunSummary, TransmissionRow};

/// Sink for everything a run reports.
///
/// Writers return errors; [`ModelOutputObserver`][crate::ModelOutputObserver]
/// stores the first one for retrieval with `take_error`.
pub trait OutputWriter {
    fn write_transmissions(&mut self, rows: &[TransmissionRow]) -> OutputResult<()>;

    fn write_daily_status(&mut self, row: &DailyStatusRow) -> OutputResult<()>;

    /// Per-agent end-of-day rows.  Backends that do not keep snapshots may
    /// ignore them.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    fn write_summary(&mut self, summary: &RunSummary) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
