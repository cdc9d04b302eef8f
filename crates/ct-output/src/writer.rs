//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, TraceRow};

/// Trait implemented by CSV, SQLite, and Parquet writers.
///
/// Rows are appended in the order given.  When driven by
/// [`TraceOutputObserver`][crate::TraceOutputObserver] errors are stored
/// and retrieved with `take_error`.
pub trait OutputWriter {
    /// Append a batch of rows.
    fn write_rows(&mut self, rows: &[TraceRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: OutputWriter + ?Sized> OutputWriter for Box<W> {
    fn write_rows(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
        (**self).write_rows(rows)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}
