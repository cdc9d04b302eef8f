//! `TraceOutputObserver<W>` — bridges `TraceObserver` to an `OutputWriter`.

use ct_sim::{RunSummary, TraceObserver, UserTrace};
use log::debug;

use crate::row::TraceRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`TraceObserver`] that streams every completed user to any
/// [`OutputWriter`] backend (CSV, SQLite, Parquet, …).
///
/// Errors from the writer are stored internally because `TraceObserver`
/// methods have no return value.  After `generator.run()` returns, check for
/// errors with [`take_error`][Self::take_error].  Once a write fails, later
/// users are skipped so the file never has gaps in the middle.
pub struct TraceOutputObserver<W: OutputWriter> {
    writer:       W,
    rows_written: usize,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> TraceOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows_written: 0,
            last_error:   None,
        }
    }

    /// Take the stored write error (if any) after `generator.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TraceObserver for TraceOutputObserver<W> {
    fn on_user_complete(&mut self, trace: &UserTrace) {
        if self.last_error.is_some() {
            return;
        }
        let rows: Vec<TraceRow> = trace.records.iter().map(TraceRow::from).collect();
        let result = self.writer.write_rows(&rows);
        if result.is_ok() {
            self.rows_written += rows.len();
        }
        self.store_err(result);
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        debug!("{} of {} row(s) written", self.rows_written, summary.records);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
