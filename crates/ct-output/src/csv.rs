//! CSV output backend.
//!
//! Creates `traces.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{COLUMNS, OutputResult, TraceRow};

/// File name used inside the output directory.
pub const FILE_NAME: &str = "traces.csv";

/// Writes the trace dataset to one CSV file.
pub struct CsvWriter {
    rows:     Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `traces.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut rows = Writer::from_path(dir.join(FILE_NAME))?;
        rows.write_record(COLUMNS)?;
        Ok(Self { rows, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_rows(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
        for row in rows {
            self.rows.write_record(&[
                row.user_id.to_string(),
                row.timestamp.to_string(),
                row.latitude.to_string(),
                row.longitude.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
