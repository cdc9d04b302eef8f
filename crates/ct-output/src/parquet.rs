//! Parquet output backend (feature `parquet`).
//!
//! Creates `traces.parquet` in the configured output directory.  The
//! `timestamp` column is a second-resolution Arrow timestamp in UTC.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Float64Builder, TimestampSecondBuilder, UInt32Builder};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{OutputResult, TraceRow};

/// File name used inside the output directory.
pub const FILE_NAME: &str = "traces.parquet";

const UTC: &str = "UTC";

fn trace_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("user_id",   DataType::UInt32,  false),
        Field::new("timestamp", DataType::Timestamp(TimeUnit::Second, Some(UTC.into())), false),
        Field::new("latitude",  DataType::Float64, false),
        Field::new("longitude", DataType::Float64, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes the trace dataset to one Parquet file.
///
/// `finish()` **must** be called to write the Parquet file footer; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    rows:   Option<ArrowWriter<File>>,
    schema: Arc<Schema>,
}

impl ParquetWriter {
    /// Create `traces.parquet` in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let schema = trace_schema();
        let file = File::create(dir.join(FILE_NAME))?;
        let rows = ArrowWriter::try_new(file, Arc::clone(&schema), Some(snappy_props()))?;
        Ok(Self { rows: Some(rows), schema })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_rows(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.rows.as_mut() else {
            return Ok(());
        };

        let mut user_ids   = UInt32Builder::with_capacity(rows.len());
        let mut timestamps = TimestampSecondBuilder::with_capacity(rows.len()).with_timezone(UTC);
        let mut latitudes  = Float64Builder::with_capacity(rows.len());
        let mut longitudes = Float64Builder::with_capacity(rows.len());

        for row in rows {
            user_ids.append_value(row.user_id);
            timestamps.append_value(row.timestamp.0);
            latitudes.append_value(row.latitude);
            longitudes.append_value(row.longitude);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.schema),
            vec![
                Arc::new(user_ids.finish()),
                Arc::new(timestamps.finish()),
                Arc::new(latitudes.finish()),
                Arc::new(longitudes.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.rows.take() {
            w.close()?;
        }
        Ok(())
    }
}
