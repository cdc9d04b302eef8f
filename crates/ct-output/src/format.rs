//! Backend selection by name.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::info;

use crate::{CsvWriter, OutputError, OutputResult, OutputWriter};

/// The dataset file format.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Csv,
    Sqlite,
    Parquet,
}

impl OutputFormat {
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Csv     => "csv",
            OutputFormat::Sqlite  => "sqlite",
            OutputFormat::Parquet => "parquet",
        }
    }

    /// File created inside the output directory.
    pub fn file_name(self) -> &'static str {
        match self {
            OutputFormat::Csv     => "traces.csv",
            OutputFormat::Sqlite  => "traces.db",
            OutputFormat::Parquet => "traces.parquet",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv"              => Ok(OutputFormat::Csv),
            "sqlite" | "db"    => Ok(OutputFormat::Sqlite),
            "parquet"          => Ok(OutputFormat::Parquet),
            _                  => Err(OutputError::UnknownFormat(s.to_owned())),
        }
    }
}

/// Create `dir` if needed and open the writer for `format` inside it.
pub fn open_writer(format: OutputFormat, dir: &Path) -> OutputResult<Box<dyn OutputWriter>> {
    fs::create_dir_all(dir)?;
    let writer: Box<dyn OutputWriter> = match format {
        OutputFormat::Csv     => Box::new(CsvWriter::new(dir)?),
        OutputFormat::Sqlite  => open_sqlite(dir)?,
        OutputFormat::Parquet => open_parquet(dir)?,
    };
    info!("writing {}", dir.join(format.file_name()).display());
    Ok(writer)
}

#[cfg(feature = "sqlite")]
fn open_sqlite(dir: &Path) -> OutputResult<Box<dyn OutputWriter>> {
    Ok(Box::new(crate::SqliteWriter::new(dir)?))
}

#[cfg(not(feature = "sqlite"))]
fn open_sqlite(_dir: &Path) -> OutputResult<Box<dyn OutputWriter>> {
    Err(OutputError::FormatDisabled("sqlite"))
}

#[cfg(feature = "parquet")]
fn open_parquet(dir: &Path) -> OutputResult<Box<dyn OutputWriter>> {
    Ok(Box::new(crate::ParquetWriter::new(dir)?))
}

#[cfg(not(feature = "parquet"))]
fn open_parquet(_dir: &Path) -> OutputResult<Box<dyn OutputWriter>> {
    Err(OutputError::FormatDisabled("parquet"))
}
