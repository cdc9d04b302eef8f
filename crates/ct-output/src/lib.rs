//! `ct-output` — trace dataset writers for the commute_trace workspace.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend     | File created      |
//! |-----------|-------------|-------------------|
//! | *(none)*  | CSV         | `traces.csv`      |
//! | `sqlite`  | SQLite      | `traces.db`       |
//! | `parquet` | Parquet     | `traces.parquet`  |
//!
//! Every backend writes the same four columns, `user_id`, `timestamp`,
//! `latitude`, `longitude`, in record order.  All backends implement
//! [`OutputWriter`] and are driven by [`TraceOutputObserver`], which
//! implements `ct_sim::TraceObserver` and streams each user as it completes.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ct_output::{CsvWriter, TraceOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TraceOutputObserver::new(writer);
//! let run = generator.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! println!("{}", format_preview(&run.records, 5));
//! ```

pub mod csv;
pub mod error;
pub mod format;
pub mod observer;
pub mod preview;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use format::{OutputFormat, open_writer};
pub use observer::TraceOutputObserver;
pub use preview::format_preview;
pub use row::{COLUMNS, TraceRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
