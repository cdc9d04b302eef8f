//! SQLite output backend (feature `sqlite`).
//!
//! Creates `traces.db` in the configured output directory with a single
//! `traces` table.  Timestamps are stored as `YYYY-MM-DD HH:MM:SS` text,
//! which SQLite's date functions understand directly.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, TraceRow};

/// File name used inside the output directory.
pub const FILE_NAME: &str = "traces.db";

/// Writes the trace dataset to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `traces.db` in `dir` and initialise the schema.
    ///
    /// An existing `traces` table is replaced.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join(FILE_NAME))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             DROP TABLE IF EXISTS traces;
             CREATE TABLE traces (
                 user_id   INTEGER NOT NULL,
                 timestamp TEXT    NOT NULL,
                 latitude  REAL    NOT NULL,
                 longitude REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_rows(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO traces (user_id, timestamp, latitude, longitude) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.user_id,
                    row.timestamp.to_string(),
                    row.latitude,
                    row.longitude,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
