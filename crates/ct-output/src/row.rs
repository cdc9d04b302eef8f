//! The flat row type written by output backends.

use ct_core::{TraceRecord, Timestamp};

/// Column names shared by every backend, in order.
pub const COLUMNS: [&str; 4] = ["user_id", "timestamp", "latitude", "longitude"];

/// One output row: a [`TraceRecord`] with its fields flattened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRow {
    pub user_id:   u32,
    /// Written as `YYYY-MM-DD HH:MM:SS` (UTC) by the text backends.
    pub timestamp: Timestamp,
    pub latitude:  f64,
    pub longitude: f64,
}

impl From<&TraceRecord> for TraceRow {
    fn from(r: &TraceRecord) -> Self {
        Self {
            user_id:   r.user.0,
            timestamp: r.timestamp,
            latitude:  r.position.lat,
            longitude: r.position.lon,
        }
    }
}
