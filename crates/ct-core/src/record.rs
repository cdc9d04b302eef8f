//! The record type emitted by the trace generator.

use crate::{GeoPoint, Timestamp, UserId};

/// One observed position of one user at one schedule timestamp.
///
/// Records are created once and never mutated.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceRecord {
    pub user:      UserId,
    pub timestamp: Timestamp,
    pub position:  GeoPoint,
}
