//! Per-user anchor points.

use ct_core::GeoPoint;

/// A user's home and job coordinates for the simulated day.
///
/// Resolved once when the user's simulation starts and never changed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchors {
    pub home: GeoPoint,
    pub job:  GeoPoint,
}

impl Anchors {
    #[inline]
    pub fn new(home: GeoPoint, job: GeoPoint) -> Self {
        Self { home, job }
    }

    /// Straight-line commute length in metres.
    pub fn commute_distance_m(&self) -> f64 {
        self.home.distance_m(self.job)
    }
}
