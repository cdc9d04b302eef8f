//! Reachability oracle trait.
//!
//! # Pluggability
//!
//! The sampler calls validation through the [`ReachabilityOracle`] trait, so
//! applications can swap in an Overpass query, a local building footprint
//! index, or a test double without touching the generator.
//!
//! # Failure model
//!
//! The operation returns a plain `bool`.  Implementations absorb their own
//! failures (network errors, timeouts, malformed replies) and answer
//! `false`.  Validation is a best-effort refinement, never a reason to
//! abort a run.

use ct_core::GeoPoint;

/// Answers whether a coordinate lies near a road or a building.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one oracle can be shared across
/// Rayon workers when users are generated in parallel.
pub trait ReachabilityOracle: Send + Sync {
    fn is_reachable(&self, point: GeoPoint) -> bool;
}

impl<F> ReachabilityOracle for F
where
    F: Fn(GeoPoint) -> bool + Send + Sync,
{
    fn is_reachable(&self, point: GeoPoint) -> bool {
        self(point)
    }
}
