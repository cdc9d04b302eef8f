//! Location sampler: uniform draw from a cluster, optionally validated.
//!
//! # Bounded, best-effort validation
//!
//! With an oracle attached, the sampler draws and tests up to
//! `max_attempts` candidates, pausing between attempts to respect the
//! oracle's rate limits.  The first reachable candidate wins.  If none is
//! reachable the last candidate is returned anyway, so sampling takes at
//! most `max_attempts × (oracle timeout + pause)` and never fails.

use std::thread;
use std::time::Duration;

use log::{debug, warn};

use ct_core::{GeoPoint, UserRng};

use crate::{Cluster, ReachabilityOracle};

/// Attempt cap used when the configuration does not override it.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Pause between oracle attempts used when the configuration does not
/// override it.
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(1);

// ── SampleOutcome ────────────────────────────────────────────────────────────

/// How the returned point relates to the oracle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    /// No oracle attached; the first draw is returned as is.
    Unchecked,
    /// The oracle reported the point reachable.
    Reachable,
    /// Every attempt was rejected; the point is the last candidate.
    Fallback,
}

/// Result of one sampling call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SampleOutcome {
    pub point:      GeoPoint,
    /// Number of candidates drawn (and, with an oracle, tested).
    pub attempts:   u32,
    pub validation: Validation,
}

// ── LocationSampler ──────────────────────────────────────────────────────────

/// Draws anchor points from clusters.
///
/// Borrowing the oracle keeps the sampler `Copy`-cheap to build per worker.
#[derive(Clone, Copy)]
pub struct LocationSampler<'a> {
    max_attempts: u32,
    pause:        Duration,
    oracle:       Option<&'a dyn ReachabilityOracle>,
}

impl<'a> LocationSampler<'a> {
    /// A sampler without an oracle.  `max_attempts` of 0 is treated as 1.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            pause:        DEFAULT_PAUSE,
            oracle:       None,
        }
    }

    /// Validate candidates against `oracle`.
    pub fn with_oracle(mut self, oracle: &'a dyn ReachabilityOracle) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Attach `oracle` if it is `Some`.
    pub fn with_optional_oracle(mut self, oracle: Option<&'a dyn ReachabilityOracle>) -> Self {
        self.oracle = oracle;
        self
    }

    /// Pause between consecutive oracle attempts.
    pub fn pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn has_oracle(&self) -> bool {
        self.oracle.is_some()
    }

    /// Draw a point from `cluster`, validating it if an oracle is attached.
    pub fn sample(&self, cluster: &Cluster, rng: &mut UserRng) -> SampleOutcome {
        let Some(oracle) = self.oracle else {
            return SampleOutcome {
                point:      cluster.sample_uniform(rng),
                attempts:   1,
                validation: Validation::Unchecked,
            };
        };

        let mut candidate = cluster.sample_uniform(rng);
        for attempt in 1..=self.max_attempts {
            if attempt > 1 {
                if !self.pause.is_zero() {
                    thread::sleep(self.pause);
                }
                candidate = cluster.sample_uniform(rng);
            }

            if oracle.is_reachable(candidate) {
                debug!(
                    "cluster {}: {} reachable after {} attempt(s)",
                    cluster.label(),
                    candidate,
                    attempt
                );
                return SampleOutcome {
                    point:      candidate,
                    attempts:   attempt,
                    validation: Validation::Reachable,
                };
            }
            debug!(
                "cluster {}: attempt {}/{} rejected {}",
                cluster.label(),
                attempt,
                self.max_attempts,
                candidate
            );
        }

        warn!(
            "cluster {}: no reachable point after {} attempts, keeping {}",
            cluster.label(),
            self.max_attempts,
            candidate
        );
        SampleOutcome {
            point:      candidate,
            attempts:   self.max_attempts,
            validation: Validation::Fallback,
        }
    }

    /// Like [`sample`](Self::sample) but returns only the point.
    pub fn sample_valid_location(&self, cluster: &Cluster, rng: &mut UserRng) -> GeoPoint {
        self.sample(cluster, rng).point
    }
}
