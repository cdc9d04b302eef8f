//! Run configuration.

use std::time::Duration;

use ct_mobility::DEFAULT_JITTER_DEG;
use ct_spatial::{DEFAULT_MAX_ATTEMPTS, DEFAULT_PAUSE};

/// Top-level generator configuration.
///
/// Schedule, commute windows, and clusters are passed to the builder
/// separately; this struct holds the scalar knobs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of simulated users.  Ids run `1..=user_count`; 0 yields an
    /// empty run.
    pub user_count: u32,

    /// Master RNG seed.  The same seed always produces identical records
    /// when location validation is off.
    pub seed: u64,

    /// Oracle attempts per anchor before falling back to the last candidate.
    pub max_attempts: u32,

    /// Pause between oracle attempts.
    pub oracle_pause: Duration,

    /// Validate sampled anchors against the reachability oracle.  Requires
    /// an oracle to be supplied to the builder.
    pub validate_locations: bool,

    /// Standard deviation of rest jitter, degrees.
    pub jitter_sigma_deg: f64,

    /// Worker thread count for the `parallel` feature.  `None` uses Rayon's
    /// global pool (all logical cores).  Ignored without the feature.
    pub num_threads: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            user_count:         100,
            seed:               42,
            max_attempts:       DEFAULT_MAX_ATTEMPTS,
            oracle_pause:       DEFAULT_PAUSE,
            validate_locations: false,
            jitter_sigma_deg:   DEFAULT_JITTER_DEG,
            num_threads:        None,
        }
    }
}
