//! Fluent builder for constructing a [`TraceGenerator`].

use ct_mobility::MotionModel;
use ct_schedule::{CommutePlan, Schedule};
use ct_spatial::{ClusterSet, ReachabilityOracle};
use log::info;

use crate::{SimConfig, SimError, SimResult, TraceGenerator};

/// Fluent builder for [`TraceGenerator`].
///
/// # Required inputs
///
/// - [`SimConfig`] — user count, seed, sampler and jitter settings
/// - [`ClusterSet`] — home and job clusters
/// - [`Schedule`] — the day's sampling timestamps
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                  |
/// |---------------------|------------------------------------------|
/// | `.commute_plan(p)`  | `CommutePlan::standard(day_start)`       |
/// | `.oracle(o)`        | None (anchors are never validated)       |
///
/// # Example
///
/// ```rust,ignore
/// let generator = TraceGeneratorBuilder::new(config, ClusterSet::panama_city(), schedule)
///     .commute_plan(plan)
///     .oracle(Box::new(OverpassOracle::new()))
///     .build()?;
/// ```
pub struct TraceGeneratorBuilder {
    config:   SimConfig,
    clusters: ClusterSet,
    schedule: Schedule,
    plan:     Option<CommutePlan>,
    oracle:   Option<Box<dyn ReachabilityOracle>>,
}

impl TraceGeneratorBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, clusters: ClusterSet, schedule: Schedule) -> Self {
        Self {
            config,
            clusters,
            schedule,
            plan:   None,
            oracle: None,
        }
    }

    /// Supply the morning and evening commute windows.
    pub fn commute_plan(mut self, plan: CommutePlan) -> Self {
        self.plan = Some(plan);
        self
    }

    /// Supply the reachability oracle used when
    /// [`SimConfig::validate_locations`] is set.
    pub fn oracle(mut self, oracle: Box<dyn ReachabilityOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Validate inputs and return a ready-to-run [`TraceGenerator`].
    pub fn build(self) -> SimResult<TraceGenerator> {
        let users = self.config.user_count;

        // ── Clusters ──────────────────────────────────────────────────────
        if users > 0 {
            if self.clusters.home.is_empty() {
                return Err(SimError::EmptyClusters { what: "home", users });
            }
            if self.clusters.job.is_empty() {
                return Err(SimError::EmptyClusters { what: "job", users });
            }
        }

        // ── Commute windows ───────────────────────────────────────────────
        let plan = self
            .plan
            .unwrap_or_else(|| CommutePlan::standard(self.schedule.day_start()));
        plan.check_within(&self.schedule)?;

        // ── Motion model ──────────────────────────────────────────────────
        let motion = MotionModel::new(self.config.jitter_sigma_deg)?;

        // ── Oracle ────────────────────────────────────────────────────────
        let oracle = match (self.config.validate_locations, self.oracle) {
            (true, None) => {
                return Err(SimError::Config(
                    "location validation enabled but no reachability oracle supplied".into(),
                ));
            }
            (true, Some(o)) => Some(o),
            (false, Some(_)) => {
                info!("location validation disabled; ignoring the supplied oracle");
                None
            }
            (false, None) => None,
        };

        if self.config.num_threads == Some(0) {
            return Err(SimError::Config("num_threads must be at least 1".into()));
        }

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::Config(format!("cannot start worker pool: {e}")))?,
            ),
            None => None,
        };

        Ok(TraceGenerator {
            config:   self.config,
            clusters: self.clusters,
            schedule: self.schedule,
            plan,
            motion,
            oracle,
            cancel:   Default::default(),
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
