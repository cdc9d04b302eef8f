//! The `TraceGenerator` struct and its per-user loop.

use ct_core::{TraceRecord, UserId, UserRng};
use ct_mobility::{Anchors, MotionModel};
use ct_schedule::{CommutePlan, Schedule};
use ct_spatial::{ClusterSet, LocationSampler, ReachabilityOracle, SampleOutcome, Validation};
use log::{debug, info};

use crate::{CancelToken, NoopObserver, SimConfig, SimError, SimResult, TraceGeneratorBuilder, TraceObserver};

// ── Run results ───────────────────────────────────────────────────────────────

/// Everything produced for one user.
#[derive(Clone, Debug)]
pub struct UserTrace {
    pub user:        UserId,
    pub anchors:     Anchors,
    pub home_sample: SampleOutcome,
    pub job_sample:  SampleOutcome,
    /// One record per schedule timestamp, in schedule order.
    pub records:     Vec<TraceRecord>,
}

/// Counters reported at the end of a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub users_requested:   u32,
    pub users_completed:   u32,
    pub records:           usize,
    /// Anchors the oracle confirmed reachable.
    pub validated_anchors: u32,
    /// Anchors kept after every oracle attempt failed.
    pub fallback_anchors:  u32,
    pub cancelled:         bool,
}

/// Output of [`TraceGenerator::run`].
#[derive(Clone, Debug)]
pub struct TraceRun {
    /// User-major, timestamp-minor.
    pub records: Vec<TraceRecord>,
    pub summary: RunSummary,
}

// ── TraceGenerator ────────────────────────────────────────────────────────────

/// Produces one day of commute traces for a population of users.
///
/// Each user runs three stages:
///
/// 1. **Clusters**: one home and one job cluster, uniformly with replacement.
/// 2. **Anchors**: home then job point via the [`LocationSampler`], which
///    consults the oracle when validation is on.
/// 3. **Trace**: one [`TraceRecord`] per schedule timestamp, positioned by
///    the [`MotionModel`] according to the [`CommutePlan`] phase.
///
/// Users draw from independent [`UserRng`] streams, so with the `parallel`
/// feature the output is bit-identical to a sequential run.
///
/// Create via [`TraceGeneratorBuilder`].
pub struct TraceGenerator {
    pub(crate) config:   SimConfig,
    pub(crate) clusters: ClusterSet,
    pub(crate) schedule: Schedule,
    pub(crate) plan:     CommutePlan,
    pub(crate) motion:   MotionModel,
    pub(crate) oracle:   Option<Box<dyn ReachabilityOracle>>,
    pub(crate) cancel:   CancelToken,
    #[cfg(feature = "parallel")]
    pub(crate) pool:     Option<rayon::ThreadPool>,
}

impl TraceGenerator {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn plan(&self) -> &CommutePlan {
        &self.plan
    }

    /// A handle that stops [`run`](Self::run) before the next user.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Simulate every user and collect their records.
    ///
    /// Observer hooks fire in ascending user order.  If the cancel token is
    /// triggered the run stops between users and returns what it has.
    pub fn run<O: TraceObserver>(&self, observer: &mut O) -> SimResult<TraceRun> {
        let users = self.config.user_count;
        info!(
            "generating traces: {} user(s) x {} timestamp(s), seed {}, oracle {}",
            users,
            self.schedule.len(),
            self.config.seed,
            if self.oracle.is_some() { "on" } else { "off" }
        );
        observer.on_run_start(users, self.schedule.len());

        let mut records = Vec::with_capacity(users as usize * self.schedule.len());
        let mut summary = RunSummary { users_requested: users, ..RunSummary::default() };

        #[cfg(not(feature = "parallel"))]
        for user in UserId::range(users) {
            if self.cancel.is_cancelled() {
                summary.cancelled = true;
                break;
            }
            let trace = self.simulate_user(user)?;
            emit(trace, observer, &mut records, &mut summary);
        }

        #[cfg(feature = "parallel")]
        for trace in self.simulate_parallel(users) {
            // Later users may have finished before the token flipped; only the
            // contiguous prefix is kept.
            let Some(trace) = trace else {
                summary.cancelled = true;
                break;
            };
            if self.cancel.is_cancelled() {
                summary.cancelled = true;
                break;
            }
            emit(trace?, observer, &mut records, &mut summary);
        }

        summary.records = records.len();
        if summary.cancelled {
            info!(
                "cancelled after {}/{} user(s), {} record(s)",
                summary.users_completed, users, summary.records
            );
        } else {
            info!(
                "generated {} record(s) for {} user(s); {} anchor(s) validated, {} fallback(s)",
                summary.records,
                summary.users_completed,
                summary.validated_anchors,
                summary.fallback_anchors
            );
        }
        observer.on_run_end(&summary);

        Ok(TraceRun { records, summary })
    }

    /// Simulate a single user.  Deterministic in `(config.seed, user)` when
    /// no oracle is attached.
    pub fn simulate_user(&self, user: UserId) -> SimResult<UserTrace> {
        let mut rng = UserRng::new(self.config.seed, user);
        let users = self.config.user_count;

        let home_cluster = self
            .clusters
            .pick_home(&mut rng)
            .ok_or(SimError::EmptyClusters { what: "home", users })?;
        let job_cluster = self
            .clusters
            .pick_job(&mut rng)
            .ok_or(SimError::EmptyClusters { what: "job", users })?;

        let sampler = LocationSampler::new(self.config.max_attempts)
            .pause(self.config.oracle_pause)
            .with_optional_oracle(self.oracle.as_deref());
        let home_sample = sampler.sample(home_cluster, &mut rng);
        let job_sample = sampler.sample(job_cluster, &mut rng);
        let anchors = Anchors::new(home_sample.point, job_sample.point);

        debug!(
            "{}: home {} in {} ({} attempt(s)), job {} in {} ({} attempt(s)), commute {:.0} m",
            user,
            anchors.home,
            home_cluster.label(),
            home_sample.attempts,
            anchors.job,
            job_cluster.label(),
            job_sample.attempts,
            anchors.commute_distance_m()
        );

        let records = self
            .schedule
            .iter()
            .map(|timestamp| TraceRecord {
                user,
                timestamp,
                position: self.motion.position(self.plan.phase_at(timestamp), &anchors, &mut rng),
            })
            .collect();

        Ok(UserTrace { user, anchors, home_sample, job_sample, records })
    }

    /// Run all users on the thread pool.  `None` marks users skipped after
    /// cancellation.
    #[cfg(feature = "parallel")]
    fn simulate_parallel(&self, users: u32) -> Vec<Option<SimResult<UserTrace>>> {
        use rayon::prelude::*;

        let ids: Vec<UserId> = UserId::range(users).collect();
        let work = || {
            ids.par_iter()
                .map(|&user| (!self.cancel.is_cancelled()).then(|| self.simulate_user(user)))
                .collect::<Vec<_>>()
        };
        match &self.pool {
            Some(pool) => pool.install(work),
            None => work(),
        }
    }
}

/// Hand a finished user to the observer and fold it into the run totals.
fn emit<O: TraceObserver>(
    trace:    UserTrace,
    observer: &mut O,
    records:  &mut Vec<TraceRecord>,
    summary:  &mut RunSummary,
) {
    observer.on_user_complete(&trace);
    summary.users_completed += 1;
    for sample in [trace.home_sample, trace.job_sample] {
        match sample.validation {
            Validation::Reachable => summary.validated_anchors += 1,
            Validation::Fallback => summary.fallback_anchors += 1,
            Validation::Unchecked => {}
        }
    }
    records.extend(trace.records);
}

/// One-shot generation with default [`SimConfig`] settings apart from the
/// user count.  No oracle, no observer.
pub fn generate_traces(
    user_count: u32,
    clusters:   ClusterSet,
    schedule:   Schedule,
    plan:       CommutePlan,
) -> SimResult<Vec<TraceRecord>> {
    let config = SimConfig { user_count, ..SimConfig::default() };
    let generator = TraceGeneratorBuilder::new(config, clusters, schedule)
        .commute_plan(plan)
        .build()?;
    Ok(generator.run(&mut NoopObserver)?.records)
}
