//! Integration tests for ct-sim.
//!
//! Oracles are in-process closures, so nothing here touches the network.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use ct_core::{GeoPoint, TimeOfDay, Timestamp, UserId};
use ct_schedule::{CommutePlan, Schedule};
use ct_spatial::{Cluster, ClusterSet, ReachabilityOracle};

use crate::{CancelToken, RunSummary, SimConfig, TraceGeneratorBuilder, TraceObserver, UserTrace};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn day() -> Timestamp {
    Timestamp::parse_date("2023-01-01").unwrap()
}

fn test_config(user_count: u32) -> SimConfig {
    SimConfig {
        user_count,
        oracle_pause: Duration::ZERO,
        num_threads: Some(2),
        ..SimConfig::default()
    }
}

fn full_day() -> Schedule {
    Schedule::daily(day(), 600).unwrap()
}

fn hm(h: u32, m: u32) -> TimeOfDay {
    TimeOfDay::hm(h, m).unwrap()
}

/// Single-point clusters pinning every user to home (9.00, -79.50) and job
/// (9.05, -79.48).
fn pinned_clusters() -> ClusterSet {
    ClusterSet::new(
        vec![Cluster::named("home", (9.00, 9.00), (-79.50, -79.50)).unwrap()],
        vec![Cluster::named("job", (9.05, 9.05), (-79.48, -79.48)).unwrap()],
    )
}

/// Oracle closure that counts calls and always answers `answer`.
fn counting_oracle(answer: bool) -> (Arc<AtomicU32>, Box<dyn ReachabilityOracle>) {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&calls);
    let oracle = move |_p: GeoPoint| {
        counter.fetch_add(1, Ordering::SeqCst);
        answer
    };
    (calls, Box::new(oracle))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Records the order of observer callbacks.
#[derive(Default)]
struct Recorder {
    started: Vec<(u32, usize)>,
    users:   Vec<UserId>,
    ended:   Vec<RunSummary>,
    /// Cancel this token once `cancel_after` users have completed.
    cancel:  Option<(CancelToken, u32)>,
}

impl TraceObserver for Recorder {
    fn on_run_start(&mut self, user_count: u32, schedule_len: usize) {
        self.started.push((user_count, schedule_len));
    }

    fn on_user_complete(&mut self, trace: &UserTrace) {
        self.users.push(trace.user);
        if let Some((token, after)) = &self.cancel {
            if trace.user.0 >= *after {
                token.cancel();
            }
        }
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        self.ended.push(summary.clone());
    }
}

// ── TraceGeneratorBuilder validation ──────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn builds_with_defaults() {
        let generator = TraceGeneratorBuilder::new(test_config(3), ClusterSet::panama_city(), full_day())
            .build()
            .unwrap();
        assert_eq!(generator.plan(), &CommutePlan::standard(day()));
        assert_eq!(generator.schedule().len(), 144);
    }

    #[test]
    fn empty_home_clusters_rejected() {
        let clusters = ClusterSet::new(vec![], ClusterSet::panama_city().job);
        let err = TraceGeneratorBuilder::new(test_config(1), clusters, full_day())
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::EmptyClusters { what: "home", users: 1 }));
    }

    #[test]
    fn empty_job_clusters_rejected() {
        let clusters = ClusterSet::new(ClusterSet::panama_city().home, vec![]);
        let err = TraceGeneratorBuilder::new(test_config(4), clusters, full_day())
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::EmptyClusters { what: "job", users: 4 }));
    }

    #[test]
    fn empty_clusters_allowed_without_users() {
        let generator = TraceGeneratorBuilder::new(test_config(0), ClusterSet::default(), full_day())
            .build()
            .unwrap();
        assert!(generator.run(&mut crate::NoopObserver).unwrap().records.is_empty());
    }

    #[test]
    fn window_on_another_day_rejected() {
        let next_day = day().offset(ct_core::SECS_PER_DAY);
        let result = TraceGeneratorBuilder::new(test_config(1), pinned_clusters(), full_day())
            .commute_plan(CommutePlan::standard(next_day))
            .build();
        assert!(matches!(result, Err(SimError::Schedule(_))));
    }

    #[test]
    fn negative_jitter_rejected() {
        let config = SimConfig { jitter_sigma_deg: -0.1, ..test_config(1) };
        let result = TraceGeneratorBuilder::new(config, pinned_clusters(), full_day()).build();
        assert!(matches!(result, Err(SimError::Mobility(_))));
    }

    #[test]
    fn validation_without_oracle_rejected() {
        let config = SimConfig { validate_locations: true, ..test_config(1) };
        let result = TraceGeneratorBuilder::new(config, pinned_clusters(), full_day()).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn zero_threads_rejected() {
        let config = SimConfig { num_threads: Some(0), ..test_config(1) };
        let result = TraceGeneratorBuilder::new(config, pinned_clusters(), full_day()).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }
}

// ── Record layout ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod layout_tests {
    use super::*;
    use crate::NoopObserver;

    #[test]
    fn one_record_per_user_and_timestamp() {
        let generator = TraceGeneratorBuilder::new(test_config(5), ClusterSet::panama_city(), full_day())
            .build()
            .unwrap();
        let run = generator.run(&mut NoopObserver).unwrap();
        assert_eq!(run.records.len(), 5 * 144);
        assert_eq!(run.summary.records, 5 * 144);
        assert_eq!(run.summary.users_completed, 5);
        assert!(!run.summary.cancelled);
    }

    #[test]
    fn user_major_timestamp_minor() {
        let schedule = full_day();
        let generator = TraceGeneratorBuilder::new(test_config(3), ClusterSet::panama_city(), schedule.clone())
            .build()
            .unwrap();
        let run = generator.run(&mut NoopObserver).unwrap();

        for (chunk, user) in run.records.chunks(schedule.len()).zip(UserId::range(3)) {
            assert!(chunk.iter().all(|r| r.user == user));
            let stamps: Vec<Timestamp> = chunk.iter().map(|r| r.timestamp).collect();
            assert_eq!(stamps, schedule.timestamps());
        }
    }

    #[test]
    fn user_ids_start_at_one() {
        let generator = TraceGeneratorBuilder::new(test_config(2), ClusterSet::panama_city(), full_day())
            .build()
            .unwrap();
        let run = generator.run(&mut NoopObserver).unwrap();
        assert_eq!(run.records.first().unwrap().user, UserId(1));
        assert_eq!(run.records.last().unwrap().user, UserId(2));
    }

    #[test]
    fn zero_users_empty_output() {
        let generator = TraceGeneratorBuilder::new(test_config(0), ClusterSet::panama_city(), full_day())
            .build()
            .unwrap();
        let run = generator.run(&mut NoopObserver).unwrap();
        assert!(run.records.is_empty());
        assert_eq!(run.summary.users_completed, 0);
    }

    #[test]
    fn empty_schedule_empty_output() {
        let schedule = Schedule::from_timestamps(day(), vec![]).unwrap();
        let generator = TraceGeneratorBuilder::new(test_config(4), ClusterSet::panama_city(), schedule)
            .build()
            .unwrap();
        let run = generator.run(&mut NoopObserver).unwrap();
        assert!(run.records.is_empty());
        assert_eq!(run.summary.users_completed, 4);
    }

    #[test]
    fn anchors_inside_chosen_clusters() {
        let clusters = ClusterSet::panama_city();
        let generator = TraceGeneratorBuilder::new(test_config(20), clusters.clone(), full_day())
            .build()
            .unwrap();
        for user in UserId::range(20) {
            let trace = generator.simulate_user(user).unwrap();
            assert!(clusters.home.iter().any(|c| c.contains(trace.anchors.home)));
            assert!(clusters.job.iter().any(|c| c.contains(trace.anchors.job)));
        }
    }

    #[test]
    fn generate_traces_uses_given_plan() {
        let plan = CommutePlan::from_times(day(), (hm(7, 0), hm(8, 0)), (hm(18, 0), hm(19, 0))).unwrap();
        let records = crate::generate_traces(2, pinned_clusters(), full_day(), plan).unwrap();
        assert_eq!(records.len(), 2 * 144);

        // 07:30 is index 45 on the 10-minute grid: halfway along the commute.
        let mid = records[45];
        assert_eq!(mid.timestamp, day().offset(7 * 3_600 + 1_800));
        assert!(close(mid.position.lat, 9.025));
    }
}

// ── Example day ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;
    use crate::NoopObserver;

    /// Two users, three timestamps, zero jitter.
    #[test]
    fn midnight_morning_evening() {
        let schedule = Schedule::from_timestamps(
            day(),
            vec![day(), day().offset(7 * 3_600 + 1_800), day().offset(18 * 3_600 + 1_800)],
        )
        .unwrap();
        let plan = CommutePlan::from_times(day(), (hm(7, 0), hm(8, 0)), (hm(18, 0), hm(19, 0))).unwrap();
        let config = SimConfig { jitter_sigma_deg: 0.0, ..test_config(2) };

        let generator = TraceGeneratorBuilder::new(config, pinned_clusters(), schedule)
            .commute_plan(plan)
            .build()
            .unwrap();
        let run = generator.run(&mut NoopObserver).unwrap();
        assert_eq!(run.records.len(), 6);

        for chunk in run.records.chunks(3) {
            let [home, morning, evening] = [chunk[0].position, chunk[1].position, chunk[2].position];
            assert!(close(home.lat, 9.00) && close(home.lon, -79.50));
            assert!(close(morning.lat, 9.025) && close(morning.lon, -79.49));
            assert!(close(evening.lat, 9.025) && close(evening.lon, -79.49));
        }
    }

    #[test]
    fn rest_positions_stay_near_anchor() {
        let generator = TraceGeneratorBuilder::new(test_config(1), pinned_clusters(), full_day())
            .build()
            .unwrap();
        let run = generator.run(&mut NoopObserver).unwrap();

        // 00:00 (home) and 12:00 (job); 0.005 is ten standard deviations.
        let night = run.records[0].position;
        let noon = run.records[72].position;
        assert!((night.lat - 9.00).abs() < 0.005 && (night.lon + 79.50).abs() < 0.005);
        assert!((noon.lat - 9.05).abs() < 0.005 && (noon.lon + 79.48).abs() < 0.005);
        assert_ne!(night, GeoPoint::new(9.00, -79.50));
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism_tests {
    use super::*;
    use crate::NoopObserver;

    fn run_with(config: SimConfig) -> Vec<ct_core::TraceRecord> {
        TraceGeneratorBuilder::new(config, ClusterSet::panama_city(), full_day())
            .build()
            .unwrap()
            .run(&mut NoopObserver)
            .unwrap()
            .records
    }

    #[test]
    fn same_seed_same_records() {
        assert_eq!(run_with(test_config(10)), run_with(test_config(10)));
    }

    #[test]
    fn different_seed_different_records() {
        let other = SimConfig { seed: 7, ..test_config(10) };
        assert_ne!(run_with(test_config(10)), run_with(other));
    }

    #[test]
    fn thread_count_does_not_matter() {
        let one = SimConfig { num_threads: Some(1), ..test_config(12) };
        let four = SimConfig { num_threads: Some(4), ..test_config(12) };
        assert_eq!(run_with(one), run_with(four));
    }

    #[test]
    fn run_matches_users_simulated_one_by_one() {
        let generator = TraceGeneratorBuilder::new(test_config(6), ClusterSet::panama_city(), full_day())
            .build()
            .unwrap();
        let run = generator.run(&mut NoopObserver).unwrap();

        let one_by_one: Vec<_> = UserId::range(6)
            .flat_map(|u| generator.simulate_user(u).unwrap().records)
            .collect();
        assert_eq!(run.records, one_by_one);
    }

    #[test]
    fn user_stream_independent_of_population() {
        let small = run_with(test_config(3));
        let large = run_with(test_config(8));
        assert_eq!(small[..], large[..small.len()]);
    }
}

// ── Oracle integration ────────────────────────────────────────────────────────

#[cfg(test)]
mod oracle_tests {
    use super::*;
    use crate::NoopObserver;

    #[test]
    fn unreachable_everywhere_still_produces_traces() {
        let (calls, oracle) = counting_oracle(false);
        let config = SimConfig { validate_locations: true, max_attempts: 3, ..test_config(2) };
        let generator = TraceGeneratorBuilder::new(config, ClusterSet::panama_city(), full_day())
            .oracle(oracle)
            .build()
            .unwrap();
        let run = generator.run(&mut NoopObserver).unwrap();

        assert_eq!(run.records.len(), 2 * 144);
        // 2 users x 2 anchors x 3 attempts
        assert_eq!(calls.load(Ordering::SeqCst), 12);
        assert_eq!(run.summary.fallback_anchors, 4);
        assert_eq!(run.summary.validated_anchors, 0);
    }

    #[test]
    fn reachable_on_first_try() {
        let (calls, oracle) = counting_oracle(true);
        let config = SimConfig { validate_locations: true, ..test_config(3) };
        let generator = TraceGeneratorBuilder::new(config, ClusterSet::panama_city(), full_day())
            .oracle(oracle)
            .build()
            .unwrap();
        let run = generator.run(&mut NoopObserver).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 6);
        assert_eq!(run.summary.validated_anchors, 6);
        assert_eq!(run.summary.fallback_anchors, 0);
    }

    #[test]
    fn oracle_ignored_when_validation_off() {
        let (calls, oracle) = counting_oracle(false);
        let generator = TraceGeneratorBuilder::new(test_config(3), ClusterSet::panama_city(), full_day())
            .oracle(oracle)
            .build()
            .unwrap();
        generator.run(&mut NoopObserver).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn zero_attempts_consults_oracle_once() {
        let (calls, oracle) = counting_oracle(false);
        let config = SimConfig { validate_locations: true, max_attempts: 0, ..test_config(1) };
        let generator = TraceGeneratorBuilder::new(config, pinned_clusters(), full_day())
            .oracle(oracle)
            .build()
            .unwrap();
        generator.simulate_user(UserId(1)).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}

// ── Observer and cancellation ─────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[test]
    fn hooks_fire_in_user_order() {
        let generator = TraceGeneratorBuilder::new(test_config(7), ClusterSet::panama_city(), full_day())
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let run = generator.run(&mut rec).unwrap();

        assert_eq!(rec.started, vec![(7, 144)]);
        assert_eq!(rec.users, UserId::range(7).collect::<Vec<_>>());
        assert_eq!(rec.ended, vec![run.summary]);
    }

    #[test]
    fn cancel_mid_run_keeps_prefix() {
        let generator = TraceGeneratorBuilder::new(test_config(6), ClusterSet::panama_city(), full_day())
            .build()
            .unwrap();
        let mut rec = Recorder { cancel: Some((generator.cancel_token(), 2)), ..Recorder::default() };
        let run = generator.run(&mut rec).unwrap();

        assert!(run.summary.cancelled);
        assert_eq!(run.summary.users_completed, 2);
        assert_eq!(rec.users, vec![UserId(1), UserId(2)]);
        assert_eq!(run.records.len(), 2 * 144);
        assert!(run.records.iter().all(|r| r.user.0 <= 2));
        assert_eq!(rec.ended.len(), 1);
    }

    #[test]
    fn cancelled_before_start_yields_nothing() {
        let generator = TraceGeneratorBuilder::new(test_config(3), ClusterSet::panama_city(), full_day())
            .build()
            .unwrap();
        generator.cancel_token().cancel();
        let run = generator.run(&mut Recorder::default()).unwrap();
        assert!(run.summary.cancelled);
        assert!(run.records.is_empty());
    }
}
