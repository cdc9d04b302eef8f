//! Commute windows and the two-window daily plan.
//!
//! Both invariants that keep phase matching unambiguous are enforced at
//! construction: each window is non-empty (`start < end`), and the morning
//! window ends no later than the evening window starts.  A plan that
//! violates either is rejected with a descriptive error rather than being
//! resolved by evaluation order.

use ct_core::{TimeOfDay, Timestamp};

use crate::{Phase, Schedule, ScheduleError, ScheduleResult};

// ── CommuteWindow ────────────────────────────────────────────────────────────

/// A half-open interval `[start, end)` of linear interpolation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CommuteWindow {
    start: Timestamp,
    end:   Timestamp,
}

impl CommuteWindow {
    pub fn new(start: Timestamp, end: Timestamp) -> ScheduleResult<CommuteWindow> {
        Self::checked("commute", start, end)
    }

    fn checked(which: &'static str, start: Timestamp, end: Timestamp) -> ScheduleResult<CommuteWindow> {
        if start >= end {
            return Err(ScheduleError::InvertedWindow { which, start, end });
        }
        Ok(CommuteWindow { start, end })
    }

    /// Window between two times of day on the day starting at `day_start`.
    pub fn on_day(day_start: Timestamp, from: TimeOfDay, to: TimeOfDay) -> ScheduleResult<CommuteWindow> {
        Self::new(from.on(day_start), to.on(day_start))
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    pub fn duration_secs(&self) -> i64 {
        self.end.since(self.start)
    }

    #[inline]
    pub fn contains(&self, t: Timestamp) -> bool {
        self.start <= t && t < self.end
    }

    /// `(t - start) / (end - start)`; in `[0, 1)` for `t` inside the window.
    #[inline]
    pub fn progress(&self, t: Timestamp) -> f64 {
        t.since(self.start) as f64 / self.duration_secs() as f64
    }
}

// ── CommutePlan ──────────────────────────────────────────────────────────────

/// The morning and evening windows of one simulated day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CommutePlan {
    morning: CommuteWindow,
    evening: CommuteWindow,
}

impl CommutePlan {
    /// Reject overlapping windows.  Touching windows
    /// (`morning.end == evening.start`) leave an empty mid-day phase and are
    /// allowed.
    pub fn new(morning: CommuteWindow, evening: CommuteWindow) -> ScheduleResult<CommutePlan> {
        if morning.end > evening.start {
            return Err(ScheduleError::OverlappingWindows {
                morning_end:   morning.end,
                evening_start: evening.start,
            });
        }
        Ok(CommutePlan { morning, evening })
    }

    /// Build both windows from times of day, naming the offending window in
    /// any error.
    pub fn from_times(
        day_start: Timestamp,
        morning:   (TimeOfDay, TimeOfDay),
        evening:   (TimeOfDay, TimeOfDay),
    ) -> ScheduleResult<CommutePlan> {
        let m = CommuteWindow::checked("morning", morning.0.on(day_start), morning.1.on(day_start))?;
        let e = CommuteWindow::checked("evening", evening.0.on(day_start), evening.1.on(day_start))?;
        Self::new(m, e)
    }

    /// 05:00–07:00 and 17:00–19:00.
    pub fn standard(day_start: Timestamp) -> CommutePlan {
        let h = |hours: i64| day_start.offset(hours * 3_600);
        CommutePlan {
            morning: CommuteWindow { start: h(5), end: h(7) },
            evening: CommuteWindow { start: h(17), end: h(19) },
        }
    }

    pub fn morning(&self) -> CommuteWindow {
        self.morning
    }

    pub fn evening(&self) -> CommuteWindow {
        self.evening
    }

    /// Check both windows lie within the schedule's day.
    ///
    /// A window may end exactly at the day's end.
    pub fn check_within(&self, schedule: &Schedule) -> ScheduleResult<()> {
        let (lo, hi) = (schedule.day_start(), schedule.day_end());
        for (which, w) in [("morning", self.morning), ("evening", self.evening)] {
            if w.start < lo || w.end > hi {
                return Err(ScheduleError::WindowOutsideDay {
                    which,
                    start: w.start,
                    end: w.end,
                    day_start: lo,
                });
            }
        }
        Ok(())
    }

    /// Classify `t`.  Total: every timestamp maps to exactly one phase.
    pub fn phase_at(&self, t: Timestamp) -> Phase {
        if t < self.morning.start {
            Phase::BeforeMorning
        } else if t < self.morning.end {
            Phase::MorningCommute(self.morning.progress(t))
        } else if t < self.evening.start {
            Phase::MidDay
        } else if t < self.evening.end {
            Phase::EveningCommute(self.evening.progress(t))
        } else {
            Phase::AfterEvening
        }
    }
}
