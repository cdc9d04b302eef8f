//! The shared timestamp grid.
//!
//! A [`Schedule`] is an ordered list of instants inside one day
//! `[day_start, day_start + 24h)`.  The regular grid built by
//! [`Schedule::daily`] is the normal case; [`Schedule::from_timestamps`]
//! accepts any strictly increasing list so custom or sparse grids can be
//! simulated too.  An empty schedule is valid and yields no records.

use ct_core::{SECS_PER_DAY, Timestamp};

use crate::{ScheduleError, ScheduleResult};

/// Ten minutes.
pub const DEFAULT_INTERVAL_SECS: u32 = 600;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Schedule {
    day_start:  Timestamp,
    timestamps: Vec<Timestamp>,
}

impl Schedule {
    /// Every `interval_secs` from `day_start` up to (not including) the next
    /// day start.  With the default 10-minute interval this is 144 entries.
    pub fn daily(day_start: Timestamp, interval_secs: u32) -> ScheduleResult<Schedule> {
        if interval_secs == 0 {
            return Err(ScheduleError::ZeroInterval);
        }
        let step = interval_secs as i64;
        let count = (SECS_PER_DAY as u64).div_ceil(interval_secs as u64) as i64;
        let timestamps = (0..count).map(|i| day_start.offset(i * step)).collect();
        Ok(Schedule { day_start, timestamps })
    }

    /// An explicit grid.  Timestamps must be strictly increasing and lie in
    /// `[day_start, day_start + 24h)`.
    pub fn from_timestamps(day_start: Timestamp, timestamps: Vec<Timestamp>) -> ScheduleResult<Schedule> {
        let day_end = day_start.offset(SECS_PER_DAY);
        for (index, &at) in timestamps.iter().enumerate() {
            if at < day_start || at >= day_end {
                return Err(ScheduleError::OutsideDay { index, at, day_start });
            }
            if index > 0 && at <= timestamps[index - 1] {
                return Err(ScheduleError::NotIncreasing { index, at });
            }
        }
        Ok(Schedule { day_start, timestamps })
    }

    pub fn day_start(&self) -> Timestamp {
        self.day_start
    }

    /// Exclusive end of the simulated day.
    pub fn day_end(&self) -> Timestamp {
        self.day_start.offset(SECS_PER_DAY)
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn timestamps(&self) -> &[Timestamp] {
        &self.timestamps
    }

    pub fn iter(&self) -> impl Iterator<Item = Timestamp> + '_ {
        self.timestamps.iter().copied()
    }
}
