//! Simulation time model.
//!
//! # Design
//!
//! Instants are whole Unix seconds (UTC) wrapped in [`Timestamp`].  Times of
//! day are offsets from midnight wrapped in [`TimeOfDay`]:
//!
//!   instant = day_start + time_of_day.secs()
//!
//! Keeping the canonical unit integral means schedule grids and commute
//! window comparisons are exact; only the commute progress fraction is
//! floating point.  `chrono` is used at the edges only, for parsing dates
//! and rendering timestamps.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime};

use crate::{CoreError, CoreResult};

/// Seconds in one calendar day (UTC, no leap seconds).
pub const SECS_PER_DAY: i64 = 86_400;

// ── Timestamp ────────────────────────────────────────────────────────────────

/// An absolute instant in whole Unix seconds (UTC).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Midnight UTC of `date`.
    pub fn start_of_day(date: NaiveDate) -> Timestamp {
        Timestamp(date.and_time(NaiveTime::MIN).and_utc().timestamp())
    }

    /// Parse a `YYYY-MM-DD` date into its midnight UTC.
    pub fn parse_date(s: &str) -> CoreResult<Timestamp> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Timestamp::start_of_day)
            .map_err(|e| CoreError::Parse(format!("invalid date {s:?}: {e}")))
    }

    /// The instant `secs` seconds after `self`.
    #[inline]
    pub fn offset(self, secs: i64) -> Timestamp {
        Timestamp(self.0 + secs)
    }

    /// Seconds elapsed from `earlier` to `self` (negative if `earlier` is later).
    #[inline]
    pub fn since(self, earlier: Timestamp) -> i64 {
        self.0 - earlier.0
    }

    /// Midnight UTC of the day containing `self`.
    #[inline]
    pub fn day_start(self) -> Timestamp {
        Timestamp(self.0.div_euclid(SECS_PER_DAY) * SECS_PER_DAY)
    }
}

impl fmt::Display for Timestamp {
    /// Renders as `YYYY-MM-DD HH:MM:SS`, or the raw seconds if out of range.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::from_timestamp(self.0, 0) {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            None => write!(f, "{}s", self.0),
        }
    }
}

// ── TimeOfDay ────────────────────────────────────────────────────────────────

/// Offset from midnight, `00:00` through `24:00` inclusive.
///
/// `24:00` is accepted so a window may end exactly at the end of the day.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(SECS_PER_DAY as u32);

    /// `None` if the result would lie past `24:00`.
    pub fn hm(hours: u32, minutes: u32) -> Option<TimeOfDay> {
        if minutes >= 60 {
            return None;
        }
        let secs = hours.checked_mul(3_600)?.checked_add(minutes * 60)?;
        (secs as i64 <= SECS_PER_DAY).then_some(TimeOfDay(secs))
    }

    #[inline]
    pub fn secs(self) -> u32 {
        self.0
    }

    /// The instant this time of day falls on, for the day starting at `day_start`.
    #[inline]
    pub fn on(self, day_start: Timestamp) -> Timestamp {
        day_start.offset(self.0 as i64)
    }
}

impl FromStr for TimeOfDay {
    type Err = CoreError;

    /// Accepts `H:MM` / `HH:MM`.
    fn from_str(s: &str) -> CoreResult<TimeOfDay> {
        let bad = || CoreError::Parse(format!("invalid time of day {s:?}: expected HH:MM"));
        let (h, m) = s.trim().split_once(':').ok_or_else(bad)?;
        if m.len() != 2 {
            return Err(bad());
        }
        let hours: u32 = h.parse().map_err(|_| bad())?;
        let minutes: u32 = m.parse().map_err(|_| bad())?;
        TimeOfDay::hm(hours, minutes).ok_or_else(bad)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 3_600, (self.0 % 3_600) / 60)
    }
}
