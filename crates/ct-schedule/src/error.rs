use thiserror::Error;

use ct_core::Timestamp;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("sampling interval must be at least one second")]
    ZeroInterval,

    #[error("schedule timestamp #{index} ({at}) does not come after the previous one")]
    NotIncreasing { index: usize, at: Timestamp },

    #[error("schedule timestamp #{index} ({at}) lies outside the day starting {day_start}")]
    OutsideDay { index: usize, at: Timestamp, day_start: Timestamp },

    #[error("{which} commute window is inverted or empty: start {start} is not before end {end}")]
    InvertedWindow { which: &'static str, start: Timestamp, end: Timestamp },

    #[error("commute windows overlap: morning ends {morning_end}, evening starts {evening_start}")]
    OverlappingWindows { morning_end: Timestamp, evening_start: Timestamp },

    #[error("{which} commute window [{start}, {end}) lies outside the day starting {day_start}")]
    WindowOutsideDay {
        which:     &'static str,
        start:     Timestamp,
        end:       Timestamp,
        day_start: Timestamp,
    },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
