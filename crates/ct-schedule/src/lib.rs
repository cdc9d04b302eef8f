//! `ct-schedule` — the daily timestamp grid and the commute windows that
//! partition it into motion phases.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`schedule`]  | `Schedule` — ordered timestamps within one day            |
//! | [`window`]    | `CommuteWindow`, `CommutePlan` (morning + evening)        |
//! | [`phase`]     | `Phase` — which motion rule applies at a timestamp        |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Phase model (summary)
//!
//! With a valid plan (`morning.start < morning.end <= evening.start <
//! evening.end`), every timestamp `t` falls in exactly one half-open phase:
//!
//! ```text
//! t <  morning.start                  → BeforeMorning
//! morning.start <= t < morning.end    → MorningCommute(frac)
//! morning.end   <= t < evening.start  → MidDay
//! evening.start <= t < evening.end    → EveningCommute(frac)
//! t >= evening.end                    → AfterEvening
//! ```

pub mod error;
pub mod phase;
pub mod schedule;
pub mod window;


pub use error::{ScheduleError, ScheduleResult};
pub use phase::Phase;
pub use schedule::{DEFAULT_INTERVAL_SECS, Schedule};
pub use window::{CommutePlan, CommuteWindow};
