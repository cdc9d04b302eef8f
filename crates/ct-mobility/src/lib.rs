//! `ct-mobility` — where a user is at a given phase of the day.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`anchors`] | `Anchors` — a user's home and job coordinates                     |
//! | [`motion`]  | `MotionModel` — rest jitter + straight-line commute interpolation |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                              |
//!
//! # Movement model
//!
//! Users are either **resting** at an anchor or **commuting** between the
//! two anchors:
//!
//! 1. At rest (before the morning commute, mid-day, after the evening
//!    commute) the position is the anchor plus independent Gaussian jitter
//!    on each axis, drawn fresh per timestamp.
//! 2. While commuting the position is the straight-line interpolation
//!    `from + frac * (to - from)` with no jitter, where `frac` is the
//!    progress through the commute window.
//!
//! Nothing here knows about roads; paths are straight lines by construction.

pub mod anchors;
pub mod error;
pub mod motion;


pub use anchors::Anchors;
pub use error::{MobilityError, MobilityResult};
pub use motion::{DEFAULT_JITTER_DEG, MotionModel};
