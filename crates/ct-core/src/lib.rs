//! `ct-core` — foundational types for the `commute_trace` generator.
//!
//! This crate is a dependency of every other `ct-*` crate.  It intentionally
//! has no `ct-*` dependencies and minimal external ones (`rand`, `chrono`
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `UserId`                                              |
//! | [`geo`]         | `GeoPoint`, interpolation, haversine distance         |
//! | [`time`]        | `Timestamp`, `TimeOfDay`                              |
//! | [`rng`]         | `UserRng` (one independent stream per user)           |
//! | [`record`]      | `TraceRecord`                                         |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod record;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::UserId;
pub use record::TraceRecord;
pub use rng::UserRng;
pub use time::{SECS_PER_DAY, TimeOfDay, Timestamp};
