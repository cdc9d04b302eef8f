//! `ct-sim` — the trace generator for the commute_trace workspace.
//!
//! # Per-user loop
//!
//! ```text
//! for user in 1..=config.user_count:
//!   ① Cancel    — stop here if the run's CancelToken was triggered.
//!   ② Clusters  — pick a home and a job cluster (uniform, with replacement).
//!   ③ Anchors   — sample home, then job, via the LocationSampler
//!                 (oracle-validated when one is attached).
//!   ④ Motion    — for each schedule timestamp: classify the phase,
//!                 compute the position, emit a TraceRecord.
//!   ⑤ Observe   — hand the finished user to the TraceObserver.
//! ```
//!
//! Every user draws from its own `UserRng(seed, user)`, so users share no
//! mutable state.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs step ②–④ on Rayon's thread pool.                  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ct_core::Timestamp;
//! use ct_schedule::Schedule;
//! use ct_sim::{NoopObserver, SimConfig, TraceGeneratorBuilder};
//! use ct_spatial::ClusterSet;
//!
//! let day = Timestamp::parse_date("2023-01-01")?;
//! let schedule = Schedule::daily(day, 600)?;
//! let generator = TraceGeneratorBuilder::new(SimConfig::default(), ClusterSet::panama_city(), schedule)
//!     .build()?;
//! let run = generator.run(&mut NoopObserver)?;
//! assert_eq!(run.records.len(), 100 * 144);
//! ```

pub mod builder;
pub mod cancel;
pub mod config;
pub mod error;
pub mod generator;
pub mod observer;

#[cfg(test)]
mod tests;

pub use builder::TraceGeneratorBuilder;
pub use cancel::CancelToken;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use generator::{RunSummary, TraceGenerator, TraceRun, UserTrace, generate_traces};
pub use observer::{NoopObserver, TraceObserver};
