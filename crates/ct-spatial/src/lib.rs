//! `ct-spatial` — sampling domains, reachability validation, and the
//! location sampler.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`cluster`]  | `Cluster` (bounding box), `ClusterSet` (home + job lists)   |
//! | [`oracle`]   | `ReachabilityOracle` trait                                  |
//! | [`sampler`]  | `LocationSampler`, `SampleOutcome`                          |
//! | [`loader`]   | `load_clusters_csv`, `load_clusters_reader`                 |
//! | [`overpass`] | `OverpassOracle` (feature = `"overpass"` only)              |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `overpass` | Enables the Overpass API oracle via `ureq`.               |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod cluster;
pub mod error;
pub mod loader;
pub mod oracle;
pub mod sampler;

#[cfg(feature = "overpass")]
pub mod overpass;


pub use cluster::{Cluster, ClusterSet};
pub use error::{SpatialError, SpatialResult};
pub use loader::{load_clusters_csv, load_clusters_reader};
pub use oracle::ReachabilityOracle;
pub use sampler::{DEFAULT_MAX_ATTEMPTS, DEFAULT_PAUSE, LocationSampler, SampleOutcome, Validation};

#[cfg(feature = "overpass")]
pub use overpass::OverpassOracle;
