//! CSV cluster loader.
//!
//! # CSV format
//!
//! One row per cluster.  `name` may be left empty for anonymous clusters.
//!
//! ```csv
//! role,name,lat_min,lat_max,lon_min,lon_max
//! home,home-south,8.95,8.98,-79.55,-79.50
//! home,,8.99,9.02,-79.55,-79.50
//! job,business-district,9.05,9.10,-79.55,-79.45
//! ```
//!
//! **`role`** is `home` or `job`.  Every row is validated as it is read; the
//! first invalid row aborts the load with an error naming its line.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{Cluster, ClusterSet, SpatialError, SpatialResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ClusterRecord {
    role:    String,
    #[serde(default)]
    name:    Option<String>,
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`ClusterSet`] from a CSV file.
pub fn load_clusters_csv(path: &Path) -> SpatialResult<ClusterSet> {
    let file = std::fs::File::open(path).map_err(SpatialError::Io)?;
    load_clusters_reader(file)
}

/// Like [`load_clusters_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for clusters embedded
/// in the binary.
pub fn load_clusters_reader<R: Read>(reader: R) -> SpatialResult<ClusterSet> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut set = ClusterSet::default();

    for (i, result) in csv_reader.deserialize::<ClusterRecord>().enumerate() {
        // Line 1 is the header.
        let line = i + 2;
        let row = result.map_err(|e| SpatialError::Parse(format!("line {line}: {e}")))?;

        let name = row.name.filter(|n| !n.is_empty());
        let lat = (row.lat_min, row.lat_max);
        let lon = (row.lon_min, row.lon_max);
        let cluster = match name {
            Some(n) => Cluster::named(n, lat, lon),
            None => Cluster::new(lat, lon),
        }
        .map_err(|e| SpatialError::Parse(format!("line {line}: {e}")))?;

        match row.role.to_ascii_lowercase().as_str() {
            "home" => set.home.push(cluster),
            "job" | "work" => set.job.push(cluster),
            other => {
                return Err(SpatialError::Parse(format!(
                    "line {line}: invalid role {other:?}: expected \"home\" or \"job\""
                )));
            }
        }
    }

    Ok(set)
}
