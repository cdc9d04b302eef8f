//! Rectangular sampling domains for anchor points.
//!
//! A [`Cluster`] is a closed latitude × longitude box.  Bounds are checked
//! once at construction, so every `Cluster` in a run satisfies
//! `min <= max` on both axes and can be sampled without further checks.

use ct_core::{GeoPoint, UserRng};

use crate::{SpatialError, SpatialResult};

// ── Cluster ──────────────────────────────────────────────────────────────────

/// A named or anonymous geographic bounding box.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cluster {
    name:    Option<String>,
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
}

impl Cluster {
    /// Build an anonymous cluster, validating its bounds.
    pub fn new(lat: (f64, f64), lon: (f64, f64)) -> SpatialResult<Cluster> {
        Self::build(None, lat, lon)
    }

    /// Build a named cluster, validating its bounds.
    pub fn named(name: impl Into<String>, lat: (f64, f64), lon: (f64, f64)) -> SpatialResult<Cluster> {
        Self::build(Some(name.into()), lat, lon)
    }

    fn build(name: Option<String>, lat: (f64, f64), lon: (f64, f64)) -> SpatialResult<Cluster> {
        let cluster = Cluster {
            name,
            lat_min: lat.0,
            lat_max: lat.1,
            lon_min: lon.0,
            lon_max: lon.1,
        };
        cluster.validate()?;
        Ok(cluster)
    }

    fn validate(&self) -> SpatialResult<()> {
        let invalid = |reason: String| SpatialError::InvalidCluster {
            name: self.label().to_owned(),
            reason,
        };

        let corners = [
            GeoPoint::new(self.lat_min, self.lon_min),
            GeoPoint::new(self.lat_max, self.lon_max),
        ];
        if corners.iter().any(|p| !p.is_valid()) {
            return Err(invalid(format!(
                "bounds lat [{}, {}] lon [{}, {}] are not finite WGS-84 coordinates",
                self.lat_min, self.lat_max, self.lon_min, self.lon_max
            )));
        }
        if self.lat_min > self.lat_max {
            return Err(invalid(format!(
                "latitude min {} is greater than max {}",
                self.lat_min, self.lat_max
            )));
        }
        if self.lon_min > self.lon_max {
            return Err(invalid(format!(
                "longitude min {} is greater than max {}",
                self.lon_min, self.lon_max
            )));
        }
        Ok(())
    }

    /// The cluster name, or `"anonymous"`.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("anonymous")
    }

    pub fn lat_range(&self) -> (f64, f64) {
        (self.lat_min, self.lat_max)
    }

    pub fn lon_range(&self) -> (f64, f64) {
        (self.lon_min, self.lon_max)
    }

    /// Draw a point uniformly from the closed box (latitude first).
    pub fn sample_uniform(&self, rng: &mut UserRng) -> GeoPoint {
        let lat = rng.gen_range(self.lat_min..=self.lat_max);
        let lon = rng.gen_range(self.lon_min..=self.lon_max);
        GeoPoint::new(lat, lon)
    }

    /// `true` if `point` lies inside the closed box.
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.lat_min..=self.lat_max).contains(&point.lat)
            && (self.lon_min..=self.lon_max).contains(&point.lon)
    }
}

// ── ClusterSet ───────────────────────────────────────────────────────────────

/// The home and job sampling domains for a run.
///
/// Read-only once the run starts.  Either list may be empty here; the
/// simulation builder rejects empty lists when users are to be generated.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClusterSet {
    pub home: Vec<Cluster>,
    pub job:  Vec<Cluster>,
}

impl ClusterSet {
    pub fn new(home: Vec<Cluster>, job: Vec<Cluster>) -> Self {
        Self { home, job }
    }

    /// Three residential clusters and one business district in Panama City.
    pub fn panama_city() -> Self {
        // The literal bounds below are valid by inspection.
        let cluster = |name: &str, lat: (f64, f64), lon: (f64, f64)| Cluster {
            name: Some(name.to_owned()),
            lat_min: lat.0,
            lat_max: lat.1,
            lon_min: lon.0,
            lon_max: lon.1,
        };
        Self {
            home: vec![
                cluster("home-south", (8.95, 8.98), (-79.55, -79.50)),
                cluster("home-central", (8.99, 9.02), (-79.55, -79.50)),
                cluster("home-west", (8.98, 9.03), (-79.60, -79.55)),
            ],
            job: vec![cluster("business-district", (9.05, 9.10), (-79.55, -79.45))],
        }
    }

    /// Pick a home cluster uniformly at random.
    pub fn pick_home(&self, rng: &mut UserRng) -> Option<&Cluster> {
        rng.choose(&self.home)
    }

    /// Pick a job cluster uniformly at random.
    pub fn pick_job(&self, rng: &mut UserRng) -> Option<&Cluster> {
        rng.choose(&self.job)
    }

    pub fn is_empty(&self) -> bool {
        self.home.is_empty() && self.job.is_empty()
    }
}
