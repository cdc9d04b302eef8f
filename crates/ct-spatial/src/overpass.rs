//! Overpass API reachability oracle (Cargo feature `overpass`).
//!
//! # Query
//!
//! For a candidate `(lat, lon)` the oracle asks for road ways and buildings
//! within a small radius:
//!
//! ```text
//! [out:json][timeout:10];
//! (way(around:50,LAT,LON)[highway];way(around:50,LAT,LON)[building];);
//! out ids;
//! ```
//!
//! The point is reachable iff the reply's `elements` array is non-empty.
//! Transport errors, timeouts, non-2xx statuses, and unparsable bodies all
//! answer `false` (logged at `warn`).

use std::time::Duration;

use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use ct_core::GeoPoint;

use crate::ReachabilityOracle;

/// Public Overpass interpreter endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

/// Search radius around the candidate point, metres.
pub const DEFAULT_RADIUS_M: u32 = 50;

/// Request timeout, applied both server-side and to the HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
enum QueryError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    #[error("could not read response body: {0}")]
    Body(#[from] std::io::Error),

    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct OverpassReply {
    #[serde(default)]
    elements: Vec<serde_json::Value>,
}

/// Blocking Overpass client used as a [`ReachabilityOracle`].
pub struct OverpassOracle {
    agent:    ureq::Agent,
    endpoint: String,
    radius_m: u32,
    timeout:  Duration,
}

impl OverpassOracle {
    /// Oracle against the public endpoint with default radius and timeout.
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_ENDPOINT.to_owned(), DEFAULT_RADIUS_M, DEFAULT_TIMEOUT)
    }

    pub fn with_settings(endpoint: String, radius_m: u32, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent, endpoint, radius_m, timeout }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The Overpass QL sent for `point`.
    pub fn query_for(&self, point: GeoPoint) -> String {
        let around = format!("around:{},{:.6},{:.6}", self.radius_m, point.lat, point.lon);
        format!(
            "[out:json][timeout:{}];(way({around})[highway];way({around})[building];);out ids;",
            self.timeout.as_secs().max(1)
        )
    }

    fn query(&self, point: GeoPoint) -> Result<bool, QueryError> {
        let body = self
            .agent
            .get(&self.endpoint)
            .query("data", &self.query_for(point))
            .call()
            .map_err(Box::new)?
            .into_string()?;
        let reply: OverpassReply = serde_json::from_str(&body)?;
        Ok(!reply.elements.is_empty())
    }
}

impl Default for OverpassOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl ReachabilityOracle for OverpassOracle {
    fn is_reachable(&self, point: GeoPoint) -> bool {
        match self.query(point) {
            Ok(found) => {
                debug!("overpass {}: reachable={}", point, found);
                found
            }
            Err(e) => {
                warn!("overpass {}: {}; treating as unreachable", point, e);
                false
            }
        }
    }
}
