//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `ct-spatial`.
///
/// Oracle failures never show up here: the sampler treats them as
/// "not reachable".
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("cluster {name:?}: {reason}")]
    InvalidCluster { name: String, reason: String },

    #[error("cluster file parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
