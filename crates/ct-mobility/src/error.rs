use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("jitter standard deviation must be finite and non-negative, got {0}")]
    InvalidJitter(f64),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
