use ct_mobility::MobilityError;
use ct_schedule::ScheduleError;
use ct_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("no {what} clusters configured for {users} user(s)")]
    EmptyClusters { what: &'static str, users: u32 },

    #[error("invalid schedule or commute windows: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("invalid cluster: {0}")]
    Spatial(#[from] SpatialError),

    #[error("invalid motion model: {0}")]
    Mobility(#[from] MobilityError),
}

pub type SimResult<T> = Result<T, SimError>;
