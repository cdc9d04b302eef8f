//! The piecewise motion model.

use rand_distr::{Distribution, Normal};

use ct_core::{GeoPoint, UserRng};
use ct_schedule::Phase;

use crate::{Anchors, MobilityError, MobilityResult};

/// Standard deviation of rest jitter, degrees (~55 m of latitude).
pub const DEFAULT_JITTER_DEG: f64 = 0.0005;

/// Maps a phase and a pair of anchors to a position.
///
/// Pure apart from the jitter draws taken from the caller's RNG: two
/// normal samples (latitude, then longitude) per resting timestamp, none
/// per commuting timestamp.
#[derive(Copy, Clone, Debug)]
pub struct MotionModel {
    sigma:  f64,
    jitter: Normal<f64>,
}

impl MotionModel {
    /// `sigma_deg` must be finite and non-negative.  Zero disables jitter
    /// while keeping the RNG draw pattern unchanged.
    pub fn new(sigma_deg: f64) -> MobilityResult<Self> {
        if !sigma_deg.is_finite() || sigma_deg < 0.0 {
            return Err(MobilityError::InvalidJitter(sigma_deg));
        }
        let jitter =
            Normal::new(0.0, sigma_deg).map_err(|_| MobilityError::InvalidJitter(sigma_deg))?;
        Ok(Self { sigma: sigma_deg, jitter })
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Position of a user with `anchors` during `phase`.
    pub fn position(&self, phase: Phase, anchors: &Anchors, rng: &mut UserRng) -> GeoPoint {
        match phase {
            Phase::BeforeMorning | Phase::AfterEvening => self.jittered(anchors.home, rng),
            Phase::MorningCommute(frac) => anchors.home.lerp(anchors.job, frac),
            Phase::MidDay => self.jittered(anchors.job, rng),
            Phase::EveningCommute(frac) => anchors.job.lerp(anchors.home, frac),
        }
    }

    fn jittered(&self, anchor: GeoPoint, rng: &mut UserRng) -> GeoPoint {
        let d_lat = self.jitter.sample(rng.inner());
        let d_lon = self.jitter.sample(rng.inner());
        anchor.offset(d_lat, d_lon)
    }
}
