//! Deterministic per-user RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each user gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (user_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive user IDs uniformly across the seed space.
//! This means:
//!
//! - Users never share RNG state, so a run produces the same records whether
//!   users are simulated sequentially or on a worker pool.
//! - Adding users at the end of the population does not disturb the streams
//!   of existing users.
//! - There is no process-wide generator to lock.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::UserId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-user deterministic RNG.
///
/// Created once at the start of a user's simulation and dropped when the
/// user's records are complete.  Deliberately not `Clone`, so two code paths
/// can never replay the same stream by accident.
pub struct UserRng(SmallRng);

impl UserRng {
    /// Seed deterministically from the run's global seed and a user ID.
    pub fn new(global_seed: u64, user: UserId) -> Self {
        let seed = global_seed ^ (user.0 as u64).wrapping_mul(MIXING_CONSTANT);
        UserRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` / `rand_distr`
    /// distribution types (`rng.inner().sample(...)`).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
