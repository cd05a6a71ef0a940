//! Deterministic simulation-level RNG.
//!
//! The scheduler itself is fully deterministic; randomness is only used to
//! draw the fixed visiting permutation of
//! [`TickOrder::Shuffled`][crate::TickOrder::Shuffled].  The same seed always
//! yields the same permutation.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::PhilosopherId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG.  Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed.wrapping_mul(MIXING_CONSTANT)))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }

    /// A uniformly random ordering of seats `0..seats`.
    pub fn permutation(&mut self, seats: u32) -> Vec<PhilosopherId> {
        let mut order: Vec<PhilosopherId> = (0..seats).map(PhilosopherId).collect();
        self.shuffle(&mut order);
        order
    }
}
