//! Deterministic simulation RNG wrapper.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, seeded once from `SimConfig::seed`.
//! Every stochastic decision in a tick (action draws, partner picks,
//! transmission and death rolls) pulls from this stream in registry
//! iteration order, so two runs with the same seed and the same initial
//! population produce identical event logs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts; the tick loop is phase-synchronous
/// and never shares the stream across threads.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
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

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// Choose `amount` distinct elements from a slice (fewer if the slice is
    /// shorter).  Order of the result follows the draw.
    pub fn choose_multiple<T: Copy>(&mut self, slice: &[T], amount: usize) -> Vec<T> {
        use rand::seq::SliceRandom;
        slice.choose_multiple(&mut self.0, amount).copied().collect()
    }
}
