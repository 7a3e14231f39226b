//! Uniform random draws used by the placement engine and the letter fill.
//!
//! Every helper takes the random source as an argument, so callers can pass
//! [`rand::thread_rng`] or a seeded generator for reproducible puzzles.

use crate::engine::Orientation;
use rand::Rng;

/// Returns a random integer in `[0, max)`.
///
/// # Panics
///
/// Panics if `max` is zero.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, max: usize) -> usize {
    rng.gen_range(0..max)
}

/// Returns a random integer in `[min, max]`.
///
/// # Panics
///
/// Panics if `min > max`.
pub fn random_int_inclusive<R: Rng + ?Sized>(rng: &mut R, min: usize, max: usize) -> usize {
    rng.gen_range(min..=max)
}

/// Returns `true` or `false` with equal probability.
pub fn random_bool<R: Rng + ?Sized>(rng: &mut R) -> bool {
    random_int(rng, 2) != 0
}

/// Returns one of the three orientations with equal probability.
pub fn random_orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    Orientation::ALL[random_int_inclusive(rng, 0, Orientation::ALL.len() - 1)]
}
