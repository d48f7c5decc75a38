//! Random number helpers.
//!
//! Every random draw in the GA goes through an explicit, seedable
//! [`StdRng`] so a run can be replayed from its seed.

use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws a uniformly distributed integer from the inclusive range `[min, max]`.
///
/// This is the checked entry point for callers with runtime bounds. The GA
/// operators draw from the fixed board range with
/// [`Rng::random_range`](rand::Rng::random_range) and never call it.
///
/// # Errors
/// Returns [`Error::InvalidRange`] if `min > max`.
///
/// # Examples
///
/// ```
/// use queens_ga::random::{create_rng, random_int};
///
/// let mut rng = create_rng(7);
/// let v = random_int(&mut rng, 0, 7).unwrap();
/// assert!((0..=7).contains(&v));
/// assert!(random_int(&mut rng, 3, 2).is_err());
/// ```
pub fn random_int<R: Rng>(rng: &mut R, min: i64, max: i64) -> Result<i64> {
    if min > max {
        return Err(Error::InvalidRange { min, max });
    }
    Ok(rng.random_range(min..=max))
}

/// Returns `true` with probability `rate`.
///
/// Rates at or below 0 never fire, rates at or above 1 always fire.
pub(crate) fn chance<R: Rng>(rng: &mut R, rate: f64) -> bool {
    rng.random_range(0.0..1.0) < rate
}
