//! Parent selection.
//!
//! Tournament selection samples a few chromosomes at random and keeps the
//! fittest, biasing reproduction toward good placements while still giving
//! weaker ones a chance.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::chromosome::Chromosome;
use rand::Rng;

/// Tournament selection: draw `k` chromosomes with replacement, return the
/// index of the fittest.
///
/// Ties go to the earliest draw; a later draw only wins if its fitness is
/// strictly higher. A `k` of 0 is treated as 1.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Chromosome], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}
