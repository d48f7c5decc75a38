//! Candidate solutions.
//!
//! A [`Chromosome`] holds one queen row per column and the fitness derived
//! from it. Both fields are private and only ever set together, so the
//! fitness always describes the current genes.

use super::board::{count_conflicts, fitness_of, Genes, BOARD_SIZE};
use crate::error::{Error, Result};
use crate::random::chance;
use rand::Rng;
use std::fmt;

/// One candidate placement of eight queens.
///
/// Rows may repeat across columns; the encoding is not restricted to
/// permutations, and row clashes are simply scored as conflicts.
///
/// Chromosomes are values: crossover and mutation return new chromosomes
/// instead of modifying shared ones.
///
/// # Examples
///
/// ```
/// use queens_ga::ga::Chromosome;
///
/// let solution = Chromosome::from_genes([0, 4, 7, 5, 2, 6, 1, 3]).unwrap();
/// assert_eq!(solution.fitness(), 1.0);
/// assert!(solution.is_solution());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    genes: Genes,
    fitness: f64,
}

impl Chromosome {
    /// Creates a chromosome with every row drawn uniformly from the board.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut genes = [0u8; BOARD_SIZE];
        for gene in genes.iter_mut() {
            *gene = random_row(rng);
        }
        Self::with_genes(genes)
    }

    /// Creates a chromosome from explicit rows.
    ///
    /// # Errors
    /// Returns [`Error::InvalidGene`] if any row is off the board.
    pub fn from_genes(genes: Genes) -> Result<Self> {
        if let Some((column, &row)) = genes
            .iter()
            .enumerate()
            .find(|(_, &row)| row as usize >= BOARD_SIZE)
        {
            return Err(Error::InvalidGene { column, row });
        }
        Ok(Self::with_genes(genes))
    }

    fn with_genes(genes: Genes) -> Self {
        Self {
            fitness: fitness_of(&genes),
            genes,
        }
    }

    /// Row of the queen in each column.
    pub fn genes(&self) -> &Genes {
        &self.genes
    }

    /// Fitness in `[0, 1]`; 1.0 means no two queens attack each other.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Number of attacking queen pairs.
    pub fn conflicts(&self) -> usize {
        count_conflicts(&self.genes)
    }

    /// Whether this placement solves the puzzle.
    pub fn is_solution(&self) -> bool {
        self.conflicts() == 0
    }

    /// Produces one child from `self` and `other`.
    ///
    /// With probability `rate` a cut column is drawn uniformly and the child
    /// takes `self`'s rows before the cut and `other`'s rows from the cut on
    /// (see [`crossover_at`](Self::crossover_at)). Otherwise the child is a
    /// copy of `self`. Neither parent is modified.
    pub fn crossover<R: Rng>(&self, other: &Self, rate: f64, rng: &mut R) -> Self {
        if !chance(rng, rate) {
            return Self::with_genes(self.genes);
        }
        let cut = rng.random_range(0..BOARD_SIZE);
        self.crossover_at(other, cut)
    }

    /// Single-point crossover at a fixed column.
    ///
    /// Columns `< cut` come from `self`, columns `>= cut` from `other`.
    /// A cut of 0 copies `other`; a cut at or past the board width copies `self`.
    pub fn crossover_at(&self, other: &Self, cut: usize) -> Self {
        let cut = cut.min(BOARD_SIZE);
        let mut genes = self.genes;
        genes[cut..].copy_from_slice(&other.genes[cut..]);
        Self::with_genes(genes)
    }

    /// Returns a possibly mutated copy of this chromosome.
    ///
    /// With probability `rate` one column is picked uniformly and its row is
    /// replaced by a uniformly drawn row, which may equal the old one.
    pub fn mutate<R: Rng>(self, rate: f64, rng: &mut R) -> Self {
        if !chance(rng, rate) {
            return self;
        }
        let mut genes = self.genes;
        let column = rng.random_range(0..BOARD_SIZE);
        genes[column] = random_row(rng);
        Self::with_genes(genes)
    }
}

fn random_row<R: Rng>(rng: &mut R) -> u8 {
    rng.random_range(0..BOARD_SIZE as u8)
}

/// Renders the board, one rank per line, `Q` for a queen.
impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for (column, &gene) in self.genes.iter().enumerate() {
                if column > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if gene as usize == row { "Q" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
