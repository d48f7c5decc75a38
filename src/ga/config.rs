//! Run configuration.
//!
//! [`QueensConfig`] holds every parameter of one evolutionary run. It does
//! not change while the run is in progress.

use crate::error::{Error, Result};

/// Configuration for the eight queens GA.
///
/// # Defaults
///
/// ```
/// use queens_ga::ga::QueensConfig;
///
/// let config = QueensConfig::default();
/// assert_eq!(config.population_size, 1000);
/// assert_eq!(config.max_generations, 500);
/// assert_eq!(config.acceptable_fitness, 1.0);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use queens_ga::ga::QueensConfig;
///
/// let config = QueensConfig::default()
///     .with_population_size(200)
///     .with_tournament_rate(0.05)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// assert_eq!(config.tournament_size(), 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct QueensConfig {
    /// Number of chromosomes in every generation.
    pub population_size: usize,

    /// Upper bound on the number of generations recorded in the trace.
    #[cfg_attr(feature = "serde", serde(alias = "maxGeneration"))]
    pub max_generations: usize,

    /// Best fitness at which the run stops early.
    pub acceptable_fitness: f64,

    /// Probability that a child is produced by single-point crossover
    /// rather than copied from its first parent.
    #[cfg_attr(feature = "serde", serde(alias = "crossRate"))]
    pub crossover_rate: f64,

    /// Probability that a child gets one gene redrawn.
    pub mutation_rate: f64,

    /// Fraction of the population carried over unchanged.
    pub elitism_rate: f64,

    /// Tournament sample size as a fraction of the population.
    pub tournament_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for QueensConfig {
    fn default() -> Self {
        Self {
            population_size: 1000,
            max_generations: 500,
            acceptable_fitness: 1.0,
            crossover_rate: 0.08,
            mutation_rate: 0.1,
            elitism_rate: 0.01,
            tournament_rate: 0.1,
            seed: None,
        }
    }
}

impl QueensConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the fitness at which the run stops.
    pub fn with_acceptable_fitness(mut self, fitness: f64) -> Self {
        self.acceptable_fitness = fitness;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the elitism rate.
    pub fn with_elitism_rate(mut self, rate: f64) -> Self {
        self.elitism_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament rate.
    pub fn with_tournament_rate(mut self, rate: f64) -> Self {
        self.tournament_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of chromosomes sampled per tournament.
    ///
    /// `ceil(tournament_rate × population_size)`, never less than 1, so a
    /// zero rate degrades to uniform random selection instead of an empty
    /// tournament.
    pub fn tournament_size(&self) -> usize {
        ceil_fraction(self.tournament_rate, self.population_size).max(1)
    }

    /// Number of elites copied into each new generation.
    ///
    /// `ceil(elitism_rate × population_size)`, capped at the population size.
    /// A zero rate means no elites.
    pub fn elitism_count(&self) -> usize {
        ceil_fraction(self.elitism_rate, self.population_size).min(self.population_size)
    }

    /// Validates the configuration.
    ///
    /// Rates outside `[0, 1]` are accepted and act like the nearest bound.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] for an empty population, a zero
    /// generation budget, or a NaN rate or threshold.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(Error::invalid_config("population_size must be at least 1"));
        }
        if self.max_generations == 0 {
            return Err(Error::invalid_config("max_generations must be at least 1"));
        }
        let rates = [
            ("acceptable_fitness", self.acceptable_fitness),
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
            ("elitism_rate", self.elitism_rate),
            ("tournament_rate", self.tournament_rate),
        ];
        if let Some((name, _)) = rates.iter().find(|(_, value)| value.is_nan()) {
            return Err(Error::invalid_config(format!("{name} must be a number")));
        }
        Ok(())
    }
}

/// `ceil(rate × n)`, treating negative rates as zero.
fn ceil_fraction(rate: f64, n: usize) -> usize {
    let value = (rate * n as f64).ceil();
    if value > 0.0 {
        value as usize
    } else {
        0
    }
}
