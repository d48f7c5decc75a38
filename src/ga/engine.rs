//! Generational loop.
//!
//! [`Evolution`] owns the population and drives it through
//! selection → crossover → mutation → elitism → replacement, recording one
//! [`GenerationRecord`] per generation until a stop condition fires.

use super::chromosome::Chromosome;
use super::config::QueensConfig;
use super::selection::tournament;
use super::trace::{GenerationRecord, StopReason, Trace};
use crate::error::Result;
use crate::random::create_rng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument};

/// Evolution engine for one run.
///
/// Created in the configured state by [`Evolution::new`]; [`Evolution::run`]
/// consumes it and hands back the [`Trace`], so a finished engine cannot be
/// run a second time.
///
/// # Usage
///
/// ```
/// use queens_ga::ga::{Evolution, QueensConfig};
///
/// let config = QueensConfig::default()
///     .with_population_size(100)
///     .with_max_generations(20)
///     .with_seed(42);
/// let trace = Evolution::new(config).unwrap().run();
/// assert!(!trace.is_empty() && trace.len() <= 20);
/// ```
#[derive(Debug, Clone)]
pub struct Evolution {
    config: QueensConfig,
    population: Vec<Chromosome>,
    rng: StdRng,
}

impl Evolution {
    /// Validates `config` and seeds a random initial population.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) if
    /// [`QueensConfig::validate`] rejects the configuration.
    pub fn new(config: QueensConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let population = (0..config.population_size)
            .map(|_| Chromosome::random(&mut rng))
            .collect();

        Ok(Self {
            config,
            population,
            rng,
        })
    }

    pub fn config(&self) -> &QueensConfig {
        &self.config
    }

    /// The current generation.
    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Fittest chromosome of the current generation.
    pub fn best(&self) -> &Chromosome {
        best_of(&self.population).expect("population must not be empty")
    }

    /// Mean fitness of the current generation.
    pub fn average_fitness(&self) -> f64 {
        average_fitness(&self.population)
    }

    /// Picks a parent from the current generation by tournament.
    pub fn tournament_select(&mut self) -> &Chromosome {
        let idx = tournament(
            &self.population,
            self.config.tournament_size(),
            &mut self.rng,
        );
        &self.population[idx]
    }

    /// Replaces the population with the next generation.
    ///
    /// The top `elitism_count` chromosomes of the current generation are
    /// copied unchanged into the first slots. The rest are children of two
    /// tournament-selected parents, crossed over and then mutated.
    #[instrument(level = "trace", skip(self))]
    pub fn evolve(&mut self) {
        let n = self.config.population_size;
        let elite_count = self.config.elitism_count();
        let tournament_size = self.config.tournament_size();

        let mut ranked: Vec<&Chromosome> = self.population.iter().collect();
        ranked.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));

        let mut next_gen: Vec<Chromosome> = Vec::with_capacity(n);
        next_gen.extend(ranked.into_iter().take(elite_count).cloned());

        while next_gen.len() < n {
            let p1 = tournament(&self.population, tournament_size, &mut self.rng);
            let p2 = tournament(&self.population, tournament_size, &mut self.rng);

            let child = self.population[p1]
                .crossover(&self.population[p2], self.config.crossover_rate, &mut self.rng)
                .mutate(self.config.mutation_rate, &mut self.rng);

            next_gen.push(child);
        }

        self.population = next_gen;
    }

    /// Runs the generational loop to completion.
    pub fn run(self) -> Trace {
        self.run_with(|_| {})
    }

    /// Runs the generational loop, calling `on_generation` with every record
    /// as soon as it is appended.
    ///
    /// For each generation the best and average fitness are recorded first.
    /// The run then stops if the best fitness reached the acceptable fitness
    /// or 1.0, or if this was the last generation allowed; otherwise the
    /// population evolves and the loop continues.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            population_size = self.config.population_size,
            max_generations = self.config.max_generations,
            acceptable_fitness = self.config.acceptable_fitness,
        )
    )]
    pub fn run_with<F>(mut self, mut on_generation: F) -> Trace
    where
        F: FnMut(&GenerationRecord),
    {
        let max_generations = self.config.max_generations;
        let acceptable_fitness = self.config.acceptable_fitness;
        let mut records = Vec::new();
        let mut generation = 0;

        info!(config = ?self.config, "starting evolution");

        let stop_reason = loop {
            let best = self.best();
            let record = GenerationRecord {
                generation,
                average_fitness: self.average_fitness(),
                best_fitness: best.fitness(),
                genes: *best.genes(),
            };

            debug!(
                generation,
                best_fitness = record.best_fitness,
                average_fitness = record.average_fitness,
                "generation complete"
            );
            on_generation(&record);

            let best_fitness = record.best_fitness;
            records.push(record);

            if best_fitness >= acceptable_fitness {
                info!(generation, best_fitness, "acceptable fitness reached");
                break if best_fitness == 1.0 {
                    StopReason::Solved
                } else {
                    StopReason::AcceptableFitness
                };
            }
            if best_fitness == 1.0 {
                info!(generation, "solution found with 100% fitness");
                break StopReason::Solved;
            }
            if generation + 1 >= max_generations {
                info!(generation, best_fitness, "maximum generation reached");
                break StopReason::MaxGenerations;
            }

            self.evolve();
            generation += 1;
        };

        Trace::new(records, stop_reason)
    }
}

/// Returns the fittest chromosome, `None` for an empty population.
///
/// The first one wins ties.
pub fn best_of(population: &[Chromosome]) -> Option<&Chromosome> {
    let (first, rest) = population.split_first()?;
    Some(rest.iter().fold(first, |best, c| {
        if c.fitness() > best.fitness() {
            c
        } else {
            best
        }
    }))
}

/// Arithmetic mean of all fitness values, 0.0 for an empty population.
pub fn average_fitness(population: &[Chromosome]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    population.iter().map(Chromosome::fitness).sum::<f64>() / population.len() as f64
}

// ============================================================================
// Tests
// ============================================================================
