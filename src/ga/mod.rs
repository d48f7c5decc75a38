//! Genetic algorithm for the eight queens puzzle.
//!
//! A candidate solution places one queen per column; its genome is the row of
//! each queen. Fitness is the share of column pairs that do not attack each
//! other, so 1.0 is a solved board.
//!
//! # Key Types
//!
//! - [`Chromosome`]: One candidate placement with its fitness
//! - [`QueensConfig`]: Run parameters (population, rates, budget, seed)
//! - [`Evolution`]: Executes the generational loop
//! - [`Trace`]: Per-generation best/average fitness and best genome
//!
//! # Example
//!
//! ```
//! use queens_ga::ga::{Evolution, QueensConfig};
//!
//! let config = QueensConfig::default()
//!     .with_population_size(300)
//!     .with_crossover_rate(0.7)
//!     .with_mutation_rate(0.9)
//!     .with_tournament_rate(0.01)
//!     .with_seed(7);
//! let trace = Evolution::new(config)?.run();
//!
//! let last = trace.last().unwrap();
//! println!("generation {}: best {:.3}", last.generation, last.best_fitness);
//! # Ok::<(), queens_ga::Error>(())
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

pub mod board;
mod chromosome;
mod config;
mod engine;
pub mod selection;
mod trace;

pub use chromosome::Chromosome;
pub use config::QueensConfig;
pub use engine::{average_fitness, best_of, Evolution};
pub use trace::{GenerationRecord, StopReason, Trace};
