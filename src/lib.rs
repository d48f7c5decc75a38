//! Eight queens solver driven by a generational genetic algorithm.
//!
//! The engine evolves a population of queen placements through tournament
//! selection, single-point crossover, point mutation and elitism, and
//! records a [`Trace`](ga::Trace) of best and average fitness per
//! generation for charting.
//!
//! - [`ga`]: chromosome, configuration, selection and the evolution loop
//! - [`random`]: seeded RNG construction and bounded integer draws
//! - `wasm` (feature `wasm`): browser entry point returning the trace as
//!   plain JS objects
//!
//! Logging goes through [`tracing`]; install a subscriber to see per
//! generation progress.

mod error;
pub mod ga;
pub mod random;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
