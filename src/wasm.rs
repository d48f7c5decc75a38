//! WebAssembly bindings.
//!
//! Lets a browser front end run the solver and chart the result.

use crate::ga::{Evolution, QueensConfig};
use wasm_bindgen::prelude::*;

/// Runs the GA and returns the trace as an array of
/// `{ generation, averageFitness, bestFitness, genes }` objects.
///
/// `config` is a plain object with any of the camelCase [`QueensConfig`]
/// fields (`populationSize`, `maxGeneration`, `acceptableFitness`,
/// `crossRate`, `mutationRate`, `elitismRate`, `tournamentRate`, `seed`);
/// missing fields take their defaults.
#[wasm_bindgen(js_name = runGeneticAlgorithm)]
pub fn run_genetic_algorithm(config: JsValue) -> Result<JsValue, JsValue> {
    let config: QueensConfig = if config.is_undefined() || config.is_null() {
        QueensConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?
    };

    let trace = Evolution::new(config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?
        .run();

    serde_wasm_bindgen::to_value(trace.records())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}
