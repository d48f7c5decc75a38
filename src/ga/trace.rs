//! Per-generation run history.

use super::board::Genes;

/// Summary of one generation, recorded before the population evolves.
///
/// With the `serde` feature this serializes as
/// `{ generation, averageFitness, bestFitness, genes }`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GenerationRecord {
    /// Zero-based generation index.
    pub generation: usize,
    /// Mean fitness over the whole population.
    pub average_fitness: f64,
    /// Fitness of the best chromosome.
    pub best_fitness: f64,
    /// Genes of the best chromosome.
    pub genes: Genes,
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The best fitness reached the configured target.
    AcceptableFitness,
    /// A placement with no conflicts was found.
    ///
    /// Also reported when a conflict-free board is what met the acceptable
    /// fitness, since that check runs first.
    Solved,
    /// The generation budget ran out.
    MaxGenerations,
}

/// Ordered history of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    records: Vec<GenerationRecord>,
    stop_reason: StopReason,
}

impl Trace {
    pub(crate) fn new(records: Vec<GenerationRecord>, stop_reason: StopReason) -> Self {
        Self {
            records,
            stop_reason,
        }
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[GenerationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record of the generation the run stopped at.
    pub fn last(&self) -> Option<&GenerationRecord> {
        self.records.last()
    }

    /// The record with the highest best fitness; the earliest one on ties.
    pub fn best_overall(&self) -> Option<&GenerationRecord> {
        self.records.iter().fold(None, |best, r| match best {
            Some(b) if b.best_fitness >= r.best_fitness => Some(b),
            _ => Some(r),
        })
    }

    pub fn stop_reason(&self) -> StopReason {
        self.stop_reason
    }

    /// Whether the last recorded generation holds a conflict-free placement.
    pub fn is_solved(&self) -> bool {
        self.last().is_some_and(|r| r.best_fitness == 1.0)
    }

    pub fn into_records(self) -> Vec<GenerationRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(generation: usize, best_fitness: f64) -> GenerationRecord {
        GenerationRecord {
            generation,
            average_fitness: best_fitness / 2.0,
            best_fitness,
            genes: [generation as u8; 8],
        }
    }

    #[test]
    fn test_best_overall_picks_max() {
        let trace = Trace::new(
            vec![record(0, 0.5), record(1, 0.9), record(2, 0.75)],
            StopReason::MaxGenerations,
        );
        assert_eq!(trace.best_overall().unwrap().generation, 1);
    }

    #[test]
    fn test_best_overall_prefers_earliest_tie() {
        let trace = Trace::new(
            vec![record(0, 0.5), record(1, 0.9), record(2, 0.9)],
            StopReason::MaxGenerations,
        );
        assert_eq!(trace.best_overall().unwrap().generation, 1);
    }

    #[test]
    fn test_empty_trace() {
        let trace = Trace::new(vec![], StopReason::MaxGenerations);
        assert!(trace.is_empty());
        assert!(trace.last().is_none());
        assert!(trace.best_overall().is_none());
        assert!(!trace.is_solved());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_record_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(record(3, 0.75)).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["averageFitness", "bestFitness", "generation", "genes"]);

        assert_eq!(json["generation"], 3);
        assert_eq!(json["bestFitness"], 0.75);
        assert_eq!(json["averageFitness"], 0.375);
        assert_eq!(json["genes"], serde_json::json!([3, 3, 3, 3, 3, 3, 3, 3]));
    }

    #[test]
    fn test_is_solved_looks_at_last_record() {
        let trace = Trace::new(vec![record(0, 0.8), record(1, 1.0)], StopReason::Solved);
        assert!(trace.is_solved());
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.stop_reason(), StopReason::Solved);
        assert_eq!(trace.into_records().len(), 2);
    }
}
