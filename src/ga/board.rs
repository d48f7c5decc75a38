//! Board geometry and conflict counting.
//!
//! A genome stores, for each column, the row of the queen in that column.
//! Two queens attack each other when they share a row or either diagonal.

/// Width and height of the board, and the genome length.
pub const BOARD_SIZE: usize = 8;

/// Number of column pairs on the board, `C(BOARD_SIZE, 2)`.
///
/// This is the largest possible conflict count.
pub const MAX_CONFLICTS: usize = max_conflicts(BOARD_SIZE);

/// One queen row per column.
pub type Genes = [u8; BOARD_SIZE];

/// Number of unordered column pairs for a board of width `n`.
pub const fn max_conflicts(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Counts attacking queen pairs.
///
/// A pair of columns `(i, j)` with `i < j` conflicts when the queens share a
/// row, the `/` diagonal (`row - col`) or the `\` diagonal (`row + col`).
/// Each pair is counted at most once.
///
/// Works on any genome length.
///
/// # Complexity
/// O(n²) pairwise scan
pub fn count_conflicts(genes: &[u8]) -> usize {
    let mut conflicts = 0;
    for (i, &a) in genes.iter().enumerate() {
        let (a, i) = (a as isize, i as isize);
        for (j, &b) in genes.iter().enumerate().skip(i as usize + 1) {
            let (b, j) = (b as isize, j as isize);
            if a == b || a - i == b - j || a + i == b + j {
                conflicts += 1;
            }
        }
    }
    conflicts
}

/// Normalized fitness for a genome: `(max - conflicts) / max`.
///
/// 1.0 means no queen attacks another.
pub fn fitness_of(genes: &[u8]) -> f64 {
    let max = max_conflicts(genes.len());
    if max == 0 {
        return 1.0;
    }
    (max - count_conflicts(genes)) as f64 / max as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Independent reference: checks every ordered pair and halves the count.
    fn reference_conflicts(genes: &[u8]) -> usize {
        let n = genes.len() as i32;
        let mut ordered = 0;
        for c1 in 0..n {
            for c2 in 0..n {
                if c1 == c2 {
                    continue;
                }
                let r1 = genes[c1 as usize] as i32;
                let r2 = genes[c2 as usize] as i32;
                if r1 == r2 || (r1 - r2).abs() == (c1 - c2).abs() {
                    ordered += 1;
                }
            }
        }
        ordered / 2
    }

    #[test]
    fn test_max_conflicts() {
        assert_eq!(MAX_CONFLICTS, 28);
        assert_eq!(max_conflicts(0), 0);
        assert_eq!(max_conflicts(1), 0);
        assert_eq!(max_conflicts(4), 6);
    }

    #[test]
    fn test_known_solution_has_no_conflicts() {
        let genes: Genes = [0, 4, 7, 5, 2, 6, 1, 3];
        assert_eq!(count_conflicts(&genes), 0);
        assert_eq!(fitness_of(&genes), 1.0);
    }

    #[test]
    fn test_same_row_everywhere() {
        let genes: Genes = [3; BOARD_SIZE];
        assert_eq!(count_conflicts(&genes), MAX_CONFLICTS);
        assert_eq!(fitness_of(&genes), 0.0);
    }

    #[test]
    fn test_main_diagonal() {
        // Every queen on the same "/" diagonal.
        let genes: Genes = [0, 1, 2, 3, 4, 5, 6, 7];
        assert_eq!(count_conflicts(&genes), MAX_CONFLICTS);
    }

    #[test]
    fn test_two_column_boards() {
        assert_eq!(count_conflicts(&[1, 0]), 1);
        assert_eq!(count_conflicts(&[0, 2]), 0);
        assert_eq!(count_conflicts(&[2, 2]), 1);
    }

    #[test]
    fn test_single_conflict_fitness() {
        // Known solution with the last queen moved onto column 6's row.
        let genes: Genes = [0, 4, 7, 5, 2, 6, 1, 1];
        let conflicts = count_conflicts(&genes);
        assert_eq!(conflicts, reference_conflicts(&genes));
        assert!((fitness_of(&genes) - (28 - conflicts) as f64 / 28.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_matches_reference(genes in prop::array::uniform8(0u8..8)) {
            prop_assert_eq!(count_conflicts(&genes), reference_conflicts(&genes));
        }

        #[test]
        fn prop_fitness_bounds(genes in prop::array::uniform8(0u8..8)) {
            let f = fitness_of(&genes);
            prop_assert!((0.0..=1.0).contains(&f));
            prop_assert_eq!(f == 1.0, count_conflicts(&genes) == 0);
        }

        #[test]
        fn prop_column_order_reversal_preserves_conflicts(genes in prop::array::uniform8(0u8..8)) {
            // Mirroring the board left-to-right swaps the diagonals but keeps
            // every attacking pair.
            let mut mirrored = genes;
            mirrored.reverse();
            prop_assert_eq!(count_conflicts(&genes), count_conflicts(&mirrored));
        }

        #[test]
        fn prop_any_length_matches_reference(genes in prop::collection::vec(0u8..12, 0..12)) {
            prop_assert_eq!(count_conflicts(&genes), reference_conflicts(&genes));
        }
    }
}
