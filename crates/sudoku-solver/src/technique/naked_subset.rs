use sudoku_core::{CandidateSet, Position, Puzzle};

use super::Technique;

const NAME: &str = "naked subset";

/// For each group, finds candidate sets shared by exactly as many cells as
/// their own cardinality (naked pairs/triples/quads) and eliminates those
/// values from every other cell in the group.
///
/// This only detects the case where every participating cell's candidate
/// set is *exactly* the subset `C` (a cell with `{1, 2, 3}` does not
/// participate in a naked pair on `{1, 2}` even though it could). Upgrading
/// to the fuller subset-closure definition is a known limitation, kept
/// deliberately: the conservative, exact-match reading is what every
/// surviving iteration of the source implements.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSubset;

impl NakedSubset {
    /// Creates the technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for NakedSubset {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, puzzle: &mut Puzzle) -> bool {
        if puzzle.check_if_solved() {
            return false;
        }

        let groups: Vec<Vec<Position>> = puzzle
            .geometry()
            .all_group_indices()
            .into_iter()
            .map(<[Position]>::to_vec)
            .collect();

        let mut changed = false;
        for group in &groups {
            let empty_cells: Vec<Position> = group
                .iter()
                .copied()
                .filter(|&pos| puzzle.value_at(pos) == 0)
                .collect();
            let total_empty = empty_cells.len();

            let mut seen: Vec<CandidateSet> = Vec::new();
            for &pos in &empty_cells {
                let set = puzzle.candidates(pos);
                if seen.contains(&set) {
                    continue;
                }
                seen.push(set);

                let n = set.len() as usize;
                if n < 2 || n >= total_empty {
                    continue;
                }

                let matching = puzzle.cells_with_exact_candidates(set, group);
                if matching.len() != n {
                    continue;
                }

                let others: Vec<Position> = group
                    .iter()
                    .copied()
                    .filter(|pos| !matching.contains(pos))
                    .collect();
                for value in set.iter() {
                    if puzzle.eliminate(value, &others) {
                        changed = true;
                    }
                }
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use sudoku_core::Puzzle;

    use super::*;

    #[test]
    fn test_eliminates_naked_pair() {
        let mut puzzle = Puzzle::from_values(vec![0; 81], 9).unwrap();
        let row: Vec<Position> = puzzle.geometry().row_indices(0).to_vec();
        let pair = [row[0], row[1]];
        for &pos in &pair {
            for value in 3..=9 {
                puzzle.eliminate(value, &[pos]);
            }
        }
        assert_eq!(puzzle.candidates(pair[0]).len(), 2);
        assert_eq!(puzzle.candidates(pair[1]).len(), 2);

        let changed = NakedSubset::new().apply(&mut puzzle);
        assert!(changed);
        for &other in &row[2..] {
            assert!(!puzzle.candidates(other).contains(1));
            assert!(!puzzle.candidates(other).contains(2));
        }
    }

    #[test]
    fn test_no_op_without_subset() {
        let mut puzzle = Puzzle::from_values(vec![0; 16], 4).unwrap();
        assert!(!NakedSubset::new().apply(&mut puzzle));
    }
}
