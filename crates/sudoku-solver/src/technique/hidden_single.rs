use sudoku_core::{Position, Puzzle};

use super::Technique;

const NAME: &str = "hidden single";

/// For each group, finds every value whose candidate count in that group
/// is exactly one, and assigns it to the unique cell that can still hold
/// it.
///
/// A value may be assigned in more than one group within a single sweep;
/// since assignment eagerly propagates eliminations to peers, later groups
/// always see up-to-date candidate counts.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// Creates the technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for HiddenSingle {
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
            let counter = puzzle.candidates_counter(group);
            for value in 1..=puzzle.size() {
                if counter.get(&value).copied().unwrap_or(0) != 1 {
                    continue;
                }
                let cells = puzzle.cells_with_candidate(value, group);
                let Some(&pos) = cells.first() else {
                    continue;
                };
                if puzzle.value_at(pos) == 0 {
                    puzzle.assign(value, pos);
                    changed = true;
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
    fn test_assigns_hidden_single() {
        // 7 is possible in only one cell of row 0 (the rest of the row
        // has it eliminated directly), even though that cell still has
        // every other raw candidate, so single candidate alone would not
        // have fired.
        let mut puzzle = Puzzle::from_values(vec![0; 81], 9).unwrap();
        let rest_of_row: Vec<Position> = (1..9).map(|y| Position::new(0, y)).collect();
        puzzle.eliminate(7, &rest_of_row);
        assert_eq!(puzzle.candidates(Position::new(0, 0)).len(), 9);

        let changed = HiddenSingle::new().apply(&mut puzzle);
        assert!(changed);
        assert_eq!(puzzle.value_at(Position::new(0, 0)), 7);
    }

    #[test]
    fn test_no_op_on_fresh_puzzle() {
        let mut puzzle = Puzzle::from_values(vec![0; 81], 9).unwrap();
        assert!(!HiddenSingle::new().apply(&mut puzzle));
    }
}
