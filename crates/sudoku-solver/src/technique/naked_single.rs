use sudoku_core::{Position, Puzzle};

use super::Technique;

const NAME: &str = "single candidate";

/// For every empty cell with exactly one remaining candidate, assigns that
/// value.
///
/// Scans row-major and assigns as it goes, so a cascaded elimination can
/// turn a later cell in the same sweep into a naked single too; it does
/// not restart the scan from the beginning, and a cell already visited
/// this sweep is not revisited even if a later assignment would have
/// reduced it further. The solve loop's repeated invocation is what
/// picks those up.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates the technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, puzzle: &mut Puzzle) -> bool {
        if puzzle.check_if_solved() {
            return false;
        }

        let size = puzzle.size();
        let mut changed = false;
        for x in 0..size {
            for y in 0..size {
                let pos = Position::new(x, y);
                if puzzle.value_at(pos) != 0 {
                    continue;
                }
                let candidates = puzzle.candidates(pos);
                if candidates.len() == 1 {
                    let value = candidates.first().expect("len() == 1 implies a value");
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
    fn test_assigns_single_candidate() {
        let mut puzzle = Puzzle::from_values(
            vec![
                1, 2, 3, 4, //
                3, 4, 1, 2, //
                2, 1, 4, 3, //
                4, 3, 2, 0,
            ],
            4,
        )
        .unwrap();

        let changed = NakedSingle::new().apply(&mut puzzle);
        assert!(changed);
        assert_eq!(puzzle.value_at(Position::new(3, 3)), 1);
        assert!(puzzle.validate_solution());
    }

    #[test]
    fn test_no_op_when_no_naked_single() {
        let mut puzzle = Puzzle::from_values(vec![0; 81], 9).unwrap();
        assert!(!NakedSingle::new().apply(&mut puzzle));
    }

    #[test]
    fn test_idempotent_on_solved_puzzle() {
        let mut puzzle = Puzzle::from_values(
            vec![
                1, 2, 3, 4, //
                3, 4, 1, 2, //
                2, 1, 4, 3, //
                4, 3, 2, 1,
            ],
            4,
        )
        .unwrap();
        puzzle.check_if_solved();
        assert!(!NakedSingle::new().apply(&mut puzzle));
    }
}
