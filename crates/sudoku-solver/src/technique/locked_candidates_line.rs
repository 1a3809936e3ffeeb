use sudoku_core::{Position, Puzzle};

use super::Technique;

const NAME: &str = "locked candidates (pointing)";

/// For each box, for each value confined to 2..=`box_size` cells of that
/// box, eliminates the value from the rest of the row or column those
/// cells share (if any).
///
/// Distinct from [`super::LockedCandidatesBox`] (the symmetric claiming
/// pattern): the two share no code beyond the common `Puzzle` queries, so
/// the solver can tier and time them independently.
#[derive(Debug, Default, Clone, Copy)]
pub struct LockedCandidatesLine;

impl LockedCandidatesLine {
    /// Creates the technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for LockedCandidatesLine {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, puzzle: &mut Puzzle) -> bool {
        if puzzle.check_if_solved() {
            return false;
        }

        let box_size = puzzle.geometry().box_size() as usize;
        let boxes: Vec<Vec<Position>> = puzzle.geometry().all_box_indices().to_vec();

        let mut changed = false;
        for box_group in &boxes {
            for value in 1..=puzzle.size() {
                let cells = puzzle.cells_with_candidate(value, box_group);
                if cells.len() < 2 || cells.len() > box_size {
                    continue;
                }

                if cells.iter().all(|p| p.x == cells[0].x) {
                    let row = puzzle.geometry().row_indices(cells[0].x).to_vec();
                    let outside: Vec<Position> = row
                        .into_iter()
                        .filter(|p| !box_group.contains(p))
                        .collect();
                    if puzzle.eliminate(value, &outside) {
                        changed = true;
                    }
                }

                if cells.iter().all(|p| p.y == cells[0].y) {
                    let column = puzzle.geometry().column_indices(cells[0].y).to_vec();
                    let outside: Vec<Position> = column
                        .into_iter()
                        .filter(|p| !box_group.contains(p))
                        .collect();
                    if puzzle.eliminate(value, &outside) {
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
    fn test_eliminates_pointing_pair_from_row() {
        let mut puzzle = Puzzle::from_values(vec![0; 81], 9).unwrap();
        let box_cells: Vec<Position> = puzzle.geometry().box_indices(Position::new(0, 0)).to_vec();
        // Confine value 5 within box 0 to the two cells on row 0.
        for &pos in &box_cells {
            if pos.x != 0 {
                puzzle.eliminate(5, &[pos]);
            }
        }

        let changed = LockedCandidatesLine::new().apply(&mut puzzle);
        assert!(changed);

        let rest_of_row: Vec<Position> = puzzle
            .geometry()
            .row_indices(0)
            .iter()
            .copied()
            .filter(|p| !box_cells.contains(p))
            .collect();
        for pos in rest_of_row {
            assert!(!puzzle.candidates(pos).contains(5));
        }
    }

    #[test]
    fn test_no_op_on_fresh_puzzle() {
        let mut puzzle = Puzzle::from_values(vec![0; 81], 9).unwrap();
        assert!(!LockedCandidatesLine::new().apply(&mut puzzle));
    }
}
