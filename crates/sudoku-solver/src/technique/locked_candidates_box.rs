use sudoku_core::{Position, Puzzle};

use super::Technique;

const NAME: &str = "locked candidates (claiming)";

/// For each row or column, for each value confined to 2..=`box_size` cells
/// of that line which all share one box, eliminates the value from the
/// rest of that box.
///
/// The symmetric counterpart to [`super::LockedCandidatesLine`] (pointing);
/// kept as its own `Technique` per §4.8 so it has its own name, tier, and
/// statistics.
#[derive(Debug, Default, Clone, Copy)]
pub struct LockedCandidatesBox;

impl LockedCandidatesBox {
    /// Creates the technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for LockedCandidatesBox {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, puzzle: &mut Puzzle) -> bool {
        if puzzle.check_if_solved() {
            return false;
        }

        let box_size = puzzle.geometry().box_size() as usize;
        let rows: Vec<Vec<Position>> = puzzle.geometry().all_row_indices().to_vec();
        let columns: Vec<Vec<Position>> = puzzle.geometry().all_column_indices().to_vec();

        let mut changed = false;
        for line in rows.iter().chain(columns.iter()) {
            for value in 1..=puzzle.size() {
                let cells = puzzle.cells_with_candidate(value, line);
                if cells.len() < 2 || cells.len() > box_size {
                    continue;
                }

                let base = puzzle.geometry().box_base_index(cells[0]);
                if !cells
                    .iter()
                    .all(|&p| puzzle.geometry().box_base_index(p) == base)
                {
                    continue;
                }

                let box_cells = puzzle.geometry().box_indices(cells[0]).to_vec();
                let outside: Vec<Position> = box_cells
                    .into_iter()
                    .filter(|p| !line.contains(p))
                    .collect();
                if puzzle.eliminate(value, &outside) {
                    changed = true;
                }
            }
        }
        changed
    }
}
