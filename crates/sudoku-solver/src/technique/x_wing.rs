use std::collections::HashMap;

use sudoku_core::{Position, Puzzle};

use super::Technique;

const NAME: &str = "x-wing";

/// For each value, finds two rows (or two columns) where the value's
/// candidates are confined to exactly the same two columns (or rows),
/// forming an axis-aligned rectangle, and eliminates it from those lines
/// outside the rectangle.
#[derive(Debug, Default, Clone, Copy)]
pub struct XWing;

impl XWing {
    /// Creates the technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Values confined to exactly two cells within `line`, keyed by value.
    fn exactly_two(puzzle: &Puzzle, line: &[Position]) -> HashMap<u8, Vec<Position>> {
        let mut map = HashMap::new();
        for value in 1..=puzzle.size() {
            let cells = puzzle.cells_with_candidate(value, line);
            if cells.len() == 2 {
                map.insert(value, cells);
            }
        }
        map
    }

    fn apply_rows(puzzle: &mut Puzzle) -> bool {
        let size = puzzle.size();
        let rows: Vec<Vec<Position>> = puzzle.geometry().all_row_indices().to_vec();
        let row_sets: Vec<HashMap<u8, Vec<Position>>> =
            rows.iter().map(|row| Self::exactly_two(puzzle, row)).collect();

        let mut changed = false;
        for r1 in 0..size {
            for r2 in (r1 + 1)..size {
                for value in 1..=size {
                    let (Some(cells1), Some(cells2)) = (
                        row_sets[r1 as usize].get(&value),
                        row_sets[r2 as usize].get(&value),
                    ) else {
                        continue;
                    };
                    let mut ys1: Vec<u8> = cells1.iter().map(|p| p.y).collect();
                    let mut ys2: Vec<u8> = cells2.iter().map(|p| p.y).collect();
                    ys1.sort_unstable();
                    ys2.sort_unstable();
                    if ys1 != ys2 {
                        continue;
                    }
                    for &y in &ys1 {
                        let column = puzzle.geometry().column_indices(y).to_vec();
                        let outside: Vec<Position> = column
                            .into_iter()
                            .filter(|p| p.x != r1 && p.x != r2)
                            .collect();
                        if puzzle.eliminate(value, &outside) {
                            changed = true;
                        }
                    }
                }
            }
        }
        changed
    }

    fn apply_columns(puzzle: &mut Puzzle) -> bool {
        let size = puzzle.size();
        let columns: Vec<Vec<Position>> = puzzle.geometry().all_column_indices().to_vec();
        let column_sets: Vec<HashMap<u8, Vec<Position>>> = columns
            .iter()
            .map(|column| Self::exactly_two(puzzle, column))
            .collect();

        let mut changed = false;
        for c1 in 0..size {
            for c2 in (c1 + 1)..size {
                for value in 1..=size {
                    let (Some(cells1), Some(cells2)) = (
                        column_sets[c1 as usize].get(&value),
                        column_sets[c2 as usize].get(&value),
                    ) else {
                        continue;
                    };
                    let mut xs1: Vec<u8> = cells1.iter().map(|p| p.x).collect();
                    let mut xs2: Vec<u8> = cells2.iter().map(|p| p.x).collect();
                    xs1.sort_unstable();
                    xs2.sort_unstable();
                    if xs1 != xs2 {
                        continue;
                    }
                    for &x in &xs1 {
                        let row = puzzle.geometry().row_indices(x).to_vec();
                        let outside: Vec<Position> = row
                            .into_iter()
                            .filter(|p| p.y != c1 && p.y != c2)
                            .collect();
                        if puzzle.eliminate(value, &outside) {
                            changed = true;
                        }
                    }
                }
            }
        }
        changed
    }
}

impl Technique for XWing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, puzzle: &mut Puzzle) -> bool {
        if puzzle.check_if_solved() {
            return false;
        }
        let rows_changed = Self::apply_rows(puzzle);
        let columns_changed = Self::apply_columns(puzzle);
        rows_changed || columns_changed
    }
}
