//! Pretty-printing a puzzle's grid to the terminal.

use std::fmt::Write as _;

use sudoku_core::{Position, Puzzle};

/// Renders `puzzle`'s grid as a row-per-line, right-aligned, `.`-for-empty
/// text block, widened to fit two-digit values for 16x16 puzzles.
#[must_use]
pub fn render(puzzle: &Puzzle) -> String {
    let size = puzzle.size();
    let width = if size >= 10 { 2 } else { 1 };

    let mut out = String::new();
    for x in 0..size {
        for y in 0..size {
            let v = puzzle.value_at(Position::new(x, y));
            if y > 0 {
                out.push(' ');
            }
            if v == 0 {
                let _ = write!(out, "{:>width$}", ".", width = width);
            } else {
                let _ = write!(out, "{v:>width$}");
            }
        }
        out.push('\n');
    }
    out
}
