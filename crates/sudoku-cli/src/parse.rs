//! Puzzle file and string parsing (§6).

use std::fs;
use std::path::Path;

use sudoku_core::{Puzzle, PuzzleError};

/// Reads a puzzle from a row-per-line, whitespace-separated file.
///
/// Unknown cells are any token that isn't a digit in `1..=size`
/// (conventionally `x`). The row count fixes `size`; every row must have
/// exactly `size` tokens, and a file with no whitespace between tokens is
/// rejected rather than silently parsed as one giant token.
///
/// # Errors
///
/// Returns [`PuzzleError::MalformedFile`] for a dimension mismatch or a
/// missing-whitespace file, and whatever [`Puzzle::from_values`] returns for
/// an unsupported row count.
pub fn parse_file(path: &Path) -> Result<Puzzle, PuzzleError> {
    let contents = fs::read_to_string(path).map_err(|e| PuzzleError::MalformedFile {
        reason: e.to_string(),
    })?;
    parse_file_str(&contents)
}

fn parse_file_str(contents: &str) -> Result<Puzzle, PuzzleError> {
    let rows: Vec<&str> = contents.lines().filter(|line| !line.is_empty()).collect();
    let size = rows.len();

    if rows.first().is_some_and(|row| row.split_whitespace().count() == 1 && row.len() > 1) {
        return Err(PuzzleError::MalformedFile {
            reason: "whitespace between numbers is required".to_owned(),
        });
    }

    if !rows.iter().all(|row| row.split_whitespace().count() == size) {
        return Err(PuzzleError::MalformedFile {
            reason: "dimensions do not match".to_owned(),
        });
    }

    let Ok(size_u8) = u8::try_from(size) else {
        return Err(PuzzleError::InvalidSize { size });
    };

    let mut values = Vec::with_capacity(size * size);
    for row in &rows {
        for token in row.split_whitespace() {
            values.push(parse_cell_token(token, size_u8));
        }
    }

    Puzzle::from_values(values, size_u8)
}

fn parse_cell_token(token: &str, size: u8) -> u8 {
    token
        .parse::<u8>()
        .ok()
        .filter(|&v| v >= 1 && v <= size)
        .unwrap_or(0)
}

/// Reads a puzzle from a single line of digits with no separators (`0` for
/// unknown cells). Allowed lengths are `16` (4x4) and `81` (9x9); 16x16 is
/// unsupported because a zero-delimited string can't disambiguate
/// two-digit values.
///
/// # Errors
///
/// Returns [`PuzzleError::MalformedString`] for a disallowed length or a
/// non-digit character.
pub fn parse_string(puzzle_string: &str) -> Result<Puzzle, PuzzleError> {
    let trimmed = puzzle_string.trim();
    let size = match trimmed.len() {
        16 => 4,
        81 => 9,
        len => {
            return Err(PuzzleError::MalformedString {
                reason: format!("length should be 16 or 81, but it's {len}"),
            });
        }
    };

    let mut values = Vec::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        let Some(digit) = c.to_digit(10) else {
            return Err(PuzzleError::MalformedString {
                reason: "all characters should be digits".to_owned(),
            });
        };
        values.push(digit as u8);
    }

    Puzzle::from_values(values, size)
}

/// Renders a puzzle back to its single-line digit string (`0` for unknown
/// cells), the inverse of [`parse_string`].
#[must_use]
pub fn to_puzzle_string(puzzle: &Puzzle) -> String {
    let size = puzzle.size();
    let mut s = String::with_capacity(size as usize * size as usize);
    for x in 0..size {
        for y in 0..size {
            let v = puzzle.value_at(sudoku_core::Position::new(x, y));
            s.push(char::from(b'0' + v));
        }
    }
    s
}
