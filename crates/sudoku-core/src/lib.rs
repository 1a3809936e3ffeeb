//! Core data model for a size-parameterised Sudoku solver.
//!
//! This crate provides the puzzle's geometry (rows, columns, boxes,
//! peers), the candidate-set bitset, and the mutable puzzle state with its
//! assign/eliminate primitives. It knows nothing about deduction
//! techniques or search; see `sudoku-solver` for those.
//!
//! # Overview
//!
//! - [`geometry`]: pure, size-parameterised index helpers (row/column/box
//!   membership, peer sets, group enumerations), precomputed once per
//!   `(size, box_size)`.
//! - [`candidate_set`]: a bitset of still-possible values for one cell,
//!   sized at runtime to the puzzle's `size`.
//! - [`position`]: a cell's `(x, y)` coordinates and their output notation.
//! - [`puzzle`]: the mutable per-puzzle state: grid, candidates, and the
//!   `assign`/`eliminate` primitives every technique and the solver drive
//!   it with.
//! - [`config`]: the process-wide `solve_output_enabled` toggle.
//! - [`error`]: errors surfaced by puzzle construction and parsing.
//!
//! Puzzles come in three sizes: 4x4, 9x9, and 16x16.
//!
//! # Examples
//!
//! ```
//! use sudoku_core::{Position, Puzzle};
//!
//! let mut puzzle = Puzzle::from_values(vec![0; 81], 9).unwrap();
//! puzzle.assign(5, Position::new(4, 4));
//! assert!(!puzzle.candidates(Position::new(4, 5)).contains(5)); // removed from same column
//! ```

pub mod candidate_set;
pub mod config;
pub mod error;
pub mod geometry;
pub mod position;
pub mod puzzle;

// Re-export commonly used types
pub use self::{
    candidate_set::CandidateSet,
    config::{set_solve_output_enabled, solve_output_enabled},
    error::PuzzleError,
    geometry::Geometry,
    position::Position,
    puzzle::Puzzle,
};
