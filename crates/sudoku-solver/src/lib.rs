//! Technique-based deduction and backtracking search over a [`sudoku_core::Puzzle`].
//!
//! - [`technique`]: the `Technique` contract and the seven deduction
//!   patterns (single candidate, hidden single, naked subset, locked
//!   candidates on line/in box, X-Wing, hidden subset).
//! - [`Solver`]: orchestrates the techniques in priority tiers, detects
//!   no-progress, and falls back to depth-first backtracking.
//! - [`SolverError`]: the solver's distinguished failure, `InvalidSolution`.

pub use self::{error::*, technique_solver::*};

mod error;
pub mod technique;
mod technique_solver;
