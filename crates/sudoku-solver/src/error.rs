//! Errors surfaced by the solver.

use derive_more::{Display, Error};

/// An error raised while solving a puzzle.
#[derive(Debug, Display, Error)]
pub enum SolverError {
    /// The logical and backtracking passes produced a grid that fails
    /// `validate_solution`. The deduction techniques have a defect if this
    /// is ever returned.
    #[display("solver produced an invalid solution")]
    InvalidSolution,
}
