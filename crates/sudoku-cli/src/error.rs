//! Errors surfaced by the command-line front end.

use std::path::PathBuf;

use derive_more::{Display, Error, From};
use sudoku_core::PuzzleError;
use sudoku_solver::SolverError;

/// An error returned by `main`'s fallible inner function.
#[derive(Debug, Display, Error, From)]
pub enum CliError {
    /// A puzzle file or string failed to parse.
    #[display("{_0}")]
    Puzzle(#[from] PuzzleError),
    /// The solver itself failed.
    #[display("{_0}")]
    Solver(#[from] SolverError),
    /// An I/O operation failed.
    #[display("{_0}")]
    Io(#[from] std::io::Error),
    /// The path given to `solve`/`batch` does not exist and is not a
    /// usable literal puzzle string either.
    #[display("no such puzzle file: {}", path.display())]
    MissingFile {
        /// The path that was looked up.
        path: PathBuf,
    },
}
