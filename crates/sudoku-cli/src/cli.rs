//! Command-line surface: argument parsing via `clap` derive (§10.4).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// A Sudoku solver combining human-style logical deduction with
/// backtracking search.
#[derive(Debug, Parser)]
#[command(name = "sudoku", version, about)]
pub struct Cli {
    /// Silences per-step deduction log lines (`solve_output_enabled = false`).
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// The available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solves a single puzzle.
    Solve {
        /// A puzzle file path (row/whitespace format), or, if no such file
        /// exists, a literal puzzle string.
        path: PathBuf,
    },
    /// Solves every puzzle in a newline-delimited puzzle-string file and
    /// prints an aggregate report.
    Batch {
        /// Path to the batch file.
        path: PathBuf,
    },
}
