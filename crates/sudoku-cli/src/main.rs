//! Command-line front end for the Sudoku solver.
//!
//! Wires together puzzle parsing (`parse`), pretty-printing (`display`),
//! the batch driver (`batch`), and the `clap`-derived CLI surface (`cli`)
//! over `sudoku-solver`'s `Solver`.

use std::process::ExitCode;

use clap::Parser;
use sudoku_core::set_solve_output_enabled;
use sudoku_solver::Solver;

use crate::cli::{Cli, Command};
use crate::error::CliError;

mod batch;
mod cli;
mod display;
mod error;
mod parse;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    set_solve_output_enabled(!cli.quiet);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Solve { path } => run_solve(&path),
        Command::Batch { path } => run_batch(&path),
    }
}

fn run_solve(path: &std::path::Path) -> Result<(), CliError> {
    let puzzle = if path.is_file() {
        parse::parse_file(path)?
    } else {
        parse::parse_string(&path.to_string_lossy())?
    };

    let mut solver = Solver::new();
    let (solved, result) = solver.solve(puzzle)?;

    print!("{}", display::render(&result));
    if solved {
        log::info!("solved in {} branch(es)", solver.branch_count());
    } else {
        log::warn!("could not solve this puzzle");
    }

    Ok(())
}

fn run_batch(path: &std::path::Path) -> Result<(), CliError> {
    let mut solver = Solver::new();
    let report = batch::run_batch(path, &mut solver)?;
    println!("{report}");
    Ok(())
}
