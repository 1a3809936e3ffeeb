//! Batch driver: solves every puzzle in a newline-delimited file with
//! output silenced and reports aggregate statistics (§4.12, §6).

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::time::Instant;

use sudoku_core::set_solve_output_enabled;
use sudoku_solver::Solver;

use crate::error::CliError;
use crate::parse::parse_string;

/// Solves every puzzle string in `path`, one per line, and returns the
/// formatted report (§6).
///
/// Silences per-step log lines for the duration of the batch (restoring
/// the previous setting afterwards) and resets `solver`'s technique
/// statistics once the report has been built, so a caller can run several
/// batch files back to back with independent counts.
///
/// # Errors
///
/// Returns [`CliError::MissingFile`] if `path` doesn't exist, `CliError::Io`
/// for any other read failure, and `CliError::Puzzle`/`CliError::Solver` if
/// a line fails to parse or solve.
pub fn run_batch(path: &Path, solver: &mut Solver) -> Result<String, CliError> {
    if !path.is_file() {
        return Err(CliError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path)?;
    let lines: Vec<&str> = contents.lines().filter(|line| !line.is_empty()).collect();
    let total_count = lines.len();

    set_solve_output_enabled(false);
    let start = Instant::now();

    let mut unsolved_count = 0usize;
    for line in &lines {
        let puzzle = parse_string(line)?;
        let (solved, _result) = solver.solve(puzzle)?;
        if !solved {
            unsolved_count += 1;
        }
    }

    let elapsed = start.elapsed();
    set_solve_output_enabled(true);

    let report = format_report(path, solver, total_count, unsolved_count, elapsed);
    solver.reset_stats();
    Ok(report)
}

fn format_report(
    path: &Path,
    solver: &Solver,
    total_count: usize,
    unsolved_count: usize,
    elapsed: std::time::Duration,
) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}: high-priority techniques = [{}]",
        path.display(),
        solver.high_tier_names().join(", ")
    );

    let unsolved_pct = percent(unsolved_count, total_count);
    let per_puzzle_ms = if total_count == 0 {
        0.0
    } else {
        elapsed.as_secs_f64() * 1000.0 / total_count as f64
    };
    let _ = writeln!(
        out,
        "Total: {total_count}, unsolved: {unsolved_count} ({unsolved_pct:.1}%), took {:.2}s ({per_puzzle_ms:.2}ms per)",
        elapsed.as_secs_f64()
    );

    let mut total_uses = 0usize;
    let mut total_time = std::time::Duration::ZERO;
    for name in solver.technique_names() {
        let stats = solver.stats().get(name).copied().unwrap_or_default();
        total_uses += stats.total_uses;
        total_time += stats.total_time;

        let pct = percent(stats.successful_uses, stats.total_uses);
        let per_use_us = stats
            .average_time()
            .map_or(0.0, |d| d.as_secs_f64() * 1_000_000.0);
        let _ = writeln!(
            out,
            "{name}: {}/{} uses ({pct:.1}%), took {:.2}s ({per_use_us:.1}\u{b5}s per)",
            stats.successful_uses,
            stats.total_uses,
            stats.total_time.as_secs_f64()
        );
    }

    let _ = writeln!(out, "Used bruteforce {} times", solver.branch_count());

    let total_per_use_us = if total_uses == 0 {
        0.0
    } else {
        total_time.as_secs_f64() * 1_000_000.0 / total_uses as f64
    };
    let _ = write!(out, "TOTAL USES: {total_uses}, {total_per_use_us:.1}\u{b5}s per");

    out
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        100.0 * part as f64 / whole as f64
    }
}
