//! Micro-benchmarks for individual technique applications.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use criterion::{BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use sudoku_core::{Position, Puzzle};
use sudoku_solver::technique::{
    HiddenSingle, HiddenSubset, LockedCandidatesBox, LockedCandidatesLine, NakedSingle,
    NakedSubset, Technique, XWing,
};

fn bench_apply_cases<T: Technique>(
    c: &mut Criterion,
    bench_name: &'static str,
    technique: &T,
    puzzles: &[(&'static str, Puzzle)],
) {
    for (param, puzzle) in puzzles {
        c.bench_with_input(BenchmarkId::new(bench_name, param), puzzle, |b, puzzle| {
            b.iter_batched_ref(
                || puzzle.copy(),
                |puzzle| technique.apply(puzzle),
                BatchSize::SmallInput,
            );
        });
    }
}

fn empty_puzzle() -> Puzzle {
    Puzzle::from_values(vec![0; 81], 9).unwrap()
}

fn naked_single_puzzle() -> Puzzle {
    let mut puzzle = empty_puzzle();
    let target = Position::new(0, 0);
    for value in 2..=9 {
        puzzle.eliminate(value, &[target]);
    }
    puzzle
}

fn hidden_single_puzzle() -> Puzzle {
    let mut puzzle = empty_puzzle();
    let rest_of_row: Vec<Position> = (1..9).map(|y| Position::new(0, y)).collect();
    puzzle.eliminate(7, &rest_of_row);
    puzzle
}

fn locked_candidates_puzzle() -> Puzzle {
    let mut puzzle = empty_puzzle();
    let box_cells: Vec<Position> = puzzle.geometry().box_indices(Position::new(0, 0)).to_vec();
    for &pos in &box_cells {
        if pos.x != 0 {
            puzzle.eliminate(5, &[pos]);
        }
    }
    puzzle
}

fn naked_subset_puzzle() -> Puzzle {
    let mut puzzle = empty_puzzle();
    let row: Vec<Position> = puzzle.geometry().row_indices(0).to_vec();
    for &pos in &row[..2] {
        for value in 3..=9 {
            puzzle.eliminate(value, &[pos]);
        }
    }
    puzzle
}

fn hidden_subset_puzzle() -> Puzzle {
    let mut puzzle = empty_puzzle();
    let row: Vec<Position> = puzzle.geometry().row_indices(0).to_vec();
    for &pos in &row[2..] {
        puzzle.eliminate(1, &[pos]);
        puzzle.eliminate(2, &[pos]);
    }
    puzzle
}

fn x_wing_puzzle() -> Puzzle {
    let mut puzzle = empty_puzzle();
    for &x in &[1u8, 7] {
        for y in 0..9 {
            if y != 1 && y != 7 {
                puzzle.eliminate(3, &[Position::new(x, y)]);
            }
        }
    }
    puzzle
}

fn bench_naked_single(c: &mut Criterion) {
    let puzzles = [("naked_single", naked_single_puzzle()), ("empty", empty_puzzle())];
    bench_apply_cases(c, "naked_single_apply", &NakedSingle::new(), &puzzles);
}

fn bench_hidden_single(c: &mut Criterion) {
    let puzzles = [("hidden_single", hidden_single_puzzle()), ("empty", empty_puzzle())];
    bench_apply_cases(c, "hidden_single_apply", &HiddenSingle::new(), &puzzles);
}

fn bench_naked_subset(c: &mut Criterion) {
    let puzzles = [("naked_subset", naked_subset_puzzle()), ("empty", empty_puzzle())];
    bench_apply_cases(c, "naked_subset_apply", &NakedSubset::new(), &puzzles);
}

fn bench_locked_candidates_line(c: &mut Criterion) {
    let puzzles = [("locked_candidates", locked_candidates_puzzle()), ("empty", empty_puzzle())];
    bench_apply_cases(
        c,
        "locked_candidates_line_apply",
        &LockedCandidatesLine::new(),
        &puzzles,
    );
}

fn bench_locked_candidates_box(c: &mut Criterion) {
    let puzzles = [("locked_candidates", locked_candidates_puzzle()), ("empty", empty_puzzle())];
    bench_apply_cases(
        c,
        "locked_candidates_box_apply",
        &LockedCandidatesBox::new(),
        &puzzles,
    );
}

fn bench_hidden_subset(c: &mut Criterion) {
    let puzzles = [("hidden_subset", hidden_subset_puzzle()), ("empty", empty_puzzle())];
    bench_apply_cases(c, "hidden_subset_apply", &HiddenSubset::new(), &puzzles);
}

fn bench_x_wing(c: &mut Criterion) {
    let puzzles = [("x_wing", x_wing_puzzle()), ("empty", empty_puzzle())];
    bench_apply_cases(c, "x_wing_apply", &XWing::new(), &puzzles);
}

criterion_group!(
    name = benches;
    config = Criterion::default().plotting_backend(PlottingBackend::Plotters);
    targets =
        bench_naked_single,
        bench_hidden_single,
        bench_naked_subset,
        bench_locked_candidates_line,
        bench_locked_candidates_box,
        bench_hidden_subset,
        bench_x_wing,
);
criterion_main!(benches);
