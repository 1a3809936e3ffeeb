//! Tiered technique orchestration and the backtracking search fallback.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use sudoku_core::Puzzle;

use crate::{
    SolverError,
    technique::{self, BoxedTechnique, Technique},
};

/// Per-technique usage counters and cumulative wall-clock time.
///
/// Held outside the puzzle, owned by the [`Solver`] rather than mutated as
/// hidden global state, and reset between batches by the caller (the
/// batch driver in `sudoku-cli`).
#[derive(Debug, Default, Clone, Copy)]
pub struct TechniqueStats {
    /// Number of times this technique was invoked (solved or no-op).
    pub total_uses: usize,
    /// Number of invocations that made at least one change.
    pub successful_uses: usize,
    /// Cumulative wall-clock time spent in this technique's `apply`.
    pub total_time: Duration,
}

impl TechniqueStats {
    /// Average time per invocation, or `None` if never invoked.
    #[must_use]
    pub fn average_time(&self) -> Option<Duration> {
        (self.total_uses > 0).then(|| self.total_time / u32::try_from(self.total_uses).unwrap_or(u32::MAX))
    }
}

fn apply_technique(
    technique: &dyn Technique,
    puzzle: &mut Puzzle,
    stats: &mut HashMap<&'static str, TechniqueStats>,
) -> bool {
    if puzzle.check_if_solved() {
        return false;
    }

    let start = Instant::now();
    let progress = technique.apply(puzzle);
    let elapsed = start.elapsed();

    let entry = stats.entry(technique.name()).or_default();
    entry.total_time += elapsed;
    entry.total_uses += 1;
    if progress {
        entry.successful_uses += 1;
    }
    progress
}

fn apply_tier_once(
    tier: &[BoxedTechnique],
    puzzle: &mut Puzzle,
    stats: &mut HashMap<&'static str, TechniqueStats>,
) -> bool {
    let mut progress = false;
    for technique in tier {
        progress |= apply_technique(technique.as_ref(), puzzle, stats);
    }
    progress
}

fn apply_tier_to_fixed_point(
    tier: &[BoxedTechnique],
    puzzle: &mut Puzzle,
    stats: &mut HashMap<&'static str, TechniqueStats>,
) {
    while apply_tier_once(tier, puzzle, stats) {}
}

/// Orchestrates the seven techniques in priority tiers, falling back to a
/// depth-first backtracking search when the logical pass stalls.
///
/// See §4.11: the high tier runs to a fixed point, the normal and low
/// tiers run one pass each, and any progress from normal/low restarts the
/// whole logical loop from the top.
#[derive(Debug)]
pub struct Solver {
    high_tier: Vec<BoxedTechnique>,
    normal_tier: Vec<BoxedTechnique>,
    low_tier: Vec<BoxedTechnique>,
    stats: HashMap<&'static str, TechniqueStats>,
    branch_count: usize,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Creates a solver with all seven techniques in their default tiers.
    #[must_use]
    pub fn new() -> Self {
        let (high_tier, normal_tier, low_tier) = technique::default_tiers();
        Self {
            high_tier,
            normal_tier,
            low_tier,
            stats: HashMap::new(),
            branch_count: 0,
        }
    }

    /// Builds a solver from explicit tiers, for tests that want to
    /// exercise a subset of techniques.
    #[must_use]
    pub fn with_tiers(
        high_tier: Vec<BoxedTechnique>,
        normal_tier: Vec<BoxedTechnique>,
        low_tier: Vec<BoxedTechnique>,
    ) -> Self {
        Self {
            high_tier,
            normal_tier,
            low_tier,
            stats: HashMap::new(),
            branch_count: 0,
        }
    }

    /// The names of the high-priority techniques, in tier order.
    #[must_use]
    pub fn high_tier_names(&self) -> Vec<&'static str> {
        self.high_tier.iter().map(|t| t.name()).collect()
    }

    /// Every technique's name, in tier order (high, normal, low).
    #[must_use]
    pub fn technique_names(&self) -> Vec<&'static str> {
        self.high_tier
            .iter()
            .chain(&self.normal_tier)
            .chain(&self.low_tier)
            .map(|t| t.name())
            .collect()
    }

    /// The per-technique statistics accumulated so far.
    #[must_use]
    pub fn stats(&self) -> &HashMap<&'static str, TechniqueStats> {
        &self.stats
    }

    /// The number of times the search loop has branched (pushed
    /// speculative copies onto the backtracking stack) since the last
    /// reset.
    #[must_use]
    pub const fn branch_count(&self) -> usize {
        self.branch_count
    }

    /// Clears technique statistics and the branch counter, ready for the
    /// next batch file.
    pub fn reset_stats(&mut self) {
        self.stats.clear();
        self.branch_count = 0;
    }

    /// Runs the logical solve loop (§4.11) on `puzzle` in place, without
    /// backtracking. Returns `true` iff the puzzle ends up solved.
    pub fn solve_logical(&mut self, puzzle: &mut Puzzle) -> bool {
        loop {
            if puzzle.check_if_solved() {
                return true;
            }

            apply_tier_to_fixed_point(&self.high_tier, puzzle, &mut self.stats);
            if puzzle.check_if_solved() {
                return true;
            }

            if apply_tier_once(&self.normal_tier, puzzle, &mut self.stats) {
                continue;
            }
            if apply_tier_once(&self.low_tier, puzzle, &mut self.stats) {
                continue;
            }

            return puzzle.check_if_solved();
        }
    }

    /// Solves `puzzle`, falling back to depth-first backtracking (§4.11)
    /// when the logical loop stalls.
    ///
    /// Returns the final puzzle state and whether it was solved. On
    /// success, the solution is validated; a technique producing a
    /// consistent-looking but wrong grid surfaces as
    /// [`SolverError::InvalidSolution`] rather than a silent `false`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidSolution`] if a puzzle reports solved
    /// but fails `validate_solution` — a defect in the logic techniques,
    /// not a normal search outcome.
    pub fn solve(&mut self, puzzle: Puzzle) -> Result<(bool, Puzzle), SolverError> {
        let mut stack = vec![puzzle.copy()];
        let mut last_seen = puzzle;

        while let Some(mut candidate) = stack.pop() {
            if self.solve_logical(&mut candidate) {
                if !candidate.validate_solution() {
                    return Err(SolverError::InvalidSolution);
                }
                return Ok((true, candidate));
            }

            if candidate.is_impossible() {
                continue;
            }

            let Some(branch_pos) = candidate.find_cell_with_fewest_candidates() else {
                // Not solved, not impossible, and no empty cell with >= 2
                // candidates left: every empty cell must have exactly one,
                // which single candidate already would have assigned.
                // Treat conservatively as impossible and discard.
                continue;
            };

            self.branch_count += 1;
            let values: Vec<u8> = candidate.candidates(branch_pos).iter().collect();
            for value in values {
                let mut branch = candidate.copy();
                branch.assign(value, branch_pos);
                stack.push(branch);
            }
            last_seen = candidate;
        }

        Ok((false, last_seen))
    }
}

#[cfg(test)]
mod tests {
    use sudoku_core::Position;

    use super::*;
    use crate::technique::{HiddenSingle, NakedSingle};

    fn solver_with_singles_only() -> Solver {
        Solver::with_tiers(
            vec![Box::new(NakedSingle::new()), Box::new(HiddenSingle::new())],
            vec![],
            vec![],
        )
    }

    #[test]
    fn test_solve_logical_fills_naked_single() {
        let mut puzzle = Puzzle::from_values(
            vec![
                1, 2, 3, 4, //
                3, 4, 1, 2, //
                2, 1, 4, 3, //
                4, 3, 2, 0,
            ],
            4,
        )
        .unwrap();

        let mut solver = solver_with_singles_only();
        assert!(solver.solve_logical(&mut puzzle));
        assert_eq!(puzzle.value_at(Position::new(3, 3)), 1);
        assert!(puzzle.validate_solution());
    }

    #[test]
    fn test_solve_records_technique_stats() {
        let puzzle = Puzzle::from_values(
            vec![
                1, 2, 3, 4, //
                3, 4, 1, 2, //
                2, 1, 4, 3, //
                4, 3, 2, 0,
            ],
            4,
        )
        .unwrap();

        let mut solver = solver_with_singles_only();
        let (solved, result) = solver.solve(puzzle).unwrap();
        assert!(solved);
        assert!(result.validate_solution());
        assert!(solver.stats().get("single candidate").unwrap().total_uses >= 1);
    }

    #[test]
    fn test_solve_empty_puzzle_requires_backtracking() {
        let puzzle = Puzzle::from_values(vec![0; 81], 9).unwrap();
        let mut solver = Solver::new();
        let (solved, result) = solver.solve(puzzle).unwrap();
        assert!(solved);
        assert!(result.validate_solution());
        assert!(solver.branch_count() > 0);
    }

    #[test]
    fn test_solve_easy_puzzle_via_logic_alone() {
        let digits: Vec<u8> =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
                .chars()
                .map(|c| c.to_digit(10).unwrap() as u8)
                .collect();
        let puzzle = Puzzle::from_values(digits, 9).unwrap();

        let mut solver = Solver::new();
        let (solved, result) = solver.solve(puzzle).unwrap();
        assert!(solved);
        assert!(result.validate_solution());
    }

    #[test]
    fn test_solve_ai_escargot_requires_branching() {
        let digits: Vec<u8> =
            "800000000003600000070090200050007000000045700000100030001000068008500010090000400"
                .chars()
                .map(|c| c.to_digit(10).unwrap() as u8)
                .collect();
        let puzzle = Puzzle::from_values(digits, 9).unwrap();

        let mut solver = Solver::new();
        let (solved, result) = solver.solve(puzzle).unwrap();
        assert!(solved);
        assert!(result.validate_solution());
        assert!(solver.branch_count() > 0);
    }

    #[test]
    fn test_solve_impossible_puzzle_fails_without_crashing() {
        // Two 5s in row 0.
        let mut values = vec![0u8; 81];
        values[0] = 5;
        values[1] = 5;
        let puzzle = Puzzle::from_values(values, 9).unwrap();

        let mut solver = Solver::new();
        let (solved, _result) = solver.solve(puzzle).unwrap();
        assert!(!solved);
    }

    #[test]
    fn test_solve_is_deterministic() {
        let digits: Vec<u8> =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
                .chars()
                .map(|c| c.to_digit(10).unwrap() as u8)
                .collect();

        let puzzle1 = Puzzle::from_values(digits.clone(), 9).unwrap();
        let puzzle2 = Puzzle::from_values(digits, 9).unwrap();

        let (solved1, result1) = Solver::new().solve(puzzle1).unwrap();
        let (solved2, result2) = Solver::new().solve(puzzle2).unwrap();
        assert!(solved1 && solved2);

        for x in 0..9 {
            for y in 0..9 {
                let pos = Position::new(x, y);
                assert_eq!(result1.value_at(pos), result2.value_at(pos));
            }
        }
    }

    #[test]
    fn test_reset_stats_clears_counters_and_branch_count() {
        let puzzle = Puzzle::from_values(vec![0; 81], 9).unwrap();
        let mut solver = Solver::new();
        solver.solve(puzzle).unwrap();
        assert!(!solver.stats().is_empty());

        solver.reset_stats();
        assert!(solver.stats().is_empty());
        assert_eq!(solver.branch_count(), 0);
    }
}

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;
    use sudoku_core::Puzzle;

    use super::Solver;

    /// A fixed, known-valid 9x9 solved grid, via the standard base-shift
    /// construction (`base = 3`, `side = 9`): every row, column, and box is a
    /// permutation of `1..=9`.
    fn solved_grid() -> Vec<u8> {
        let base: u32 = 3;
        let side: u32 = 9;
        (0..side)
            .flat_map(|r| {
                (0..side)
                    .map(move |c| ((base * (r % base) + r / base + c) % side + 1) as u8)
            })
            .collect()
    }

    fn clue_mask() -> impl Strategy<Value = Vec<bool>> {
        prop::collection::vec(prop::bool::weighted(0.7), 81)
    }

    proptest! {
        /// For any random subset of clues kept from a known-valid solved
        /// grid, the solver either reports unsolved or produces a grid that
        /// validates (never claims success on an invalid arrangement).
        #[test]
        fn prop_solve_never_reports_invalid_success(keep in clue_mask()) {
            let grid = solved_grid();
            let values: Vec<u8> = grid
                .iter()
                .zip(&keep)
                .map(|(&v, &k)| if k { v } else { 0 })
                .collect();
            let puzzle = Puzzle::from_values(values, 9).unwrap();

            let mut solver = Solver::new();
            let result = solver.solve(puzzle);
            prop_assert!(result.is_ok());
            let (solved, result_puzzle) = result.unwrap();
            if solved {
                prop_assert!(result_puzzle.validate_solution());
            }
        }

        /// Solving the same masked puzzle twice is deterministic.
        #[test]
        fn prop_solve_is_deterministic(keep in clue_mask()) {
            let grid = solved_grid();
            let values: Vec<u8> = grid
                .iter()
                .zip(&keep)
                .map(|(&v, &k)| if k { v } else { 0 })
                .collect();

            let puzzle1 = Puzzle::from_values(values.clone(), 9).unwrap();
            let puzzle2 = Puzzle::from_values(values, 9).unwrap();

            let (solved1, result1) = Solver::new().solve(puzzle1).unwrap();
            let (solved2, result2) = Solver::new().solve(puzzle2).unwrap();
            prop_assert_eq!(solved1, solved2);
            for x in 0..9 {
                for y in 0..9 {
                    let pos = sudoku_core::Position::new(x, y);
                    prop_assert_eq!(result1.value_at(pos), result2.value_at(pos));
                }
            }
        }
    }
}
