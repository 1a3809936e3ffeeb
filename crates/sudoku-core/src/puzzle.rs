//! The mutable per-puzzle state: grid, candidates, and its primitive mutations.

use std::collections::HashMap;
use std::rc::Rc;

use crate::candidate_set::CandidateSet;
use crate::config::solve_output_enabled;
use crate::error::PuzzleError;
use crate::geometry::Geometry;
use crate::position::Position;

/// The mutable state of one puzzle: its grid of assigned values, the
/// parallel grid of candidate sets, and the derived queries and primitive
/// mutations the solver and techniques drive it with.
///
/// Geometry is shared read-only behind an `Rc`, since it depends only on
/// `size` and is identical for every puzzle of that size; cheap to share
/// within the single-threaded solve this crate guarantees (see the
/// concurrency model).
#[derive(Debug, Clone)]
pub struct Puzzle {
    geometry: Rc<Geometry>,
    values: Vec<u8>,
    candidates: Vec<CandidateSet>,
    solved: bool,
    original_clue_count: usize,
}

impl Puzzle {
    /// Builds a puzzle from a row-major grid of values (`0` for empty).
    ///
    /// `values.len()` must equal `size * size`; `size` must be one of `4`,
    /// `9`, `16`.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidSize`] if `size` is unsupported or the
    /// value count doesn't match `size * size`.
    pub fn from_values(values: Vec<u8>, size: u8) -> Result<Self, PuzzleError> {
        if !matches!(size, 4 | 9 | 16) {
            return Err(PuzzleError::InvalidSize {
                size: size as usize,
            });
        }
        if values.len() != (size as usize) * (size as usize) {
            return Err(PuzzleError::InvalidSize {
                size: values.len(),
            });
        }

        let geometry = Rc::new(Geometry::new(size));
        let mut puzzle = Self {
            geometry,
            values: vec![0; (size as usize) * (size as usize)],
            candidates: vec![CandidateSet::full(size); (size as usize) * (size as usize)],
            solved: false,
            original_clue_count: 0,
        };

        for x in 0..size {
            for y in 0..size {
                let v = values[puzzle.idx(Position::new(x, y))];
                if v != 0 {
                    puzzle.assign(v, Position::new(x, y));
                }
            }
        }
        puzzle.original_clue_count = puzzle.count_cells();
        Ok(puzzle)
    }

    const fn idx(&self, pos: Position) -> usize {
        pos.x as usize * self.geometry.size() as usize + pos.y as usize
    }

    /// The puzzle's size.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.geometry.size()
    }

    /// The precomputed geometry tables for this puzzle's size.
    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// The value held at `pos`, or `0` if empty.
    #[must_use]
    pub fn value_at(&self, pos: Position) -> u8 {
        self.values[self.idx(pos)]
    }

    /// The candidate set at `pos` (empty for an assigned cell).
    #[must_use]
    pub fn candidates(&self, pos: Position) -> CandidateSet {
        self.candidates[self.idx(pos)]
    }

    /// Assigns `v` to `pos`, clears its candidates, and removes `v` from
    /// every peer's candidates.
    ///
    /// Emits a `debug`-level log line labelled with `pos`'s cell-position
    /// notation when verbose output is enabled.
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of range for this puzzle's size.
    pub fn assign(&mut self, v: u8, pos: Position) {
        assert!(
            v >= 1 && v <= self.size(),
            "value {v} out of range for size {}",
            self.size()
        );

        let idx = self.idx(pos);
        self.values[idx] = v;
        self.candidates[idx].clear();

        if solve_output_enabled() {
            log::debug!("assign {v} at {pos}");
        }

        let peers: Vec<Position> = self.geometry.peer_indices(pos).to_vec();
        for peer in peers {
            let peer_idx = self.idx(peer);
            self.candidates[peer_idx].remove(v);
        }

        self.solved = false;
    }

    /// Returns `true` iff every cell holds a non-zero value.
    ///
    /// Memoises `true`; once solved, later calls short-circuit without
    /// rescanning. Recomputes on every call while `false`.
    pub fn check_if_solved(&mut self) -> bool {
        if self.solved {
            return true;
        }
        self.solved = self.values.iter().all(|&v| v != 0);
        self.solved
    }

    /// Returns `true` iff every cell holds a non-zero value, without mutating
    /// the memoised flag.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved || self.values.iter().all(|&v| v != 0)
    }

    /// Returns `true` iff some group already holds the same value twice, some
    /// empty cell has no remaining candidates, or some group is missing a
    /// required digit with no cell left that could host it.
    #[must_use]
    pub fn is_impossible(&self) -> bool {
        for idx in 0..self.values.len() {
            if self.values[idx] == 0 && self.candidates[idx].is_empty() {
                return true;
            }
        }

        for group in self.geometry.all_group_indices() {
            let mut seen = CandidateSet::empty(self.size());
            for &pos in group {
                let v = self.value_at(pos);
                if v == 0 {
                    continue;
                }
                if seen.contains(v) {
                    return true;
                }
                seen.insert(v);
            }

            for value in 1..=self.size() {
                if seen.contains(value) {
                    continue;
                }
                let hostable = group.iter().any(|&p| self.candidates(p).contains(value));
                if !hostable {
                    return true;
                }
            }
        }
        false
    }

    /// Returns `true` iff every row, column, and box contains each value exactly once.
    #[must_use]
    pub fn validate_solution(&self) -> bool {
        for group in self.geometry.all_group_indices() {
            let mut seen = CandidateSet::empty(self.size());
            for &pos in group {
                let v = self.value_at(pos);
                if v == 0 || seen.contains(v) {
                    return false;
                }
                seen.insert(v);
            }
            if seen.len() != u32::from(self.size()) {
                return false;
            }
        }
        true
    }

    /// Returns the empty cell with the fewest candidates (at least 2), ties
    /// broken by row-major order. `None` if every cell is assigned.
    #[must_use]
    pub fn find_cell_with_fewest_candidates(&self) -> Option<Position> {
        let size = self.size();
        let mut best: Option<(Position, u32)> = None;
        for x in 0..size {
            for y in 0..size {
                let pos = Position::new(x, y);
                if self.value_at(pos) != 0 {
                    continue;
                }
                let len = self.candidates(pos).len();
                if len < 2 {
                    continue;
                }
                if best.is_none_or(|(_, best_len)| len < best_len) {
                    best = Some((pos, len));
                }
            }
        }
        best.map(|(pos, _)| pos)
    }

    /// Deep-copies this puzzle for speculative branching. Geometry is shared
    /// (it is read-only and depends only on size); the grid and candidate
    /// bitsets are copied by value.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// The number of assigned cells.
    #[must_use]
    pub fn count_cells(&self) -> usize {
        self.values.iter().filter(|&&v| v != 0).count()
    }

    /// The number of cells that were assigned at construction time. Fixed
    /// for the lifetime of the puzzle.
    #[must_use]
    pub const fn original_clue_count(&self) -> usize {
        self.original_clue_count
    }

    /// Counts, for each value, how many cells in `group` have that value as a candidate.
    #[must_use]
    pub fn candidates_counter(&self, group: &[Position]) -> HashMap<u8, usize> {
        let mut counter = HashMap::new();
        for &pos in group {
            for value in self.candidates(pos).iter() {
                *counter.entry(value).or_insert(0) += 1;
            }
        }
        counter
    }

    /// The subset of `group` whose candidates contain `value`.
    #[must_use]
    pub fn cells_with_candidate(&self, value: u8, group: &[Position]) -> Vec<Position> {
        group
            .iter()
            .copied()
            .filter(|&pos| self.candidates(pos).contains(value))
            .collect()
    }

    /// The subset of `group` whose candidate set equals `set` exactly.
    #[must_use]
    pub fn cells_with_exact_candidates(&self, set: CandidateSet, group: &[Position]) -> Vec<Position> {
        group
            .iter()
            .copied()
            .filter(|&pos| self.candidates(pos) == set)
            .collect()
    }

    /// Removes `value` from every cell's candidates in `group`.
    ///
    /// Returns `true` iff at least one removal happened.
    pub fn eliminate(&mut self, value: u8, group: &[Position]) -> bool {
        let mut changed = false;
        for &pos in group {
            let idx = self.idx(pos);
            if self.candidates[idx].remove(value) {
                changed = true;
                if solve_output_enabled() {
                    log::debug!("removed candidate {value} from {pos}");
                }
            }
        }
        changed
    }
}
