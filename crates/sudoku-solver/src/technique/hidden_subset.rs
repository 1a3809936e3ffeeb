use sudoku_core::{CandidateSet, Position, Puzzle};

use super::Technique;

const NAME: &str = "hidden subset";

/// For each group with more than two empty cells, and each subset size `n`
/// in `{2, 3, 4}`, finds an `n`-subset of cells whose candidates are
/// collectively confined to `n` values not used anywhere else in the
/// group, and restricts those cells to exactly that hidden set.
///
/// The upper bound of 4 is fixed per §9 rather than searched dynamically.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSubset;

impl HiddenSubset {
    /// Creates the technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Every `n`-element combination of `items`, in lexicographic index order.
fn combinations(items: &[Position], n: usize) -> Vec<Vec<Position>> {
    let mut result = Vec::new();
    if n == 0 || n > items.len() {
        return result;
    }
    let mut current = Vec::with_capacity(n);
    combinations_from(items, n, 0, &mut current, &mut result);
    result
}

fn combinations_from(
    items: &[Position],
    n: usize,
    start: usize,
    current: &mut Vec<Position>,
    result: &mut Vec<Vec<Position>>,
) {
    if current.len() == n {
        result.push(current.clone());
        return;
    }
    for i in start..items.len() {
        current.push(items[i]);
        combinations_from(items, n, i + 1, current, result);
        current.pop();
    }
}

impl Technique for HiddenSubset {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, puzzle: &mut Puzzle) -> bool {
        if puzzle.check_if_solved() {
            return false;
        }

        let groups: Vec<Vec<Position>> = puzzle
            .geometry()
            .all_group_indices()
            .into_iter()
            .map(<[Position]>::to_vec)
            .collect();

        let mut changed = false;
        for group in &groups {
            let empty_cells: Vec<Position> = group
                .iter()
                .copied()
                .filter(|&pos| puzzle.value_at(pos) == 0)
                .collect();
            if empty_cells.len() <= 2 {
                continue;
            }

            for n in 2..=4usize {
                if n >= empty_cells.len() {
                    continue;
                }
                for subset in combinations(&empty_cells, n) {
                    let v_subset = subset
                        .iter()
                        .fold(CandidateSet::empty(puzzle.size()), |acc, &pos| {
                            acc.union(puzzle.candidates(pos))
                        });
                    let rest: Vec<Position> = empty_cells
                        .iter()
                        .copied()
                        .filter(|pos| !subset.contains(pos))
                        .collect();
                    let v_rest = rest
                        .iter()
                        .fold(CandidateSet::empty(puzzle.size()), |acc, &pos| {
                            acc.union(puzzle.candidates(pos))
                        });

                    let hidden = v_subset.difference(v_rest);
                    if hidden.len() as usize != n {
                        continue;
                    }

                    let shared = v_subset.intersection(v_rest);
                    if shared.is_empty() {
                        continue;
                    }
                    for value in shared.iter() {
                        if puzzle.eliminate(value, &subset) {
                            changed = true;
                        }
                    }
                }
            }
        }
        changed
    }
}
