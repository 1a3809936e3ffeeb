//! The `Technique` contract and the seven deduction patterns that implement it.

use std::fmt::Debug;

use sudoku_core::Puzzle;

mod hidden_single;
mod hidden_subset;
mod locked_candidates_box;
mod locked_candidates_line;
mod naked_single;
mod naked_subset;
mod x_wing;

pub use self::{
    hidden_single::HiddenSingle, hidden_subset::HiddenSubset,
    locked_candidates_box::LockedCandidatesBox, locked_candidates_line::LockedCandidatesLine,
    naked_single::NakedSingle, naked_subset::NakedSubset, x_wing::XWing,
};

/// One deduction pattern over a [`Puzzle`]'s candidate state.
///
/// Implementations must never violate the puzzle invariants (an assigned
/// cell's candidates are empty, no peer of an assigned cell lists that
/// value); they are not expected to detect an impossible puzzle themselves,
/// since that is the solve loop's job.
pub trait Technique: Debug {
    /// The technique's name, used as its statistics key and in reports.
    fn name(&self) -> &'static str;

    /// Attempts one full sweep of this technique's deduction pattern.
    ///
    /// Returns `true` iff at least one assignment or candidate elimination
    /// occurred. Callers (the [`crate::Solver`]) are responsible for the
    /// solved-check guard and the per-technique timing/use counters; a
    /// technique itself is a pure mutation over the puzzle.
    fn apply(&self, puzzle: &mut Puzzle) -> bool;
}

/// A type-erased technique, owned by the [`crate::Solver`]'s tiers.
pub type BoxedTechnique = Box<dyn Technique>;

/// Every technique, grouped into the solver's three priority tiers
/// (§4.11): high (cheap, run to a fixed point), normal (one pass), low
/// (one pass, most expensive last).
#[must_use]
pub fn default_tiers() -> (Vec<BoxedTechnique>, Vec<BoxedTechnique>, Vec<BoxedTechnique>) {
    let high: Vec<BoxedTechnique> = vec![
        Box::new(naked_single::NakedSingle::new()),
        Box::new(hidden_single::HiddenSingle::new()),
    ];
    let normal: Vec<BoxedTechnique> = vec![
        Box::new(naked_subset::NakedSubset::new()),
        Box::new(locked_candidates_line::LockedCandidatesLine::new()),
    ];
    let low: Vec<BoxedTechnique> = vec![
        Box::new(locked_candidates_box::LockedCandidatesBox::new()),
        Box::new(x_wing::XWing::new()),
        Box::new(hidden_subset::HiddenSubset::new()),
    ];
    (high, normal, low)
}
