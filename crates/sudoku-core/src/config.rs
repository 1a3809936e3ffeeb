//! The process-wide verbose-output toggle.
//!
//! `solve_output_enabled` gates per-step log lines emitted by [`crate::Puzzle::assign`]
//! and by the techniques in `sudoku-solver`. It is a separate, narrower switch
//! than `RUST_LOG`: the batch driver flips it off around a silenced span
//! regardless of the configured log level, matching the original tool's
//! single on/off knob. Reads use `Ordering::Relaxed`, consistent with the
//! single-threaded guarantee this crate otherwise relies on.

use std::sync::atomic::{AtomicBool, Ordering};

static SOLVE_OUTPUT_ENABLED: AtomicBool = AtomicBool::new(true);

/// Returns whether per-step log lines are currently enabled.
#[must_use]
pub fn solve_output_enabled() -> bool {
    SOLVE_OUTPUT_ENABLED.load(Ordering::Relaxed)
}

/// Enables or disables per-step log lines.
pub fn set_solve_output_enabled(enabled: bool) {
    SOLVE_OUTPUT_ENABLED.store(enabled, Ordering::Relaxed);
}
