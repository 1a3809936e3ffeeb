//! Errors surfaced by puzzle construction and parsing.

use derive_more::{Display, Error};

/// An error constructing or parsing a puzzle.
#[derive(Debug, Display, Error)]
pub enum PuzzleError {
    /// The grid's row count is not one of the supported sizes.
    #[display("unsupported puzzle size {size}, expected 4, 9, or 16")]
    InvalidSize {
        /// The unsupported size that was encountered.
        size: usize,
    },
    /// A puzzle file failed to parse.
    #[display("malformed puzzle file: {reason}")]
    MalformedFile {
        /// A human-readable explanation.
        reason: String,
    },
    /// A puzzle string failed to parse.
    #[display("malformed puzzle string: {reason}")]
    MalformedString {
        /// A human-readable explanation.
        reason: String,
    },
}
