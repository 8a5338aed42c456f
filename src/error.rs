//! Errors raised at the table / configuration boundary.
//!
//! All validation is synchronous and happens before any minimization work:
//! a call either produces a complete result or fails as a whole.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A pushed row does not match the table's column count.
    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },

    /// A referenced column index is outside the table.
    #[error("column index {index} out of range for table of width {width}")]
    ColumnOutOfRange { index: usize, width: usize },

    /// A minterm's literal vector does not match the variable count.
    #[error("implicant has {got} literals, expected {expected}")]
    LiteralLengthMismatch { got: usize, expected: usize },

    /// Excitation encoding was requested with unpaired state columns.
    #[error("{states} current-state columns but {next_states} next-state columns")]
    StateColumnMismatch { states: usize, next_states: usize },

    /// A state or next-state cell holds a don't-care; observed state bits
    /// must be definite.
    #[error("state cell at row {row}, column {col} is not a binary value")]
    NonBinaryState { row: usize, col: usize },

    /// A row pattern contains a character other than `0`, `1`, `-`.
    #[error("invalid pattern character {ch:?}")]
    BadPatternChar { ch: char },
}

pub type Result<T> = std::result::Result<T, Error>;
