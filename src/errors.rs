//! Errors used throughout the engine core.
//!
//! Structural failures (bad construction input, undoing with no history) are
//! reported through `ChessError`. Absence of legal moves is never an error:
//! it is an empty move list or a `None` best move.

use std::error::Error;
use std::fmt;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A piece arrangement passed to the position constructor did not contain
    /// exactly 64 entries. Payload: the length that was supplied.
    InvalidArrangement(usize),
    /// `undo` was called on a position with no applied moves.
    EmptyMoveHistory,
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidArrangement(len) => {
                write!(f, "piece arrangement must have 64 entries, got {len}")
            }
            ChessError::EmptyMoveHistory => write!(f, "no move to undo"),
        }
    }
}

impl Error for ChessError {}
