//! Errors raised by the rules engine.
//!
//! Every variant is recoverable: a rejected call leaves the board exactly
//! as it was, and the caller is expected to re-prompt.

use crate::Position;

/// Error returned when a query or move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Row or column is outside `0..3`.
    #[display("Position ({row}, {column}) is outside the 3x3 board")]
    InvalidPosition {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {_0} is not free")]
    CellOccupied(Position),

    /// The game has been won or drawn; only a new board accepts moves.
    #[display("Game is already over")]
    GameOver,

    /// The previous move has not been resolved yet.
    #[display("Move at {_0} must be resolved before the next move")]
    UnresolvedMove(Position),
}

impl std::error::Error for EngineError {}
