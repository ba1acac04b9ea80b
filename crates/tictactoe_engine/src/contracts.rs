//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} apply_move {Q}. Preconditions are always checked; postconditions run
//! in debug builds only.

use crate::invariants::InvariantViolation;
use crate::{Board, EngineError, Position};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), EngineError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves on a won or drawn board.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), EngineError> {
        if board.is_game_over() {
            Err(EngineError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the previous move has been resolved.
pub struct PreviousMoveResolved;

impl PreviousMoveResolved {
    /// Rejects a second move while one is still pending.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), EngineError> {
        match board.unresolved_move() {
            Some(pending) => Err(EngineError::UnresolvedMove(pending)),
            None => Ok(()),
        }
    }
}

/// Precondition: the target cell is free.
pub struct CellIsFree;

impl CellIsFree {
    /// Rejects moves onto an occupied cell.
    #[instrument(skip(board))]
    pub fn check(position: Position, board: &Board) -> Result<(), EngineError> {
        if board.cell(position).is_free() {
            Ok(())
        } else {
            Err(EngineError::CellOccupied(position))
        }
    }
}

/// Postcondition: exactly one new cell is occupied and no old cell changed.
pub struct MonotonicGrowth;

impl MonotonicGrowth {
    /// Compares the board before and after a move.
    #[instrument(skip_all)]
    pub fn holds(before: &Board, after: &Board) -> bool {
        let mut added = 0;
        for (old, new) in before.cells().iter().zip(after.cells()) {
            match (old.owner(), new.owner()) {
                (Some(a), Some(b)) if a != b => {
                    warn!(position = %old.position(), "Mark changed after being set");
                    return false;
                }
                (Some(_), None) => {
                    warn!(position = %old.position(), "Mark cleared");
                    return false;
                }
                (None, Some(_)) => added += 1,
                _ => {}
            }
        }
        if added != 1 {
            warn!(added, "Expected exactly one new mark");
        }
        added == 1
    }
}

/// Contract for `apply_move`.
///
/// Preconditions:
/// - Game not over
/// - Previous move resolved
/// - Cell free
///
/// Postconditions:
/// - Board grows by exactly one mark
pub struct MoveContract;

impl Contract<Board, Position> for MoveContract {
    fn pre(board: &Board, position: &Position) -> Result<(), EngineError> {
        GameNotOver::check(board)?;
        PreviousMoveResolved::check(board)?;
        CellIsFree::check(*position, board)?;
        Ok(())
    }

    fn post(before: &Board, after: &Board) -> Result<(), InvariantViolation> {
        if MonotonicGrowth::holds(before, after) {
            Ok(())
        } else {
            Err(InvariantViolation::new(
                "Board grows by exactly one mark and never changes a placed mark",
            ))
        }
    }
}
