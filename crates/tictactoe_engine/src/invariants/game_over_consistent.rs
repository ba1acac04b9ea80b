//! Terminal-state invariant.

use super::Invariant;
use crate::Board;

/// Invariant: `is_game_over` is true iff there is a winner or the board is full.
pub struct GameOverConsistentInvariant;

impl Invariant<Board> for GameOverConsistentInvariant {
    fn holds(board: &Board) -> bool {
        if board.unresolved_move().is_some() {
            return true;
        }
        board.is_game_over() == (board.winner().is_some() || board.is_full())
    }

    fn description() -> &'static str {
        "Game is over if and only if someone won or the board is full"
    }
}
