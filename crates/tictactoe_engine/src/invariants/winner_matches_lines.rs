//! Winner invariant: `winner` is set iff a line is owned by one mark.

use super::Invariant;
use crate::{Board, rules};

/// Invariant: the recorded winner agrees with the board.
///
/// If a winner is recorded, that mark owns a complete line. If none is
/// recorded, no line is complete.
pub struct WinnerMatchesLinesInvariant;

impl Invariant<Board> for WinnerMatchesLinesInvariant {
    fn holds(board: &Board) -> bool {
        if board.unresolved_move().is_some() {
            return true;
        }

        match board.winner() {
            Some(mark) => rules::winning_line(board, mark).is_some(),
            None => rules::check_winner(board).is_none(),
        }
    }

    fn description() -> &'static str {
        "Winner is set if and only if a line is owned by one mark"
    }
}
