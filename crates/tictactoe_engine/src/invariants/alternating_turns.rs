//! Alternating turn invariant.

use super::Invariant;
use crate::Board;

/// Invariant: marks alternate move by move, starting from either mark.
///
/// While the game runs, the player to move is the opponent of the last
/// mover. Once it is over, the turn is frozen on the last mover.
pub struct AlternatingTurnsInvariant;

impl Invariant<Board> for AlternatingTurnsInvariant {
    fn holds(board: &Board) -> bool {
        if board.unresolved_move().is_some() {
            return true;
        }

        let owners: Vec<_> = board
            .moves()
            .iter()
            .map(|&position| board.cell(position).owner())
            .collect();

        if owners.iter().any(Option::is_none) {
            return false;
        }

        if owners.windows(2).any(|pair| pair[0] == pair[1]) {
            return false;
        }

        match owners.last().copied().flatten() {
            None => true,
            Some(last) if board.is_game_over() => board.current_player() == last,
            Some(last) => board.current_player() == last.opponent(),
        }
    }

    fn description() -> &'static str {
        "Marks alternate, and the turn freezes on the last mover once the game ends"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_holds_for_either_starting_mark() {
        for first in [Mark::X, Mark::O] {
            let mut board = Board::with_first_player(first);
            for index in [4, 0, 8, 2] {
                board
                    .play(Position::from_index(index).expect("on board"))
                    .expect("legal");
            }
            assert_eq!(board.current_player(), first);
            assert!(AlternatingTurnsInvariant::holds(&board));
        }
    }

    #[test]
    fn test_overwritten_move_violates() {
        let mut board = Board::with_first_player(Mark::X);
        let first = Position::from_index(0).expect("on board");
        let second = Position::from_index(1).expect("on board");
        board.play(first).expect("legal");
        board.play(second).expect("legal");
        board.force_owner(second, Some(Mark::X));
        assert!(!AlternatingTurnsInvariant::holds(&board));
    }
}
