//! Balanced mark counts.

use super::Invariant;
use crate::{Board, Mark};

/// Invariant: the two marks' counts never differ by more than one.
pub struct BalancedMarksInvariant;

impl Invariant<Board> for BalancedMarksInvariant {
    fn holds(board: &Board) -> bool {
        let count = |mark| {
            board
                .cells()
                .iter()
                .filter(|cell| cell.owner() == Some(mark))
                .count()
        };
        count(Mark::X).abs_diff(count(Mark::O)) <= 1
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}
