//! Game status derived from board state.

use crate::Mark;
use serde::{Deserialize, Serialize};

/// Where a game stands.
///
/// `Won` and `Draw` are terminal: a board in either state accepts no further
/// moves and is replaced wholesale on restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A winning line was completed by this mark.
    Won(Mark),
    /// All cells are occupied and nobody completed a line.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(mark) => write!(f, "{} wins", mark),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
