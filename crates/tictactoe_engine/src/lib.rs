//! Tic-tac-toe rules engine.
//!
//! A [`Board`] owns the 3x3 grid, whose turn it is and whether the game has
//! ended. Front ends drive it through a two-phase protocol:
//!
//! 1. ask [`Board::is_cell_free`] (or inspect [`Board::cell`]),
//! 2. place the mark with [`Board::apply_move`],
//! 3. settle the move with [`Board::resolve`].
//!
//! Restarting means dropping the board and calling [`Board::create`] again.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, GameStatus, Mark, Position};
//!
//! let mut board = Board::with_first_player(Mark::X);
//! for (row, column) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     let position = Position::new(row, column)?;
//!     board.apply_move(position)?;
//!     board.resolve();
//! }
//! assert_eq!(board.status(), GameStatus::Won(Mark::X));
//! assert_eq!(board.current_player(), Mark::X);
//! # Ok::<(), tictactoe_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
pub mod contracts;
mod error;
pub mod invariants;
mod mark;
mod position;
pub mod rules;
mod status;

pub use board::{Board, Cell};
pub use error::EngineError;
pub use mark::Mark;
pub use position::Position;
pub use status::GameStatus;
