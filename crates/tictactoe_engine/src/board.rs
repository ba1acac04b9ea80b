//! Board state and the move/resolve protocol.

use crate::contracts::{Contract, MoveContract};
#[cfg(debug_assertions)]
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::{EngineError, GameStatus, Mark, Position, rules};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// One of the 9 board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_new::new)]
pub struct Cell {
    position: Position,
    #[new(default)]
    owner: Option<Mark>,
}

impl Cell {
    /// Where the cell sits.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The mark occupying the cell, if any.
    pub fn owner(&self) -> Option<Mark> {
        self.owner
    }

    /// Returns true if no mark has been placed here.
    pub fn is_free(&self) -> bool {
        self.owner.is_none()
    }
}

/// Complete state of one game.
///
/// A move is two calls: [`Board::apply_move`] places the current player's
/// mark, then [`Board::resolve`] checks for a win or draw and passes the turn.
/// [`Board::play`] does both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    cells: [Cell; 9],
    current_player: Mark,
    is_game_over: bool,
    winner: Option<Mark>,
    moves: Vec<Position>,
    unresolved: Option<Position>,
}

impl Board {
    /// Creates an empty board with a uniformly random starting player.
    #[instrument]
    pub fn create() -> Self {
        Self::create_with_rng(&mut rand::rng())
    }

    /// Creates an empty board, drawing the starting player from `rng`.
    #[instrument(skip(rng))]
    pub fn create_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_first_player(rng.random())
    }

    /// Creates an empty board where `first` moves first.
    #[instrument]
    pub fn with_first_player(first: Mark) -> Self {
        debug!(%first, "Creating board");
        Self {
            cells: Position::ALL.map(Cell::new),
            current_player: first,
            is_game_over: false,
            winner: None,
            moves: Vec::new(),
            unresolved: None,
        }
    }

    /// Returns the cell at `position`.
    pub fn cell(&self, position: Position) -> &Cell {
        &self.cells[position.index()]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// The mark that moves next, or the last mover once the game is over.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// True once a win or a full-board draw has been resolved.
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// The winning mark, if a line was completed.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Positions played so far, oldest first.
    pub fn moves(&self) -> &[Position] {
        &self.moves
    }

    /// A move that was applied but not yet resolved.
    pub fn unresolved_move(&self) -> Option<Position> {
        self.unresolved
    }

    /// Returns true if the cell at (`row`, `column`) holds no mark.
    #[instrument(skip(self))]
    pub fn is_cell_free(&self, row: usize, column: usize) -> Result<bool, EngineError> {
        let position = Position::new(row, column)?;
        Ok(self.cell(position).is_free())
    }

    /// Positions that can still be played, in row-major order.
    pub fn free_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.is_free())
            .map(Cell::position)
            .collect()
    }

    /// Returns true if all 9 cells are occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Current status, derived from `is_game_over` and `winner`.
    pub fn status(&self) -> GameStatus {
        match (self.is_game_over, self.winner) {
            (false, _) => GameStatus::InProgress,
            (true, Some(mark)) => GameStatus::Won(mark),
            (true, None) => GameStatus::Draw,
        }
    }

    /// The completed line, once the game has been won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winner
            .and_then(|winner| rules::winning_line(self, winner))
    }

    /// Places the current player's mark at `position`.
    ///
    /// Does not pass the turn or look for a win; call [`Board::resolve`]
    /// next. On error the board is left untouched.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, position: Position) -> Result<(), EngineError> {
        if let Err(e) = MoveContract::pre(self, &position) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.cells[position.index()].owner = Some(self.current_player);
        self.moves.push(position);
        self.unresolved = Some(position);
        debug!(label = position.label(), "Mark placed");

        #[cfg(debug_assertions)]
        {
            let check = MoveContract::post(&before, self);
            debug_assert!(check.is_ok(), "Move postcondition failed: {check:?}");
        }

        Ok(())
    }

    /// Settles the last applied move.
    ///
    /// A completed line makes the mover the winner; a full board is a draw.
    /// In both cases the turn stays with the mover. Otherwise the turn passes
    /// to the opponent. Without an unresolved move this only reports the
    /// current status.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn resolve(&mut self) -> GameStatus {
        let Some(position) = self.unresolved.take() else {
            debug!("Nothing to resolve");
            return self.status();
        };

        let mover = self.current_player;
        if rules::winning_line(self, mover).is_some() {
            self.winner = Some(mover);
            self.is_game_over = true;
            info!(winner = %mover, %position, "Line completed");
        } else if rules::is_full(self) {
            self.is_game_over = true;
            info!("Board full, game drawn");
        } else {
            self.current_player = mover.opponent();
            debug!(next = %self.current_player, "Turn passes");
        }

        #[cfg(debug_assertions)]
        {
            let check = BoardInvariants::check_all(self);
            debug_assert!(check.is_ok(), "Board invariants violated: {check:?}");
        }

        self.status()
    }

    /// Applies and resolves a move in one step.
    #[instrument(skip(self))]
    pub fn play(&mut self, position: Position) -> Result<GameStatus, EngineError> {
        self.apply_move(position)?;
        Ok(self.resolve())
    }

    /// Overwrites a cell without any checks, for corrupting boards in tests.
    #[cfg(test)]
    pub(crate) fn force_owner(&mut self, position: Position, owner: Option<Mark>) {
        self.cells[position.index()].owner = owner;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pos(row: usize, column: usize) -> Position {
        Position::new(row, column).expect("on board")
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::with_first_player(Mark::O);
        assert!(board.cells().iter().all(Cell::is_free));
        assert_eq!(board.current_player(), Mark::O);
        assert!(!board.is_game_over());
        assert_eq!(board.winner(), None);
        assert_eq!(board.status(), GameStatus::InProgress);
        assert_eq!(board.free_positions().len(), 9);
    }

    #[test]
    fn test_cells_know_their_positions() {
        let board = Board::with_first_player(Mark::X);
        for (i, cell) in board.cells().iter().enumerate() {
            assert_eq!(cell.position().index(), i);
        }
    }

    #[test]
    fn test_seeded_creation_is_reproducible() {
        let a = Board::create_with_rng(&mut StdRng::seed_from_u64(7));
        let b = Board::create_with_rng(&mut StdRng::seed_from_u64(7));
        assert_eq!(a.current_player(), b.current_player());
    }

    #[test]
    fn test_is_cell_free_rejects_off_board() {
        let board = Board::with_first_player(Mark::X);
        assert_eq!(
            board.is_cell_free(0, 3),
            Err(EngineError::InvalidPosition { row: 0, column: 3 })
        );
        assert_eq!(board.is_cell_free(2, 2), Ok(true));
    }

    #[test]
    fn test_apply_move_does_not_pass_turn() {
        let mut board = Board::with_first_player(Mark::X);
        board.apply_move(pos(1, 1)).expect("legal");
        assert_eq!(board.current_player(), Mark::X);
        assert_eq!(board.cell(pos(1, 1)).owner(), Some(Mark::X));
        assert_eq!(board.unresolved_move(), Some(pos(1, 1)));
    }

    #[test]
    fn test_resolve_passes_turn() {
        let mut board = Board::with_first_player(Mark::X);
        board.apply_move(pos(1, 1)).expect("legal");
        assert_eq!(board.resolve(), GameStatus::InProgress);
        assert_eq!(board.current_player(), Mark::O);
        assert_eq!(board.unresolved_move(), None);
    }

    #[test]
    fn test_resolve_without_move_is_noop() {
        let mut board = Board::with_first_player(Mark::X);
        let before = board.clone();
        assert_eq!(board.resolve(), GameStatus::InProgress);
        assert_eq!(board, before);
    }

    #[test]
    fn test_second_apply_before_resolve_rejected() {
        let mut board = Board::with_first_player(Mark::X);
        board.apply_move(pos(0, 0)).expect("legal");
        let before = board.clone();
        assert_eq!(
            board.apply_move(pos(0, 1)),
            Err(EngineError::UnresolvedMove(pos(0, 0)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_winning_line_reported() {
        let mut board = Board::with_first_player(Mark::O);
        for p in [pos(0, 2), pos(0, 0), pos(1, 1), pos(0, 1), pos(2, 0)] {
            board.play(p).expect("legal");
        }
        assert_eq!(board.winner(), Some(Mark::O));
        assert_eq!(board.winning_line(), Some([pos(0, 2), pos(1, 1), pos(2, 0)]));
    }
}
