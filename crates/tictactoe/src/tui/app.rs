//! Application state and logic.

use super::input::{Input, move_cursor};
use crate::config::{AppConfig, GlyphStyle};
use tictactoe_engine::{Board, GameStatus, Position};
use tracing::{debug, info, instrument, warn};

/// Shown when the selected cell already holds a mark.
pub const CELL_UNAVAILABLE: &str = "That cell is unavailable!";

/// Main application state.
///
/// Owns the single live [`Board`]. Restarting replaces it with a fresh one.
#[derive(Debug)]
pub struct App {
    board: Board,
    cursor: Position,
    notice: Option<String>,
    config: AppConfig,
    should_quit: bool,
}

impl App {
    /// Creates the app with a fresh board.
    #[instrument(skip(config))]
    pub fn new(config: AppConfig) -> Self {
        let board = config.first_player().new_board();
        Self::with_board(config, board)
    }

    /// Creates the app around an existing board.
    pub fn with_board(config: AppConfig, board: Board) -> Self {
        Self {
            board,
            cursor: Self::home(),
            notice: None,
            config,
            should_quit: false,
        }
    }

    fn home() -> Position {
        Position::ALL[4]
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Mark symbols in use.
    pub fn glyphs(&self) -> GlyphStyle {
        *self.config.glyphs()
    }

    /// True once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Text for the status box.
    ///
    /// A pending notice (such as an unavailable cell) takes precedence over
    /// the game status.
    pub fn status_line(&self) -> String {
        match &self.notice {
            Some(notice) => notice.clone(),
            None => status_text(&self.board, self.glyphs()),
        }
    }

    /// Applies one input.
    ///
    /// Once the game is over only restart and quit are honoured.
    #[instrument(skip(self))]
    pub fn handle_input(&mut self, input: Input) {
        match input {
            Input::Quit => {
                info!("Player quit");
                self.should_quit = true;
            }
            Input::Restart => self.restart(),
            _ if self.board.is_game_over() => {
                debug!("Game over, move input disabled");
            }
            Input::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
                self.notice = None;
            }
            Input::PlaceAtCursor => self.select(self.cursor),
            Input::PlaceAt(position) => {
                self.cursor = position;
                self.select(position);
            }
        }
    }

    /// Tries to play at `position`: check free, apply, resolve.
    #[instrument(skip(self), fields(player = %self.board.current_player()))]
    pub fn select(&mut self, position: Position) {
        if self.board.is_game_over() {
            debug!("Ignoring move after game over");
            return;
        }

        match self.board.is_cell_free(position.row(), position.column()) {
            Ok(true) => {}
            Ok(false) => {
                debug!(label = position.label(), "Cell unavailable");
                self.notice = Some(CELL_UNAVAILABLE.to_string());
                return;
            }
            Err(e) => {
                warn!(error = %e, "Rejected position");
                self.notice = Some(e.to_string());
                return;
            }
        }

        if let Err(e) = self.board.apply_move(position) {
            warn!(error = %e, "Move failed");
            self.notice = Some(e.to_string());
            return;
        }

        let status = self.board.resolve();
        self.notice = None;
        info!(label = position.label(), %status, "Move resolved");
    }

    /// Restarts the game with a new board.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!(previous = %self.board.status(), "Restarting game");
        self.board = self.config.first_player().new_board();
        self.cursor = Self::home();
        self.notice = None;
    }
}

/// Status text derived from (`is_game_over`, `current_player`, `winner`).
pub fn status_text(board: &Board, glyphs: GlyphStyle) -> String {
    match board.status() {
        GameStatus::InProgress => {
            format!("Next move: {}", glyphs.glyph(board.current_player()))
        }
        GameStatus::Won(winner) => format!("Game over - {} wins!", glyphs.glyph(winner)),
        GameStatus::Draw => "Game over - draw!".to_string(),
    }
}
