//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use tictactoe_engine::Position;

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Move the cursor.
    MoveCursor(Direction),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Place a mark at a numbered cell.
    PlaceAt(Position),
    /// Throw the board away and start over.
    Restart,
    /// Leave the game.
    Quit,
}

/// Maps a key to an input, if the key means anything.
///
/// Digits `1`-`9` address cells in row-major order, like a phone keypad
/// read top to bottom.
pub fn map_key(code: KeyCode) -> Option<Input> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Input::MoveCursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Input::MoveCursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Input::MoveCursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Input::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Input::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Input::PlaceAt),
        KeyCode::Char('r') => Some(Input::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        _ => None,
    }
}

/// Moves the cursor one cell, staying put at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, column)),
        Direction::Down => Some((row + 1, column)),
        Direction::Left => column.checked_sub(1).map(|c| (row, c)),
        Direction::Right => Some((row, column + 1)),
    };

    target
        .and_then(|(r, c)| Position::new(r, c).ok())
        .unwrap_or(cursor)
}
