//! Rendering tests against ratatui's in-memory backend.

use ratatui::{Terminal, backend::TestBackend};
use tictactoe::tui::{App, CELL_UNAVAILABLE, Input, draw};
use tictactoe::{AppConfig, FirstPlayer, GlyphStyle};
use tictactoe_engine::Position;

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn place(app: &mut App, index: usize) {
    app.handle_input(Input::PlaceAt(Position::from_index(index).expect("on board")));
}

#[test]
fn test_empty_board_shows_cell_numbers_and_turn() {
    let app = App::new(AppConfig::default().with_first_player(FirstPlayer::X));
    let screen = render(&app);
    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("Next move: X"));
    for digit in 1..=9 {
        assert!(screen.contains(&digit.to_string()));
    }
}

#[test]
fn test_marks_and_notice_rendered() {
    let mut app = App::new(AppConfig::default().with_first_player(FirstPlayer::O));
    place(&mut app, 0);
    place(&mut app, 0);
    let screen = render(&app);
    assert!(screen.contains(" O "));
    assert!(screen.contains(CELL_UNAVAILABLE));
}

#[test]
fn test_game_over_rendered() {
    let mut app = App::new(
        AppConfig::default()
            .with_first_player(FirstPlayer::X)
            .with_glyphs(GlyphStyle::Ascii),
    );
    for index in [0, 4, 3, 8, 6] {
        place(&mut app, index);
    }
    let screen = render(&app);
    assert!(screen.contains("Game over - X wins!"));
}
