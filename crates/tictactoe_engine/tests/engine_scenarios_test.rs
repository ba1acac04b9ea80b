//! End-to-end tests for the rules engine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tictactoe_engine::rules::{WINNING_LINES, check_winner};
use tictactoe_engine::{Board, EngineError, GameStatus, Mark, Position};

fn pos(row: usize, column: usize) -> Position {
    Position::new(row, column).expect("on board")
}

/// Runs the check-free / apply / resolve protocol for each position.
fn play_all(board: &mut Board, moves: &[(usize, usize)]) {
    for &(row, column) in moves {
        assert_eq!(board.is_cell_free(row, column), Ok(true));
        board.apply_move(pos(row, column)).expect("legal move");
        board.resolve();
    }
}

fn occupied(board: &Board) -> usize {
    board.cells().iter().filter(|cell| !cell.is_free()).count()
}

#[test]
fn test_new_board_properties() {
    let mut rng = StdRng::seed_from_u64(0x7ac7_0e);
    let trials = 10_000;
    let mut x_first = 0;

    for _ in 0..trials {
        let board = Board::create_with_rng(&mut rng);
        assert!(board.cells().iter().all(|cell| cell.is_free()));
        assert!(!board.is_game_over());
        assert_eq!(board.winner(), None);
        assert!(board.moves().is_empty());
        if board.current_player() == Mark::X {
            x_first += 1;
        }
    }

    // Ten standard deviations either side of 5000.
    assert!(
        (4_500..=5_500).contains(&x_first),
        "X started {x_first} of {trials} games"
    );
}

#[test]
fn test_thread_rng_board_is_fresh() {
    let board = Board::create();
    assert_eq!(board.free_positions().len(), 9);
    assert_eq!(board.status(), GameStatus::InProgress);
}

#[test]
fn test_random_games_respect_rules() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let mut board = Board::create_with_rng(&mut rng);

        while !board.is_game_over() {
            let before = board.clone();
            let position = *board
                .free_positions()
                .choose(&mut rng)
                .expect("unfinished board has a free cell");

            board.apply_move(position).expect("free cell");
            assert_eq!(occupied(&board), occupied(&before) + 1);
            for (old, new) in before.cells().iter().zip(board.cells()) {
                if let Some(mark) = old.owner() {
                    assert_eq!(new.owner(), Some(mark));
                }
            }

            let status = board.resolve();
            let line_done = check_winner(&board).is_some();
            assert_eq!(board.is_game_over(), line_done || board.is_full());
            assert_eq!(status.is_terminal(), board.is_game_over());

            if board.is_game_over() {
                assert_eq!(board.current_player(), before.current_player());
            } else {
                assert_eq!(board.current_player(), before.current_player().opponent());
            }
        }

        let frozen = board.clone();
        for position in Position::ALL {
            assert_eq!(board.apply_move(position), Err(EngineError::GameOver));
        }
        assert_eq!(board.resolve(), frozen.status());
        assert_eq!(board, frozen);
    }
}

#[test]
fn test_three_in_first_column_wins() {
    let mut board = Board::with_first_player(Mark::X);
    // X: (0,0) (1,0) (2,0); O fills in elsewhere.
    play_all(&mut board, &[(0, 0), (1, 1), (1, 0), (2, 2), (2, 0)]);

    assert!(board.is_game_over());
    assert_eq!(board.winner(), Some(Mark::X));
    assert_eq!(board.status(), GameStatus::Won(Mark::X));
    assert_eq!(board.current_player(), Mark::X);
    assert_eq!(board.winning_line(), Some(WINNING_LINES[3]));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut board = Board::with_first_player(Mark::O);
    // O X O
    // O X X
    // X O O
    play_all(
        &mut board,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );

    assert!(board.is_game_over());
    assert_eq!(board.winner(), None);
    assert_eq!(board.status(), GameStatus::Draw);
    assert_eq!(board.current_player(), Mark::O);
}

#[test]
fn test_occupied_cell_leaves_board_unchanged() {
    let mut board = Board::with_first_player(Mark::X);
    play_all(&mut board, &[(1, 1), (0, 0)]);

    let before = board.clone();
    assert_eq!(board.is_cell_free(1, 1), Ok(false));
    assert_eq!(
        board.apply_move(pos(1, 1)),
        Err(EngineError::CellOccupied(pos(1, 1)))
    );
    assert_eq!(board, before);
    assert_eq!(board.current_player(), Mark::X);
}

#[test]
fn test_diagonal_win() {
    for first in [Mark::X, Mark::O] {
        let mut board = Board::with_first_player(first);
        play_all(&mut board, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
        assert_eq!(board.winner(), Some(first));
        assert!(board.is_game_over());
    }
}

#[test]
fn test_win_on_last_cell_is_not_a_draw() {
    let mut board = Board::with_first_player(Mark::X);
    // X O X
    // O X O
    // O X X  <- ninth move completes the main diagonal
    play_all(
        &mut board,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );
    assert!(board.is_full());
    assert_eq!(board.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_restart_yields_fresh_board() {
    let mut board = Board::with_first_player(Mark::X);
    play_all(&mut board, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert!(board.is_game_over());

    board = Board::create();
    assert!(board.cells().iter().all(|cell| cell.is_free()));
    assert!(!board.is_game_over());
    assert_eq!(board.winner(), None);
    assert!(board.moves().is_empty());
}

#[test]
fn test_restart_after_draw_yields_fresh_board() {
    let mut board = Board::with_first_player(Mark::X);
    play_all(
        &mut board,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );
    assert_eq!(board.status(), GameStatus::Draw);

    board = Board::create_with_rng(&mut StdRng::seed_from_u64(3));
    assert!(board.cells().iter().all(|cell| cell.is_free()));
    assert_eq!(board.status(), GameStatus::InProgress);
    assert!(board.moves().is_empty());
    assert_eq!(board.free_positions().len(), 9);
    assert_eq!(board.is_cell_free(0, 0), Ok(true));
}

#[test]
fn test_invalid_coordinates() {
    let board = Board::with_first_player(Mark::X);
    assert_eq!(
        board.is_cell_free(3, 3),
        Err(EngineError::InvalidPosition { row: 3, column: 3 })
    );
    assert_eq!(
        Position::try_from((0, 9)),
        Err(EngineError::InvalidPosition { row: 0, column: 9 })
    );
}
