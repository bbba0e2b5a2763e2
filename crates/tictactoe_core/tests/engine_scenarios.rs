//! End-to-end rounds through the public engine interface.

use tictactoe_core::{Board, GameEngine, Mark, MoveError, Outcome};

fn play(engine: &mut GameEngine, indices: &[usize]) {
    for &index in indices {
        engine.apply_move(index);
    }
}

#[test]
fn test_x_wins_top_row() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 4, 1, 5, 2]);

    let snapshot = engine.snapshot();
    assert_eq!(*snapshot.outcome(), Outcome::Win(Mark::X));
    assert_eq!(snapshot.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
    assert_eq!(*snapshot.score().wins_x(), 1);
    assert_eq!(*snapshot.score().wins_o(), 0);
    assert_eq!(*snapshot.score().ties(), 0);
}

#[test]
fn test_column_completed_before_board_fills() {
    // O completes 1-4-7 on the 8th move; the 9th move is refused.
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 2, 4, 3, 6, 5, 7]);

    assert_eq!(engine.outcome(), Outcome::Win(Mark::O));
    assert_eq!(engine.winning_line().map(|l| l.indices()), Some([1, 4, 7]));

    let before = engine.snapshot();
    assert_eq!(
        engine.try_apply_move(8),
        Err(MoveError::GameOver(Outcome::Win(Mark::O)))
    );
    assert_eq!(engine.apply_move(8), before);
    assert_eq!(*engine.score().wins_o(), 1);
}

#[test]
fn test_full_board_tie() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 4, 8, 1, 7, 6, 2, 5, 3]);

    let snapshot = engine.snapshot();
    assert_eq!(*snapshot.outcome(), Outcome::Tie);
    assert_eq!(*snapshot.winning_line(), None);
    assert_eq!(*snapshot.score().ties(), 1);
    assert_eq!(snapshot.score().rounds(), 1);
}

#[test]
fn test_restart_keeps_score() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 4, 1, 5, 2]);

    let snapshot = engine.restart();
    assert_eq!(*snapshot.board(), Board::new());
    assert_eq!(*snapshot.turn(), Mark::X);
    assert_eq!(*snapshot.outcome(), Outcome::InProgress);
    assert_eq!(*snapshot.winning_line(), None);
    assert_eq!(*snapshot.score().wins_x(), 1);
}

#[test]
fn test_score_accumulates_across_rounds() {
    let mut engine = GameEngine::new();

    play(&mut engine, &[0, 4, 1, 5, 2]);
    engine.restart();
    play(&mut engine, &[0, 3, 1, 4, 8, 5]);
    engine.restart();
    play(&mut engine, &[0, 4, 8, 1, 7, 6, 2, 5, 3]);
    engine.restart();
    // Forfeited round is not scored.
    play(&mut engine, &[0, 4]);
    engine.restart();

    let score = *engine.score();
    assert_eq!(*score.wins_x(), 1);
    assert_eq!(*score.wins_o(), 1);
    assert_eq!(*score.ties(), 1);
    assert_eq!(score.rounds(), 3);
}

#[test]
fn test_replay_stops_at_first_error() {
    assert_eq!(
        GameEngine::replay(&[4, 4]).unwrap_err(),
        MoveError::SquareOccupied(tictactoe_core::Position::Center)
    );
    assert_eq!(GameEngine::replay(&[10]).unwrap_err(), MoveError::OutOfRange(10));
}
