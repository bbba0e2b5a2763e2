//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::engine::GameEngine;
use super::super::types::Mark;
use super::Invariant;

/// Invariant: marks alternate and X moves first.
///
/// The turn is X after an even number of moves and O after an odd number,
/// terminal rounds included. The board holds as many X marks as O marks,
/// or one more.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        let (xs, os) = (engine.board().count(Mark::X), engine.board().count(Mark::O));
        if xs != os && xs != os + 1 {
            return false;
        }

        if history.first().is_some_and(|first| first.mark != Mark::X) {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        let expected_turn = if history.len() % 2 == 0 { Mark::X } else { Mark::O };
        engine.turn() == expected_turn
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let engine = GameEngine::replay(&[0, 4, 2, 6, 8]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.turn(), Mark::O);
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut engine = GameEngine::new();
        engine.history = vec![
            Move::new(Mark::X, Position::TopLeft),
            Move::new(Mark::X, Position::Center),
        ];
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_unbalanced_board_violates() {
        let mut engine = GameEngine::new();
        engine.board = engine
            .board
            .with(Position::TopLeft, Mark::X)
            .with(Position::Center, Mark::X);
        assert!(!AlternatingTurnInvariant::holds(&engine));

        engine.board = engine.board.with(Position::BottomRight, Mark::O);
        engine.history = vec![
            Move::new(Mark::X, Position::TopLeft),
            Move::new(Mark::O, Position::BottomRight),
            Move::new(Mark::X, Position::Center),
        ];
        engine.turn = Mark::O;
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_o_first_violates() {
        let mut engine = GameEngine::new();
        engine.history = vec![Move::new(Mark::O, Position::Center)];
        engine.turn = Mark::X;
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
