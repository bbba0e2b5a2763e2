//! Derived outcome invariant: stored outcome matches the detector.

use super::super::engine::GameEngine;
use super::super::rules::evaluate;
use super::Invariant;

/// Invariant: outcome and winning line equal [`evaluate`] on the board.
pub struct DerivedOutcomeInvariant;

impl Invariant<GameEngine> for DerivedOutcomeInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let eval = evaluate(engine.board());
        eval.outcome == engine.outcome() && eval.winning_line == engine.winning_line()
    }

    fn description() -> &'static str {
        "Outcome and winning line are derived from the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Outcome;

    #[test]
    fn test_won_game_holds() {
        let engine = GameEngine::replay(&[0, 4, 1, 5, 2]).unwrap();
        assert!(DerivedOutcomeInvariant::holds(&engine));
    }

    #[test]
    fn test_stale_outcome_violates() {
        let mut engine = GameEngine::replay(&[0, 4, 1, 5, 2]).unwrap();
        engine.outcome = Outcome::InProgress;
        assert!(!DerivedOutcomeInvariant::holds(&engine));
    }

    #[test]
    fn test_missing_line_violates() {
        let mut engine = GameEngine::replay(&[0, 4, 1, 5, 2]).unwrap();
        engine.winning_line = None;
        assert!(!DerivedOutcomeInvariant::holds(&engine));
    }
}
