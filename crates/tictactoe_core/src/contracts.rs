//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: `{P} action {Q}`. The
//! precondition decides whether a move is legal; the postcondition checks
//! that applying it kept the engine consistent.

use super::action::{Move, MoveError};
use super::engine::GameEngine;
use super::invariants::{EngineInvariants, InvariantSet};
use tracing::{error, instrument};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the round has no terminal outcome yet.
pub struct RoundInProgress;

impl RoundInProgress {
    /// Rejects moves on a decided round.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), MoveError> {
        let outcome = engine.outcome();
        if outcome.is_terminal() {
            Err(MoveError::GameOver(outcome))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto occupied cells.
    #[instrument(skip(engine))]
    pub fn check(action: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        if engine.board().is_empty(action.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(action.position))
        }
    }
}

/// Precondition: the move is for the mark whose turn it is.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves for the wrong mark.
    #[instrument(skip(engine))]
    pub fn check(action: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        if action.mark == engine.turn() {
            Ok(())
        } else {
            Err(MoveError::WrongTurn(action.mark))
        }
    }
}

/// Composite precondition for a legal move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, game-over first.
    #[instrument(skip(engine))]
    pub fn check(action: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        RoundInProgress::check(engine)?;
        SquareIsEmpty::check(action, engine)?;
        PlayersTurn::check(action, engine)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions: round in progress, cell empty, right mark.
///
/// Postconditions: [`EngineInvariants`] hold, exactly one cell was added,
/// and the score grew by one exactly when the round just ended.
pub struct MoveContract;

impl Contract<GameEngine, Move> for MoveContract {
    fn pre(engine: &GameEngine, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, engine)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), MoveError> {
        let mut failures: Vec<String> = match EngineInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations.into_iter().map(|v| v.description).collect(),
        };

        if after.board().occupied() != before.board().occupied() + 1 {
            failures.push("Exactly one cell is filled per move".to_string());
        }

        let finished = u32::from(after.outcome().is_terminal());
        let expected_rounds = before.score().rounds().saturating_add(finished);
        if after.score().rounds() != expected_rounds {
            failures.push("Score counts each finished round once".to_string());
        }

        if failures.is_empty() {
            Ok(())
        } else {
            let descriptions = failures.join("; ");
            error!(%descriptions, "Move postcondition failed");
            Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions
            )))
        }
    }
}
