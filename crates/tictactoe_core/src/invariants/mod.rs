//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every
//! transition. The move contract checks them in debug builds; they can
//! also be tested on their own.

mod alternating_turn;
mod derived_outcome;
mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use derived_outcome::DerivedOutcomeInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for triples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

/// Every invariant the engine maintains.
pub type EngineInvariants = (
    AlternatingTurnInvariant,
    MonotonicBoardInvariant,
    DerivedOutcomeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Mark, Position};

    #[test]
    fn test_fresh_engine_satisfies_all() {
        assert!(EngineInvariants::check_all(&GameEngine::new()).is_ok());
    }

    #[test]
    fn test_finished_engine_satisfies_all() {
        let engine = GameEngine::replay(&[0, 4, 1, 5, 2]).unwrap();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_violations_are_collected() {
        let mut engine = GameEngine::new();
        // A mark with no history entry and a stale turn.
        engine.board = engine.board.with(Position::Center, Mark::O);
        engine.turn = Mark::O;

        let violations = EngineInvariants::check_all(&engine).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                AlternatingTurnInvariant::description(),
                MonotonicBoardInvariant::description(),
            ]
        );
    }
}
