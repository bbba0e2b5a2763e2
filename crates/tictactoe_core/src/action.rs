//! First-class move and error types.
//!
//! A move records which mark went where. The engine keeps the current
//! round's moves so invariants can be checked against the board.

use super::outcome::Outcome;
use super::position::Position;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The round already has a terminal outcome.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),

    /// Index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The target cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The move was attempted for the wrong mark.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Mark),

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
