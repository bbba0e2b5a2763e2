//! Tic-tac-toe game engine.
//!
//! Holds a single round of tic-tac-toe plus a score tally that survives
//! restarts. Moves go in as cell indices (0-8, row-major); a
//! [`GameSnapshot`] comes out for whatever layer renders the game.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEngine, Mark, Outcome};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 4, 1, 5, 2] {
//!     engine.apply_move(index);
//! }
//!
//! let snapshot = engine.snapshot();
//! assert_eq!(*snapshot.outcome(), Outcome::Win(Mark::X));
//! assert_eq!(*snapshot.score().wins_x(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod invariants;
mod outcome;
mod position;
mod rules;
mod score;
mod snapshot;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, LegalMove, MoveContract, PlayersTurn, RoundInProgress, SquareIsEmpty};
pub use engine::GameEngine;
pub use invariants::{
    AlternatingTurnInvariant, DerivedOutcomeInvariant, EngineInvariants, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
pub use outcome::{Evaluation, Line, Outcome};
pub use position::Position;
pub use rules::{LINES, evaluate, find_winning_line, is_full};
pub use score::Score;
pub use snapshot::GameSnapshot;
pub use types::{Board, Cell, Mark, ParseBoardError};
