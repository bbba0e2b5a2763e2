//! Read-only view of the engine handed to the rendering layer.

use super::outcome::{Line, Outcome};
use super::position::Position;
use super::score::Score;
use super::types::{Board, Mark};
use derive_getters::Getters;
use serde::{Serialize, Serializer};

/// Full state tuple: board, turn, outcome, winning line and score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters)]
pub struct GameSnapshot {
    /// Current board.
    board: Board,
    /// Mark that moves next.
    turn: Mark,
    /// Outcome derived from the board.
    outcome: Outcome,
    /// Winning line, serialized as `[]` when there is none.
    #[serde(serialize_with = "serialize_line")]
    winning_line: Option<Line>,
    /// Running score.
    score: Score,
}

fn serialize_line<S: Serializer>(line: &Option<Line>, serializer: S) -> Result<S::Ok, S::Error> {
    match line {
        Some(line) => line.serialize(serializer),
        None => Vec::<usize>::new().serialize(serializer),
    }
}

impl GameSnapshot {
    pub(crate) fn new(
        board: Board,
        turn: Mark,
        outcome: Outcome,
        winning_line: Option<Line>,
        score: Score,
    ) -> Self {
        Self {
            board,
            turn,
            outcome,
            winning_line,
            score,
        }
    }

    /// Status line shown above the board.
    pub fn status_text(&self) -> String {
        match self.outcome {
            Outcome::InProgress => format!("Next: {}", self.turn),
            Outcome::Win(mark) => format!("Winner: {}", mark),
            Outcome::Tie => "It's a tie!".to_string(),
        }
    }

    /// True when no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Whether `pos` belongs to the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(pos))
    }

    /// Whether a move at `pos` would be accepted.
    pub fn is_playable(&self, pos: Position) -> bool {
        !self.is_terminal() && self.board.is_empty(pos)
    }
}
