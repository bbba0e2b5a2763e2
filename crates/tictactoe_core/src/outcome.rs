//! Round outcomes and winning lines.

use super::position::Position;
use super::types::Mark;
use serde::{Serialize, Serializer};

/// State of the current round, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Outcome {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// A mark completed a line.
    Win(Mark),
    /// Board full without a completed line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Tie => None,
        }
    }

    /// True for `Win` and `Tie`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns true if the round was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "Player {} wins", mark),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Three positions that win when filled by one mark.
///
/// Serializes as its three board indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line([Position; 3]);

impl Line {
    /// Creates a line from three positions.
    pub const fn new(positions: [Position; 3]) -> Self {
        Self(positions)
    }

    /// The positions in this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The board indices in this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Checks whether `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

impl Serialize for Line {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.indices().serialize(serializer)
    }
}

/// Result of running the detector over a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Evaluation {
    /// Derived outcome.
    pub outcome: Outcome,
    /// Line that produced a win, `None` unless `outcome` is a win.
    pub winning_line: Option<Line>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_helpers() {
        assert_eq!(Outcome::Win(Mark::O).winner(), Some(Mark::O));
        assert_eq!(Outcome::Tie.winner(), None);
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Tie.is_terminal());
        assert!(Outcome::Win(Mark::X).is_terminal());
        assert!(Outcome::Tie.is_tie());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Win(Mark::X).to_string(), "Player X wins");
        assert_eq!(Outcome::Tie.to_string(), "Tie");
    }

    #[test]
    fn test_line_indices() {
        let line = Line::new([Position::TopRight, Position::Center, Position::BottomLeft]);
        assert_eq!(line.indices(), [2, 4, 6]);
        assert!(line.contains(Position::Center));
        assert!(!line.contains(Position::TopLeft));
    }
}
