//! Running score across rounds.

use super::outcome::Outcome;
use super::types::Mark;
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// Win and tie counters for the lifetime of the engine.
///
/// Counters only grow; restarting a round leaves them alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Getters)]
pub struct Score {
    /// Rounds won by X.
    wins_x: u32,
    /// Rounds won by O.
    wins_o: u32,
    /// Rounds ending in a tie.
    ties: u32,
}

impl Score {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.wins_x,
            Mark::O => self.wins_o,
        }
    }

    /// Total completed rounds.
    pub fn rounds(&self) -> u32 {
        self.wins_x
            .saturating_add(self.wins_o)
            .saturating_add(self.ties)
    }

    /// Counts a finished round. Returns `false` for `InProgress`.
    #[instrument(skip(self))]
    pub(crate) fn record(&mut self, outcome: Outcome) -> bool {
        let counter = match outcome {
            Outcome::Win(Mark::X) => &mut self.wins_x,
            Outcome::Win(Mark::O) => &mut self.wins_o,
            Outcome::Tie => &mut self.ties,
            Outcome::InProgress => return false,
        };
        *counter = counter.saturating_add(1);
        debug!(wins_x = self.wins_x, wins_o = self.wins_o, ties = self.ties, "Score updated");
        true
    }
}
