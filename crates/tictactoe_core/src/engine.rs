//! The game engine: one owned unit of board, turn, outcome and score.
//!
//! Every mutation goes through `&mut self`. A move is applied to a copy of
//! the engine, evaluated and checked there, and only then committed, so
//! callers never observe a board whose outcome has not been derived yet.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract, RoundInProgress};
use super::outcome::{Line, Outcome};
use super::position::Position;
use super::rules;
use super::score::Score;
use super::snapshot::GameSnapshot;
use super::types::{Board, Mark};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) turn: Mark,
    pub(crate) outcome: Outcome,
    pub(crate) winning_line: Option<Line>,
    pub(crate) score: Score,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates an engine with an empty board, X to move and a zero score.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            outcome: Outcome::InProgress,
            winning_line: None,
            score: Score::new(),
            history: Vec::new(),
        }
    }

    /// Builds a fresh engine and applies `indices` in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] hit.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        let mut engine = Self::new();
        for &index in indices {
            engine.try_apply_move(index)?;
        }
        Ok(engine)
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the outcome of the current round.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the winning line, if the round was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Returns the running score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Returns the moves of the current round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Positions a move would be accepted at. Empty once the round is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.outcome.is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Copies out the full state for display.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(
            self.board,
            self.turn,
            self.outcome,
            self.winning_line,
            self.score,
        )
    }

    /// Places the current mark at `index`, ignoring illegal moves.
    ///
    /// An illegal move leaves the engine untouched; the returned snapshot
    /// then equals the one before the call.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> GameSnapshot {
        match self.try_apply_move(index) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                debug!(error = %e, index, "Ignoring illegal move");
                self.snapshot()
            }
        }
    }

    /// Places the current mark at `index`.
    ///
    /// Writes the mark, flips the turn, derives the outcome and scores a
    /// finished round as one step.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the round is decided
    /// - [`MoveError::OutOfRange`] if `index` is not 0-8
    /// - [`MoveError::SquareOccupied`] if the cell holds a mark
    /// - [`MoveError::InvariantViolation`] if a postcondition fails (debug builds)
    ///
    /// The engine is unchanged on error.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn try_apply_move(&mut self, index: usize) -> Result<GameSnapshot, MoveError> {
        RoundInProgress::check(self)?;
        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        let action = Move::new(self.turn, position);

        MoveContract::pre(self, &action)?;

        let mut next = self.clone();
        next.board = self.board.with(position, action.mark);
        next.history.push(action);
        next.turn = action.mark.opponent();
        next.settle();

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(%action, outcome = %next.outcome, "Move applied");
        *self = next;
        Ok(self.snapshot())
    }

    /// Re-derives the outcome from the current board.
    ///
    /// Scores only on a transition out of `InProgress`, so calling this on
    /// a finished round changes nothing.
    #[instrument(skip(self))]
    pub fn reevaluate(&mut self) -> GameSnapshot {
        self.settle();
        self.snapshot()
    }

    /// Starts a new round. The score is kept; an unfinished round is
    /// dropped without scoring.
    #[instrument(skip(self), fields(outcome = %self.outcome, moves = self.history.len()))]
    pub fn restart(&mut self) -> GameSnapshot {
        if !self.outcome.is_terminal() && !self.history.is_empty() {
            info!("Round forfeited by restart");
        }
        self.board = Board::new();
        self.turn = Mark::X;
        self.outcome = Outcome::InProgress;
        self.winning_line = None;
        self.history.clear();
        self.snapshot()
    }

    fn settle(&mut self) {
        let was_in_progress = !self.outcome.is_terminal();
        let eval = rules::evaluate(&self.board);
        self.outcome = eval.outcome;
        self.winning_line = eval.winning_line;

        if was_in_progress && self.score.record(self.outcome) {
            info!(
                outcome = %self.outcome,
                line = ?self.winning_line.map(|l| l.indices()),
                board = %self.board,
                "Round finished"
            );
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
