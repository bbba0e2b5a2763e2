//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The engine calls [`evaluate`] after
//! every accepted move; nothing here holds state.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, find_winning_line};

use super::outcome::{Evaluation, Outcome};
use super::types::Board;
use tracing::instrument;

/// Derives the outcome and winning line from a board.
///
/// Wins are checked before fullness, so a board that fills up with a
/// completed line is a win, never a tie.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((mark, line)) = find_winning_line(board) {
        return Evaluation::new(Outcome::Win(mark), Some(line));
    }
    if is_full(board) {
        return Evaluation::new(Outcome::Tie, None);
    }
    Evaluation::new(Outcome::InProgress, None)
}
