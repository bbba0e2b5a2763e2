//! Fullness check for tie detection.

use super::super::types::Board;
use tracing::instrument;

/// Checks if no cell is empty.
///
/// A full board with no winner is a tie.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}
