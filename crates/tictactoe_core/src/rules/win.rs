//! Win detection logic for tic-tac-toe.

use super::super::outcome::Line;
use super::super::position::Position;
use super::super::types::{Board, Cell, Mark};
use tracing::instrument;

/// The 8 winning lines in detection order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line::new([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line::new([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line::new([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line::new([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line::new([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line::new([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line::new([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Finds the first completed line in [`LINES`] order.
///
/// Returns the mark holding it and the line. On boards with more than one
/// completed line (unreachable in legal play) the earliest line wins.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<(Mark, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let first = board.get(a);
        match first {
            Cell::Occupied(mark) if board.get(b) == first && board.get(c) == first => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}
