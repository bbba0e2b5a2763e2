//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// Moves the cursor one cell for an arrow key. Stops at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Left => col.checked_sub(1).map(|col| (row, col)),
        KeyCode::Right => Some((row, col + 1)),
        KeyCode::Up => row.checked_sub(1).map(|row| (row, col)),
        KeyCode::Down => Some((row + 1, col)),
        _ => None,
    };

    target
        .and_then(|(row, col)| Position::from_row_col(row, col))
        .unwrap_or(cursor)
}
