//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Mark a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
///
/// Serializes as `null`, `"X"` or `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<Mark>", into = "Option<Mark>")]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if nothing has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Option<Mark>> for Cell {
    fn from(mark: Option<Mark>) -> Self {
        mark.map_or(Cell::Empty, Cell::Occupied)
    }
}

impl From<Cell> for Option<Mark> {
    fn from(cell: Cell) -> Self {
        cell.mark()
    }
}

/// 3x3 tic-tac-toe board, cells in row-major order (0-8).
///
/// Boards are values: placing a mark yields a new board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from raw cells.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at a raw index, `None` when out of range.
    pub fn get_index(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns a copy of this board with `mark` written at `pos`.
    pub fn with(self, pos: Position, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[pos.to_index()] = Cell::Occupied(mark);
        Self { cells }
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with 1-based numbers in empty cells.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// Wrong number of cell symbols.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
    /// Symbol that is not a mark or an empty marker.
    #[display("Invalid cell symbol {:?}", _0)]
    InvalidSymbol(char),
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses `X`, `O` and `.`/`-`/`_` for empty; whitespace, `|` and `/` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '|' | '/'))
            .map(|c| match c {
                'X' | 'x' => Ok(Cell::Occupied(Mark::X)),
                'O' | 'o' => Ok(Cell::Occupied(Mark::O)),
                '.' | '-' | '_' => Ok(Cell::Empty),
                other => Err(ParseBoardError::InvalidSymbol(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let len = symbols.len();
        let cells: [Cell; 9] = symbols
            .try_into()
            .map_err(|_| ParseBoardError::WrongLength(len))?;
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied(), 0);
        assert!(board.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with(Position::Center, Mark::X);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(next.occupied(), 1);
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "XO. / .X. / ..O".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Cell::Occupied(Mark::X));
        assert_eq!(board.get(Position::TopCenter), Cell::Occupied(Mark::O));
        assert_eq!(board.get(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(board.get(Position::BottomRight), Cell::Occupied(Mark::O));
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 2);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::WrongLength(2))
        );
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(ParseBoardError::InvalidSymbol('?'))
        );
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_cell_serializes_as_optional_mark() {
        let board: Board = "XO.......".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"["X","O",null,null,null,null,null,null,null]"#);
    }
}
