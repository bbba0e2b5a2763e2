//! Application state and key handling.

use crossterm::event::KeyCode;
use tictactoe_core::{GameEngine, GameSnapshot, Position};
use tracing::{debug, info, instrument};

use super::input::move_cursor;

/// Front-end state: the engine plus what only the terminal needs.
#[derive(Debug, Clone)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    show_help: bool,
    should_quit: bool,
}

impl App {
    /// Creates an app with a fresh engine and the cursor in the center.
    pub fn new(show_help: bool) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            show_help,
            should_quit: false,
        }
    }

    /// Current engine state.
    pub fn snapshot(&self) -> GameSnapshot {
        self.engine.snapshot()
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the key help footer is shown.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(cursor = %self.cursor))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                info!("Restarting round");
                self.engine.restart();
            }
            KeyCode::Char('h') => {
                self.show_help = !self.show_help;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play(self.cursor);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Tab => {
                if let Some(pos) = self.next_open_cell() {
                    self.cursor = pos;
                }
            }
            _ => debug!(?key, "Unbound key"),
        }
    }

    /// First open cell after the cursor, wrapping around.
    fn next_open_cell(&self) -> Option<Position> {
        let open = self.engine.valid_moves();
        open.iter()
            .copied()
            .find(|pos| *pos > self.cursor)
            .or_else(|| open.first().copied())
    }

    fn play(&mut self, pos: Position) {
        let snapshot = self.engine.apply_move(pos.to_index());
        debug!(status = %snapshot.status_text(), "Board updated");
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Cell, Mark, Outcome};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    #[test]
    fn test_digits_play_cells() {
        let mut app = App::default();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);

        let snapshot = app.snapshot();
        assert_eq!(snapshot.board().get(Position::TopLeft), Cell::Occupied(Mark::X));
        assert_eq!(snapshot.board().get(Position::Center), Cell::Occupied(Mark::O));
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = App::default();
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(
            app.snapshot().board().get(Position::TopLeft),
            Cell::Occupied(Mark::X)
        );
    }

    #[test]
    fn test_occupied_cell_ignored() {
        let mut app = App::default();
        press(&mut app, &[KeyCode::Enter]);
        let before = app.snapshot();
        press(&mut app, &[KeyCode::Char(' ')]);
        assert_eq!(app.snapshot(), before);
    }

    #[test]
    fn test_win_then_restart() {
        let mut app = App::default();
        press(&mut app, &['1', '5', '2', '6', '3'].map(KeyCode::Char));
        assert_eq!(*app.snapshot().outcome(), Outcome::Win(Mark::X));

        press(&mut app, &[KeyCode::Char('r')]);
        let snapshot = app.snapshot();
        assert_eq!(*snapshot.outcome(), Outcome::InProgress);
        assert_eq!(*snapshot.score().wins_x(), 1);
        assert_eq!(snapshot.board().occupied(), 0);
    }

    #[test]
    fn test_tab_skips_filled_cells() {
        let mut app = App::default();
        press(&mut app, &['5', '6', '9'].map(KeyCode::Char));
        assert_eq!(app.cursor(), Position::BottomRight);

        // Wraps past the end of the board.
        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.cursor(), Position::TopLeft);

        press(&mut app, &[KeyCode::Char('4'), KeyCode::Tab]);
        assert_eq!(app.cursor(), Position::BottomLeft);
    }

    #[test]
    fn test_tab_stays_put_after_round() {
        let mut app = App::default();
        press(&mut app, &['1', '5', '2', '6', '3'].map(KeyCode::Char));
        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.cursor(), Position::TopRight);
    }

    #[test]
    fn test_quit_and_help_toggle() {
        let mut app = App::new(false);
        press(&mut app, &[KeyCode::Char('h')]);
        assert!(app.show_help());
        assert!(!app.should_quit());
        press(&mut app, &[KeyCode::Esc]);
        assert!(app.should_quit());
    }
}
