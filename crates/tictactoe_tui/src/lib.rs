//! Terminal front-end for the tic-tac-toe engine.
//!
//! Renders the engine's [`GameSnapshot`](tictactoe_core::GameSnapshot) with
//! ratatui and feeds keyboard input back as moves. A headless `replay`
//! mode applies a move list and prints the final snapshot as JSON.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod headless;
mod input;
mod logging;
mod terminal;
mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
pub use headless::replay_to_json;
pub use input::move_cursor;
pub use logging::init_logging;
pub use terminal::run_tui;
pub use ui::draw;
