//! Command-line interface for the tic-tac-toe front-end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::Position;

/// Tic Tac Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with a running score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The command to run, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply moves without a UI and print the final state as JSON
    Replay {
        /// Cells as indices (0-8, row-major) or names such as `center`,
        /// space or comma separated
        #[arg(required = true, value_delimiter = ',', value_parser = parse_position)]
        moves: Vec<Position>,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },
}

fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("'{}' is not a cell (0-8 or a name like top-left)", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.command(), Command::Play);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_replay_moves() {
        let cli = Cli::try_parse_from(["tictactoe", "replay", "0,4", "1", "--compact"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Replay {
                moves: vec![Position::TopLeft, Position::Center, Position::TopCenter],
                compact: true,
            }
        );
    }

    #[test]
    fn test_replay_accepts_cell_names() {
        let cli = Cli::try_parse_from(["tictactoe", "replay", "center,top-left", "8"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Replay {
                moves: vec![Position::Center, Position::TopLeft, Position::BottomRight],
                compact: false,
            }
        );
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["tictactoe", "play", "--config", "game.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["tictactoe", "replay"]).is_err());
        assert!(Cli::try_parse_from(["tictactoe", "replay", "x"]).is_err());
        assert!(Cli::try_parse_from(["tictactoe", "replay", "9"]).is_err());
    }
}
