//! Tic Tac Toe - terminal front-end.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{Cli, Command, TuiConfig, init_logging, replay_to_json, run_tui};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?;
    let command = cli.command();
    init_logging(&command, &config)?;

    match command {
        Command::Play => run_tui(&config),
        Command::Replay { moves, compact } => {
            println!("{}", replay_to_json(&moves, compact)?);
            Ok(())
        }
    }
}
