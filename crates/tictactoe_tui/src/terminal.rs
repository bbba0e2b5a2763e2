//! Terminal setup and the blocking event loop.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use super::app::App;
use super::config::TuiConfig;
use super::ui;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal UI until the user quits.
///
/// Expects logging to be set up already; see
/// [`init_logging`](crate::init_logging).
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = match setup() {
        Ok(terminal) => terminal,
        Err(err) => {
            if let Err(raw_err) = disable_raw_mode() {
                error!(error = ?raw_err, "Failed to disable raw mode");
            }
            return Err(err);
        }
    };

    let mut app = App::new(*config.show_help());
    let res = run_loop(&mut terminal, &mut app);
    let restored = restore(&mut terminal);

    info!(score = ?app.snapshot().score(), "Exiting");
    finish(res, restored)
}

fn setup() -> Result<Term> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

#[instrument(skip_all)]
fn run_loop(terminal: &mut Term, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }
    }
    Ok(())
}

/// Logs both results; the loop error takes precedence over a restore error.
fn finish(res: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    if let Err(err) = &restored {
        error!(error = ?err, "Failed to restore terminal");
    }
    res.and(restored)
}

fn restore(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
