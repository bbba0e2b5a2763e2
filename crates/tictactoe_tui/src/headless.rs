//! Headless replay: apply moves, report the final state.

use anyhow::{Context, Result};
use tictactoe_core::{GameEngine, Position};
use tracing::{info, instrument, warn};

/// Applies `moves` to a fresh engine and returns the final snapshot as JSON.
///
/// Illegal moves are skipped with a warning, as the UI would ignore them.
#[instrument]
pub fn replay_to_json(moves: &[Position], compact: bool) -> Result<String> {
    let mut engine = GameEngine::new();
    for &pos in moves {
        if let Err(e) = engine.try_apply_move(pos.to_index()) {
            warn!(%pos, error = %e, "Skipping illegal move");
        }
    }

    let snapshot = engine.snapshot();
    info!(status = %snapshot.status_text(), "Replay finished");

    let json = if compact {
        serde_json::to_string(&snapshot)
    } else {
        serde_json::to_string_pretty(&snapshot)
    };
    json.context("Failed to serialize snapshot")
}
