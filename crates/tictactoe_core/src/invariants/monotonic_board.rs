//! Monotonic board invariant: cells never change once set.

use super::super::engine::GameEngine;
use super::super::types::Board;
use super::Invariant;

/// Invariant: the board is exactly the history replayed onto an empty board.
///
/// Every move filled a cell that was empty at the time, and no cell was
/// filled without a move.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for action in engine.history() {
            if !reconstructed.is_empty(action.position) {
                return false;
            }
            reconstructed = reconstructed.with(action.position, action.mark);
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (each filled once, by a recorded move)"
    }
}
