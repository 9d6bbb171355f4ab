//! Deterministic reconstruction of past board states.

use super::action::{Move, real_moves};
use super::state::GameState;
use tracing::{debug, instrument};

/// Number of entries in `history` that placed a mark.
pub fn real_move_count(history: &[Move]) -> usize {
    real_moves(history).count()
}

/// Rebuilds the state as it stood right after the `k`-th real move.
///
/// Skips are never replayed onto the board; each mark goes to the player
/// recorded in its entry. The returned history is the prefix of `history`
/// ending at that move, so the result matches the live state at the time.
/// `k` past the end clamps to the last real move; `k = 0` yields a fresh
/// game.
#[instrument(skip(history), fields(history_len = history.len()))]
pub fn replay(history: &[Move], k: usize) -> GameState {
    let end = if k == 0 {
        0
    } else {
        history
            .iter()
            .enumerate()
            .filter(|(_, m)| m.placed().is_some())
            .nth(k - 1)
            .or_else(|| {
                history
                    .iter()
                    .enumerate()
                    .rfind(|(_, m)| m.placed().is_some())
            })
            .map_or(0, |(i, _)| i + 1)
    };
    let state = GameState::rebuild(history[..end].to_vec());
    debug!(k, moves = state.move_count(), "Replayed history prefix");
    state
}
