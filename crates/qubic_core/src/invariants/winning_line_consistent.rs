//! Status `win` and the winning line agree.

use super::Invariant;
use crate::{Cell, GameState, GameStatus};

/// Invariant: a winning line is present exactly when the status is `win`,
/// and all four of its cells hold the line's player.
pub struct WinningLineConsistentInvariant;

impl Invariant<GameState> for WinningLineConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        match (state.status(), state.winning_line()) {
            (GameStatus::Win, Some(line)) => line
                .positions
                .iter()
                .all(|p| state.board().get(*p) == Cell::Occupied(line.player)),
            (GameStatus::Win, None) | (_, Some(_)) => false,
            (_, None) => true,
        }
    }

    fn description() -> &'static str {
        "Winning line is present iff the game is won, and is owned by its player"
    }
}
