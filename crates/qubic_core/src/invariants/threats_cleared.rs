//! Decided games carry no threats.

use super::Invariant;
use crate::GameState;

/// Invariant: once the status leaves `playing`, the threat set is empty.
pub struct ThreatsClearedInvariant;

impl Invariant<GameState> for ThreatsClearedInvariant {
    fn holds(state: &GameState) -> bool {
        !state.status().is_terminal() || state.threats().is_empty()
    }

    fn description() -> &'static str {
        "Threats are empty once the game is decided"
    }
}
