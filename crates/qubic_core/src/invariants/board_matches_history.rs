//! The board holds exactly the marks recorded as real moves.

use super::Invariant;
use crate::{Cell, GameState, action::real_moves};

/// Invariant: occupied cells correspond one-to-one with real moves.
///
/// Every placement in history shows up on the board under the recorded
/// player, no cell is filled without one, and `move_count` equals the number
/// of placements. Skips contribute nothing.
pub struct BoardMatchesHistoryInvariant;

impl Invariant<GameState> for BoardMatchesHistoryInvariant {
    fn holds(state: &GameState) -> bool {
        let placements = real_moves(state.history()).count();
        let marks_match = real_moves(state.history())
            .all(|(player, pos, _)| state.board().get(pos) == Cell::Occupied(player));

        marks_match
            && placements == state.move_count()
            && placements == state.board().occupied_count()
    }

    fn description() -> &'static str {
        "Board marks match the real moves in history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(BoardMatchesHistoryInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_skips_do_not_count() {
        let state = GameState::new()
            .skip_turn()
            .make_move(Position::at(1, 2, 3))
            .skip_turn();
        assert!(BoardMatchesHistoryInvariant::holds(&state));
        assert_eq!(state.move_count(), 1);
    }

    #[test]
    fn test_wrong_owner_violates() {
        let mut state = GameState::new().make_move(Position::at(1, 2, 3));
        state.board.set(Position::at(1, 2, 3), Cell::Occupied(Player::O));
        assert!(!BoardMatchesHistoryInvariant::holds(&state));
    }

    #[test]
    fn test_stray_mark_violates() {
        let mut state = GameState::new().make_move(Position::at(1, 2, 3));
        state.board.set(Position::at(0, 0, 0), Cell::Occupied(Player::O));
        assert!(!BoardMatchesHistoryInvariant::holds(&state));
    }
}
