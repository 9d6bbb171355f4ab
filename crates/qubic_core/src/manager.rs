//! Single owner of a game's authoritative state.

use super::error::MoveError;
use super::replay::replay;
use super::state::GameState;
use super::{GameStatus, Player, Position};
use tracing::{debug, instrument};

/// Owns one [`GameState`] and routes every mutation through it.
///
/// Renderers receive owned snapshots. Each mutator reports whether the
/// state changed, so callers can tell an accepted input from an ignored one
/// without comparing states themselves.
#[derive(Debug, Clone, Default)]
pub struct GameManager {
    state: GameState,
}

impl GameManager {
    /// Starts a new game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrows the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state for a renderer.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Player to move.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Plays the current player's mark. Returns `false` if ignored.
    #[instrument(skip(self), fields(position = %position))]
    pub fn play(&mut self, position: Position) -> bool {
        self.transition(|s| s.check_move(position), |s| s.make_move(position))
    }

    /// Like [`play`](Self::play), but reports why an input was ignored.
    pub fn try_play(&mut self, position: Position) -> Result<(), MoveError> {
        self.state.check_move(position)?;
        self.play(position);
        Ok(())
    }

    /// Undoes the last history entry. Returns `false` if ignored.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        self.transition(GameState::check_undo, GameState::undo_move)
    }

    /// Like [`undo`](Self::undo), but reports why it was ignored.
    pub fn try_undo(&mut self) -> Result<(), MoveError> {
        self.state.check_undo()?;
        self.undo();
        Ok(())
    }

    /// Skips the current player's turn. Returns `false` if ignored.
    #[instrument(skip(self))]
    pub fn skip(&mut self) -> bool {
        self.transition(GameState::check_skip, GameState::skip_turn)
    }

    /// Discards the game and starts over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = std::mem::take(&mut self.state).reset();
    }

    /// State after the first `k` real moves of the current history.
    ///
    /// Read-only; the live game is untouched.
    pub fn replay(&self, k: usize) -> GameState {
        replay(self.state.history(), k)
    }

    fn transition(
        &mut self,
        check: impl FnOnce(&GameState) -> Result<(), MoveError>,
        apply: impl FnOnce(GameState) -> GameState,
    ) -> bool {
        if let Err(reason) = check(&self.state) {
            debug!(%reason, "Input rejected");
            return false;
        }
        self.state = apply(std::mem::take(&mut self.state));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: u8, y: u8, z: u8) -> Position {
        Position::at(x, y, z)
    }

    #[test]
    fn test_play_reports_change() {
        let mut game = GameManager::new();
        assert!(game.play(at(0, 0, 0)));
        assert!(!game.play(at(0, 0, 0)));
        assert_eq!(game.try_play(at(0, 0, 0)), Err(MoveError::SquareOccupied(at(0, 0, 0))));
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut game = GameManager::new();
        game.play(at(0, 0, 0));
        let snapshot = game.snapshot();
        game.play(at(1, 0, 0));
        assert_eq!(snapshot.move_count(), 1);
        assert_eq!(game.state().move_count(), 2);
    }

    #[test]
    fn test_undo_and_skip() {
        let mut game = GameManager::new();
        assert!(!game.undo());
        assert_eq!(game.try_undo(), Err(MoveError::NothingToUndo));
        game.play(at(0, 0, 0));
        assert!(game.skip());
        assert_eq!(game.current_player(), Player::X);
        assert!(game.undo());
        assert!(game.undo());
        assert_eq!(game.state(), &GameState::new());
    }

    #[test]
    fn test_replay_leaves_live_game() {
        let mut game = GameManager::new();
        game.play(at(0, 0, 0));
        game.play(at(1, 1, 1));
        let past = game.replay(1);
        assert_eq!(past.move_count(), 1);
        assert_eq!(game.state().move_count(), 2);
    }

    #[test]
    fn test_reset() {
        let mut game = GameManager::new();
        game.play(at(2, 2, 2));
        game.reset();
        assert_eq!(game.state(), &GameState::new());
    }
}
