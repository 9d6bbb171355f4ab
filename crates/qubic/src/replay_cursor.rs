//! Stepping through a recorded game one real move at a time.

use qubic_core::{GameState, Move, real_move_count, replay};
use tracing::{debug, instrument};

/// A position within a recorded history.
///
/// The cursor sits at `k`, meaning "after the first `k` real moves", with
/// `k` in `0..=len()`.
#[derive(Debug, Clone)]
pub struct ReplayCursor {
    history: Vec<Move>,
    total: usize,
    position: usize,
}

impl ReplayCursor {
    /// Opens a cursor at the end of `history`.
    #[instrument(skip(history), fields(entries = history.len()))]
    pub fn new(history: Vec<Move>) -> Self {
        let total = real_move_count(&history);
        Self {
            history,
            total,
            position: total,
        }
    }

    /// Number of real moves available.
    pub fn len(&self) -> usize {
        self.total
    }

    /// True when the history holds no real moves.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Current `k`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True once the cursor is at the last real move.
    pub fn at_end(&self) -> bool {
        self.position == self.total
    }

    /// Moves to `k`, clamped to the available range.
    pub fn seek(&mut self, k: usize) -> usize {
        self.position = k.min(self.total);
        debug!(position = self.position, "Replay cursor moved");
        self.position
    }

    /// Advances one move; returns `false` at the end.
    pub fn step_forward(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.seek(self.position + 1);
        true
    }

    /// Goes back one move; returns `false` at the start.
    pub fn step_back(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.seek(self.position - 1);
        true
    }

    /// One autoplay tick. Returns `false` once playback has finished, so a
    /// ticking collaborator knows to stop.
    pub fn autoplay_tick(&mut self) -> bool {
        self.step_forward()
    }

    /// Restarts playback from an empty board.
    pub fn rewind(&mut self) {
        self.seek(0);
    }

    /// State after the first `position()` real moves.
    pub fn snapshot(&self) -> GameState {
        replay(&self.history, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qubic_core::Position;

    fn finished_history() -> Vec<Move> {
        let mut state = GameState::new();
        for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0)] {
            state = state.make_move(Position::new(x, y, 0).unwrap());
        }
        state.skip_turn().history().to_vec()
    }

    #[test]
    fn test_starts_at_end() {
        let cursor = ReplayCursor::new(finished_history());
        assert_eq!(cursor.len(), 7);
        assert!(cursor.at_end());
        assert_eq!(cursor.snapshot().move_count(), 7);
    }

    #[test]
    fn test_stepping() {
        let mut cursor = ReplayCursor::new(finished_history());
        assert!(!cursor.step_forward());
        assert!(cursor.step_back());
        assert_eq!(cursor.snapshot().move_count(), 6);
        assert_eq!(cursor.seek(100), 7);
        cursor.rewind();
        assert!(!cursor.step_back());
        assert_eq!(cursor.snapshot(), GameState::new());
    }

    #[test]
    fn test_autoplay_runs_to_end() {
        let mut cursor = ReplayCursor::new(finished_history());
        cursor.rewind();
        let mut ticks = 0;
        while cursor.autoplay_tick() {
            ticks += 1;
        }
        assert_eq!(ticks, 7);
        assert!(cursor.at_end());
    }
}
