//! The game state aggregate and its transitions.
//!
//! [`GameState`] is a plain owned value. Every transition consumes the state
//! and returns the next one; rejected transitions hand back the input
//! unchanged. A renderer that holds a clone is never affected by later
//! transitions.

use super::action::{Move, real_moves};
use super::error::MoveError;
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{Threat, WinningLine, check_winner, detect_threats, is_board_full};
use super::{Board, Cell, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Complete, self-consistent snapshot of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) winning_line: Option<WinningLine>,
    pub(crate) move_count: usize,
    pub(crate) history: Vec<Move>,
    pub(crate) threats: Vec<Threat>,
    pub(crate) last_move: Option<Position>,
}

impl GameState {
    /// Creates an empty game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::Playing,
            winning_line: None,
            move_count: 0,
            history: Vec::new(),
            threats: Vec::new(),
            last_move: None,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is.
    ///
    /// Flips on every accepted move, including the one that ends the game.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The completed line, when the game is won.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// The winner, when the game is won.
    pub fn winner(&self) -> Option<Player> {
        self.winning_line.map(|w| w.player)
    }

    /// Number of marks placed.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Full history including skips.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// History entries that placed a mark.
    pub fn real_moves(&self) -> impl Iterator<Item = &Move> {
        real_moves(&self.history).map(|(_, _, m)| m)
    }

    /// Open threats; always empty once the game is decided.
    pub fn threats(&self) -> &[Threat] {
        &self.threats
    }

    /// Most recently placed mark.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Discards this game and returns a fresh one.
    #[instrument(skip(self), fields(moves = self.move_count))]
    pub fn reset(self) -> Self {
        info!("Resetting game");
        Self::new()
    }

    // ─────────────────────────────────────────────────────────────
    //  Preconditions
    // ─────────────────────────────────────────────────────────────

    /// Checks whether [`make_move`](Self::make_move) would accept `position`.
    pub fn check_move(&self, position: Position) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }
        Ok(())
    }

    /// Checks whether [`undo_move`](Self::undo_move) would change anything.
    pub fn check_undo(&self) -> Result<(), MoveError> {
        if self.history.is_empty() {
            return Err(MoveError::NothingToUndo);
        }
        if self.status == GameStatus::Win {
            return Err(MoveError::GameDecided);
        }
        Ok(())
    }

    /// Checks whether [`skip_turn`](Self::skip_turn) would change anything.
    pub fn check_skip(&self) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Places the current player's mark at `position`.
    ///
    /// Ignored (state returned unchanged) when the game is over or the cell
    /// is occupied.
    #[instrument(skip(self), fields(position = %position, player = %self.current_player))]
    pub fn make_move(mut self, position: Position) -> Self {
        if let Err(reason) = self.check_move(position) {
            debug!(%reason, "Move ignored");
            return self;
        }

        let player = self.current_player;
        self.apply(Move::placement(player, position));
        self.current_player = player.opponent();

        match self.status {
            GameStatus::Win => info!(winner = %player, moves = self.move_count, "Game won"),
            GameStatus::Draw => info!(moves = self.move_count, "Game drawn"),
            GameStatus::Playing => debug!(threats = self.threats.len(), "Move applied"),
        }

        self.assert_invariants();
        self
    }

    /// Passes the current player's turn without placing a mark.
    ///
    /// Ignored when the game is over. The board, move count, and threats are
    /// untouched.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn skip_turn(mut self) -> Self {
        if let Err(reason) = self.check_skip() {
            debug!(%reason, "Skip ignored");
            return self;
        }

        self.history.push(Move::skip(self.current_player));
        self.current_player = self.current_player.opponent();
        debug!("Turn skipped");

        self.assert_invariants();
        self
    }

    /// Removes the last history entry and rebuilds the board from what
    /// remains.
    ///
    /// Ignored when history is empty or the game has been won. Undoing a
    /// draw reopens the game.
    #[instrument(skip(self), fields(history_len = self.history.len()))]
    pub fn undo_move(mut self) -> Self {
        if let Err(reason) = self.check_undo() {
            debug!(%reason, "Undo ignored");
            return self;
        }

        let removed = self.history.pop();
        let state = Self::rebuild(self.history);
        debug_assert_eq!(state.status, GameStatus::Playing);
        info!(removed = ?removed.map(|m| m.to_string()), moves = state.move_count, "Move undone");

        state.assert_invariants();
        state
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    /// Replays every real move of `history` onto an empty board.
    ///
    /// Each mark goes to the player recorded in its entry, so interleaved
    /// skips do not disturb ownership. The turn passes to the opponent of
    /// the last real move (X when there is none). `history` is kept
    /// verbatim, skips included.
    pub(crate) fn rebuild(history: Vec<Move>) -> Self {
        let mut state = Self::new();
        for (player, position, entry) in real_moves(&history) {
            if state.check_move(position).is_err() {
                warn!(%position, %player, "Recorded move cannot be replayed; skipping");
                continue;
            }
            state.apply(*entry);
            state.current_player = player.opponent();
        }
        state.history = history;
        state
    }

    /// Writes a placement, appends it, and re-evaluates the board.
    fn apply(&mut self, entry: Move) {
        if let Some(position) = entry.placed() {
            self.board.set(position, Cell::Occupied(entry.player));
            self.move_count += 1;
            self.last_move = Some(position);
        }
        self.history.push(entry);
        self.evaluate();
    }

    /// Recomputes status, winning line, and threats from the board.
    fn evaluate(&mut self) {
        self.winning_line = check_winner(&self.board);
        self.status = if self.winning_line.is_some() {
            GameStatus::Win
        } else if is_board_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::Playing
        };
        self.threats = match self.status {
            GameStatus::Playing => detect_threats(&self.board),
            GameStatus::Win | GameStatus::Draw => Vec::new(),
        };
    }

    fn assert_invariants(&self) {
        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Game state invariants violated: {:?}",
            GameInvariants::check_all(self)
        );
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
