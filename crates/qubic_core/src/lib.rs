//! Rules engine for 4×4×4 tic-tac-toe.
//!
//! Two players alternate placing marks in a 64-cell cube; four in a row
//! along any of the 76 straight lines wins.
//!
//! # Architecture
//!
//! - **Lines**: the 76 winning lines, generated once and shared read-only
//! - **Board**: 4×4×4 cell storage
//! - **Rules**: win, draw, and threat detection over a board
//! - **State**: the [`GameState`] aggregate with move, skip, and undo
//!   transitions that return the next state
//! - **Replay**: rebuilding any past state from recorded history
//! - **Manager**: a single owner handing out snapshots
//!
//! # Example
//!
//! ```
//! use qubic_core::{GameState, GameStatus, Player, Position};
//!
//! # fn main() -> Result<(), qubic_core::PositionError> {
//! let mut state = GameState::new();
//! for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0)] {
//!     state = state.make_move(Position::new(x, y, 0)?);
//! }
//! assert_eq!(state.status(), GameStatus::Win);
//! assert_eq!(state.winner(), Some(Player::X));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod invariants;
mod lines;
mod manager;
mod position;
mod replay;
mod rules;
mod state;
mod types;

pub use action::{Move, MoveKind, real_moves};
pub use error::MoveError;
pub use invariants::{
    BoardMatchesHistoryInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    ThreatsClearedInvariant, WinningLineConsistentInvariant,
};
pub use lines::{LINE_LEN, Line, LineFamily, TOTAL_LINES, total_winning_lines, winning_lines};
pub use manager::GameManager;
pub use position::{CELL_COUNT, Position, PositionError, SIZE};
pub use replay::{real_move_count, replay};
pub use rules::{
    Threat, WinningLine, check_winner, detect_threats, is_board_full, is_threat_position,
    is_winning_position,
};
pub use state::GameState;
pub use types::{Board, Cell, GameStatus, Player};
