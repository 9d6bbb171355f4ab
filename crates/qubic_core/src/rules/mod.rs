//! Game rules for 4×4×4 tic-tac-toe.
//!
//! Pure functions evaluating a [`Board`](crate::Board) against the shared
//! line table. Rules are separated from board storage so the state manager,
//! replay, and presentation can all call them directly.

pub mod draw;
pub mod threat;
pub mod win;

pub use draw::is_board_full;
pub use threat::{Threat, detect_threats, is_threat_position};
pub use win::{WinningLine, check_winner, is_winning_position};
