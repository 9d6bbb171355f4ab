//! Reasons a transition leaves the state unchanged.

use super::Position;
use derive_more::{Display, Error};

/// Why a move, skip, or undo would be ignored.
///
/// Transitions on [`GameState`](crate::GameState) never fail; they return the
/// input unchanged. Hosts that want to report the rejection call the
/// matching `check_*` precondition first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),

    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// History is empty.
    #[display("No moves to undo")]
    NothingToUndo,

    /// A won game cannot be undone.
    #[display("Game has been won and cannot be undone")]
    GameDecided,
}
