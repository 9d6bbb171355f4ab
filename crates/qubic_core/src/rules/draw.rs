//! Draw detection logic.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all 64 cells occupied).
///
/// A full board is a draw only if the move that filled it did not also
/// complete a line; the state manager checks for a winner first.
#[instrument(skip(board))]
pub fn is_board_full(board: &Board) -> bool {
    board.cells().all(|(_, c)| c != Cell::Empty)
}
