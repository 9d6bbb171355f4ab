//! Win detection logic.

use super::super::lines::{Line, winning_lines};
use super::super::{Board, Cell, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A line fully owned by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// The four cells, in generation order.
    pub positions: Line,
    /// The player holding all four.
    pub player: Player,
}

impl WinningLine {
    /// True if `pos` is one of the four cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Checks if any line is fully owned by one player.
///
/// Lines are scanned in generation order and the first complete one is
/// returned, so a move completing several lines reports the earliest.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    winning_lines().iter().find_map(|line| {
        let first = board.get(line[0]);
        match first {
            Cell::Occupied(player) if line[1..].iter().all(|p| board.get(*p) == first) => {
                Some(WinningLine {
                    positions: *line,
                    player,
                })
            }
            _ => None,
        }
    })
}

/// True if `pos` belongs to the winning line, when there is one.
pub fn is_winning_position(winning_line: Option<&WinningLine>, pos: Position) -> bool {
    winning_line.is_some_and(|w| w.contains(pos))
}
