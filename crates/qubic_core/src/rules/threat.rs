//! Threat detection: lines one mark away from completion.

use super::super::lines::{Line, winning_lines};
use super::super::{Board, Cell, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A line holding three marks of one player and one empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Threat {
    /// Player who completes the line by filling `empty_cell`.
    pub player: Player,
    /// The full line.
    pub line: Line,
    /// The one cell still open.
    pub empty_cell: Position,
}

/// Finds every threat on the board, in line generation order.
///
/// Recomputed from scratch each call. Callers in a decided game should not
/// call this; the state manager keeps threats empty once the game ends.
#[instrument(skip(board))]
pub fn detect_threats(board: &Board) -> Vec<Threat> {
    let threats: Vec<Threat> = winning_lines()
        .iter()
        .filter_map(|line| threat_in_line(board, line))
        .collect();
    trace!(count = threats.len(), "Detected threats");
    threats
}

fn threat_in_line(board: &Board, line: &Line) -> Option<Threat> {
    let mut x = 0;
    let mut o = 0;
    let mut empty = None;
    for pos in line {
        match board.get(*pos) {
            Cell::Empty => empty = Some(*pos),
            Cell::Occupied(Player::X) => x += 1,
            Cell::Occupied(Player::O) => o += 1,
        }
    }
    let player = match (x, o) {
        (3, 0) => Player::X,
        (0, 3) => Player::O,
        _ => return None,
    };
    empty.map(|empty_cell| Threat {
        player,
        line: *line,
        empty_cell,
    })
}

/// Returns the first threat whose open cell is `pos`, optionally limited to
/// one player's threats.
pub fn is_threat_position(
    threats: &[Threat],
    pos: Position,
    player: Option<Player>,
) -> Option<&Threat> {
    threats
        .iter()
        .find(|t| t.empty_cell == pos && player.is_none_or(|p| t.player == p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, cells: &[(u8, u8, u8)], player: Player) {
        for &(x, y, z) in cells {
            board.set(Position::at(x, y, z), Cell::Occupied(player));
        }
    }

    #[test]
    fn test_no_threats_empty_board() {
        assert!(detect_threats(&Board::new()).is_empty());
    }

    #[test]
    fn test_three_in_row_is_threat() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0, 0), (1, 0, 0), (2, 0, 0)], Player::X);
        let threats = detect_threats(&board);
        assert_eq!(threats.len(), 1);
        assert_eq!(threats[0].player, Player::X);
        assert_eq!(threats[0].empty_cell, Position::at(3, 0, 0));
    }

    #[test]
    fn test_gap_in_middle_is_threat() {
        let mut board = Board::new();
        place(&mut board, &[(0, 1, 3), (0, 1, 1), (0, 1, 0)], Player::O);
        let threats = detect_threats(&board);
        assert_eq!(threats.len(), 1);
        assert_eq!(threats[0].empty_cell, Position::at(0, 1, 2));
    }

    #[test]
    fn test_blocked_line_is_not_threat() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0, 0), (1, 0, 0), (2, 0, 0)], Player::X);
        place(&mut board, &[(3, 0, 0)], Player::O);
        assert!(detect_threats(&board).is_empty());
    }

    #[test]
    fn test_two_marks_not_threat() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0, 0), (1, 1, 1)], Player::X);
        assert!(detect_threats(&board).is_empty());
    }

    #[test]
    fn test_complete_line_is_not_threat() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0)], Player::X);
        assert!(detect_threats(&board).is_empty());
    }

    #[test]
    fn test_is_threat_position_filters_by_player() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0, 0), (1, 0, 0), (2, 0, 0)], Player::X);
        place(&mut board, &[(3, 1, 0), (3, 2, 0), (3, 3, 0)], Player::O);
        let threats = detect_threats(&board);
        // (3,0,0) closes X's row and O's column.
        let cell = Position::at(3, 0, 0);
        assert_eq!(is_threat_position(&threats, cell, Some(Player::X)).unwrap().player, Player::X);
        assert_eq!(is_threat_position(&threats, cell, Some(Player::O)).unwrap().player, Player::O);
        assert!(is_threat_position(&threats, cell, None).is_some());
        assert!(is_threat_position(&threats, Position::at(2, 2, 2), None).is_none());
    }
}
