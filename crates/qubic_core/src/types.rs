//! Core domain types for 4×4×4 tic-tac-toe.

use super::position::{Position, SIZE};
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character mark used when rendering.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// Contents of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// The occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(p),
        }
    }
}

/// 4×4×4 board, indexed `cells[z][y][x]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[[Cell; 4]; 4]; 4],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.z() as usize][pos.y() as usize][pos.x() as usize]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.z() as usize][pos.y() as usize][pos.x() as usize] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// All cells paired with their positions, in index order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::all().map(|pos| (pos, self.get(pos)))
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells().filter(|(_, c)| *c != Cell::Empty).count()
    }

    /// Formats the board as four layers side by side, `z = 0` on the left.
    ///
    /// Empty cells render as `.`.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for z in 0..SIZE {
            result.push_str(&format!("z={z:<8}"));
        }
        result.truncate(result.trim_end().len());
        result.push('\n');
        for y in 0..SIZE {
            let mut row = String::new();
            for z in 0..SIZE {
                for x in 0..SIZE {
                    let symbol = match self.get(Position::at(x, y, z)) {
                        Cell::Empty => '.',
                        Cell::Occupied(p) => p.symbol(),
                    };
                    row.push(symbol);
                    if x < SIZE - 1 {
                        row.push(' ');
                    }
                }
                if z < SIZE - 1 {
                    row.push_str("   ");
                }
            }
            result.push_str(&row);
            result.push('\n');
        }
        result
    }
}

/// Current phase of the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    Playing,
    /// A line was completed.
    Win,
    /// Board filled with no line completed.
    Draw,
}

impl GameStatus {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_set_get() {
        let mut board = Board::new();
        let pos = Position::at(3, 1, 2);
        assert!(board.is_empty(pos));
        board.set(pos, Cell::Occupied(Player::O));
        assert_eq!(board.get(pos), Cell::Occupied(Player::O));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_display_layout() {
        let mut board = Board::new();
        board.set(Position::at(0, 0, 0), Cell::Occupied(Player::X));
        board.set(Position::at(3, 3, 3), Cell::Occupied(Player::O));
        let text = board.display();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("X . . ."));
        assert!(lines[4].ends_with(". . . O"));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&GameStatus::Win).unwrap(), "\"win\"");
        assert_eq!(GameStatus::Draw.to_string(), "draw");
    }
}
