//! Text rendering of a game snapshot.
//!
//! Layers are drawn side by side, `z = 0` on the left, `y` growing
//! downwards and `x` to the right. Each cell is three characters wide:
//!
//! - `[X]` a cell of the winning line
//! - `(X)` the most recent mark
//! - ` * ` an open cell that wins for the player to move
//! - ` ! ` an open cell the opponent wins with next turn
//! - ` . ` any other open cell

use qubic_core::{
    Cell, GameState, GameStatus, Move, Position, SIZE, is_threat_position, is_winning_position,
};
use std::fmt::Write;

fn cell_glyph(state: &GameState, pos: Position) -> String {
    match state.board().get(pos) {
        Cell::Occupied(p) if is_winning_position(state.winning_line(), pos) => {
            format!("[{}]", p.symbol())
        }
        Cell::Occupied(p) if state.last_move() == Some(pos) => format!("({})", p.symbol()),
        Cell::Occupied(p) => format!(" {} ", p.symbol()),
        Cell::Empty => {
            let to_move = state.current_player();
            if is_threat_position(state.threats(), pos, Some(to_move)).is_some() {
                " * ".to_string()
            } else if is_threat_position(state.threats(), pos, Some(to_move.opponent())).is_some()
            {
                " ! ".to_string()
            } else {
                " . ".to_string()
            }
        }
    }
}

/// Draws the four layers.
pub fn render_board(state: &GameState) -> String {
    let mut out = String::new();
    let width = SIZE as usize * 3;
    let header: Vec<String> = (0..SIZE)
        .map(|z| format!("{:<width$}", format!("  z={z}")))
        .collect();
    let _ = writeln!(out, "{}", header.join("  ").trim_end());
    for y in 0..SIZE {
        let row: Vec<String> = (0..SIZE)
            .map(|z| {
                (0..SIZE)
                    .filter_map(|x| Position::new(x, y, z).ok())
                    .map(|pos| cell_glyph(state, pos))
                    .collect::<String>()
            })
            .collect();
        let _ = writeln!(out, "{}", row.join("  "));
    }
    out
}

/// One line describing whose turn it is or how the game ended.
pub fn render_status(state: &GameState) -> String {
    match state.status() {
        GameStatus::Playing => format!(
            "{} to move ({} marks placed, {} open threats)",
            state.current_player(),
            state.move_count(),
            state.threats().len()
        ),
        GameStatus::Win => match state.winning_line() {
            Some(line) => {
                let cells: Vec<String> = line.positions.iter().map(|p| p.to_string()).collect();
                format!("{} wins along {}", line.player, cells.join(" "))
            }
            None => "Game won".to_string(),
        },
        GameStatus::Draw => "Draw: the board is full".to_string(),
    }
}

/// Board followed by the status line.
pub fn render_state(state: &GameState) -> String {
    format!("{}{}\n", render_board(state), render_status(state))
}

/// Numbered history listing.
pub fn render_history(history: &[Move]) -> String {
    if history.is_empty() {
        return "No moves yet\n".to_string();
    }
    history
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{:>3}. {}  [{}]\n", i + 1, m, m.created_at.format("%H:%M:%S")))
        .collect()
}

/// One line per open threat.
pub fn render_threats(state: &GameState) -> String {
    if state.threats().is_empty() {
        return "No open threats\n".to_string();
    }
    state
        .threats()
        .iter()
        .map(|t| format!("{} completes a line at {}\n", t.player, t.empty_cell))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: u8, y: u8, z: u8) -> Position {
        Position::new(x, y, z).unwrap()
    }

    #[test]
    fn test_empty_board_render() {
        let text = render_state(&GameState::new());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], [" .  .  .  . "; 4].join("  "));
        assert_eq!(lines[5], "X to move (0 marks placed, 0 open threats)");
    }

    #[test]
    fn test_marks_win_and_threats() {
        let mut state = GameState::new();
        for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
            state = state.make_move(at(x, y, 0));
        }
        // O to move: X threatens (3,0,0).
        let board = render_board(&state);
        let row0 = board.lines().nth(1).unwrap();
        assert!(row0.starts_with(" X  X (X) ! "));

        let state = state.make_move(at(2, 1, 0)).make_move(at(3, 0, 0));
        let row0 = render_board(&state).lines().nth(1).unwrap().to_string();
        assert!(row0.starts_with("[X][X][X][X]"));
        assert_eq!(
            render_status(&state),
            "X wins along (0, 0, 0) (1, 0, 0) (2, 0, 0) (3, 0, 0)"
        );
    }

    #[test]
    fn test_history_and_threat_listing() {
        let state = GameState::new().make_move(at(0, 0, 0)).skip_turn();
        let history = render_history(state.history());
        assert!(history.contains("1. X -> (0, 0, 0)"));
        assert!(history.contains("2. O skipped"));
        assert_eq!(render_threats(&state), "No open threats\n");
    }
}
