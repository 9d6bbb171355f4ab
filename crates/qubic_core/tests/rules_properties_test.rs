//! Randomized checks of the rules evaluator against brute-force definitions.

use qubic_core::{
    Board, Cell, GameState, GameStatus, Player, Position, TOTAL_LINES, check_winner,
    detect_threats, is_winning_position, total_winning_lines, winning_lines,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_board(rng: &mut StdRng, fill: f64) -> Board {
    let mut board = Board::new();
    for pos in Position::all() {
        if rng.random_bool(fill) {
            let player = if rng.random_bool(0.5) { Player::X } else { Player::O };
            board.set(pos, Cell::Occupied(player));
        }
    }
    board
}

fn owned_by_one(board: &Board, line: &[Position; 4]) -> Option<Player> {
    let first = board.get(line[0]).player()?;
    line.iter()
        .all(|p| board.get(*p) == Cell::Occupied(first))
        .then_some(first)
}

#[test]
fn test_line_table_size() {
    assert_eq!(total_winning_lines(), 76);
    assert_eq!(winning_lines().len(), TOTAL_LINES);
}

#[test]
fn test_check_winner_iff_some_line_owned() {
    let mut rng = StdRng::seed_from_u64(0x51c);
    for round in 0..2_000 {
        let fill = [0.3, 0.6, 0.9, 1.0][round % 4];
        let board = random_board(&mut rng, fill);
        let first_owned = winning_lines()
            .iter()
            .find_map(|l| owned_by_one(&board, l).map(|p| (*l, p)));

        match (check_winner(&board), first_owned) {
            (Some(win), Some((line, player))) => {
                assert_eq!(win.positions, line);
                assert_eq!(win.player, player);
                for pos in Position::all() {
                    assert_eq!(
                        is_winning_position(Some(&win), pos),
                        line.contains(&pos)
                    );
                }
            }
            (None, None) => {}
            (got, want) => panic!("check_winner = {got:?}, expected {want:?}"),
        }
    }
}

#[test]
fn test_threats_match_definition() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1_000 {
        let board = random_board(&mut rng, 0.4);
        let threats = detect_threats(&board);
        let expected = winning_lines()
            .iter()
            .filter(|line| {
                let count = |p: Player| {
                    line.iter()
                        .filter(|c| board.get(**c) == Cell::Occupied(p))
                        .count()
                };
                matches!((count(Player::X), count(Player::O)), (3, 0) | (0, 3))
            })
            .count();
        assert_eq!(threats.len(), expected);
        for t in &threats {
            assert!(board.is_empty(t.empty_cell));
            assert!(t.line.contains(&t.empty_cell));
            let owned = t
                .line
                .iter()
                .filter(|c| board.get(**c) == Cell::Occupied(t.player))
                .count();
            assert_eq!(owned, 3);
        }
    }
}

#[test]
fn test_random_games_keep_threats_empty_after_end() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let mut state = GameState::new();
        while state.status() == GameStatus::Playing {
            let moves = Position::legal_moves(state.board());
            if rng.random_bool(0.05) {
                state = state.skip_turn();
                continue;
            }
            let pick = moves[rng.random_range(0..moves.len())];
            state = state.make_move(pick);
        }
        assert!(state.threats().is_empty());
        assert_eq!(state.status() == GameStatus::Win, check_winner(state.board()).is_some());
    }
}
