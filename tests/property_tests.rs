//! Property-based tests for win detection and history.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated boards and intent sequences.

use proptest::prelude::*;
use timetoe::audit::audit;
use timetoe::core::WINNING_LINES;
use timetoe::{evaluate, Board, Cell, GameHistory, Mark, Outcome, Rejection};

prop_compose! {
    fn arbitrary_cell()(variant in 0..3u8) -> Cell {
        match variant {
            0 => Cell::Empty,
            1 => Cell::Occupied(Mark::X),
            _ => Cell::Occupied(Mark::O),
        }
    }
}

prop_compose! {
    fn arbitrary_board()(cells in prop::array::uniform9(arbitrary_cell())) -> Board {
        Board::from_cells(cells)
    }
}

#[derive(Clone, Debug)]
enum Intent {
    Play(usize),
    Jump(usize),
}

fn arbitrary_intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        3 => (0..9usize).prop_map(Intent::Play),
        1 => (0..10usize).prop_map(Intent::Jump),
    ]
}

fn owns_line(board: &Board, mark: Mark) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == Some(Cell::Occupied(mark))))
}

proptest! {
    #[test]
    fn winner_iff_line_owned(board in arbitrary_board()) {
        match evaluate(&board) {
            Outcome::Winner(mark) => prop_assert!(owns_line(&board, mark)),
            Outcome::NoWinner => {
                prop_assert!(!owns_line(&board, Mark::X));
                prop_assert!(!owns_line(&board, Mark::O));
            }
        }
    }

    #[test]
    fn evaluate_is_deterministic(board in arbitrary_board()) {
        prop_assert_eq!(evaluate(&board), evaluate(&board));
    }

    #[test]
    fn occupied_cell_always_rejected(
        moves in prop::collection::vec(0..9usize, 1..9)
    ) {
        let mut game = GameHistory::new();
        for &cell in &moves {
            let _ = game.play(cell);
        }

        let board = game.current();
        for index in 0..9 {
            if board.get(index) != Some(Cell::Empty) {
                let snapshots = game.snapshots().to_vec();
                let cursor = game.cursor();
                let result = game.play(index);
                let rejected = matches!(
                    result,
                    Err(Rejection::CellOccupied { .. }) | Err(Rejection::GameAlreadyWon)
                );
                prop_assert!(rejected, "unexpected result {:?} for cell {}", result, index);
                prop_assert_eq!(game.snapshots(), &snapshots[..]);
                prop_assert_eq!(game.cursor(), cursor);
            }
        }
    }

    #[test]
    fn length_counts_plays_since_truncation(
        intents in prop::collection::vec(arbitrary_intent(), 0..30)
    ) {
        let mut game = GameHistory::new();
        // Snapshots beyond the cursor are kept only until the next play.
        let mut expected_len = 1;

        for intent in intents {
            match intent {
                Intent::Play(cell) => {
                    let cursor = game.cursor();
                    if game.play(cell).is_ok() {
                        expected_len = cursor + 2;
                        prop_assert_eq!(game.cursor(), cursor + 1);
                    }
                }
                Intent::Jump(step) => {
                    let accepted = game.jump_to(step).is_ok();
                    prop_assert_eq!(accepted, step < expected_len);
                }
            }
            prop_assert_eq!(game.len(), expected_len);
            prop_assert_eq!(game.moves().len(), expected_len - 1);
        }
    }

    #[test]
    fn jump_then_view_matches_snapshot(
        moves in prop::collection::vec(0..9usize, 0..12),
        step in 0..10usize
    ) {
        let mut game = GameHistory::new();
        for &cell in &moves {
            let _ = game.play(cell);
        }

        if game.jump_to(step).is_ok() {
            let view = game.current_view();
            prop_assert_eq!(&view.board, &game.snapshots()[step]);
            prop_assert_eq!(view.move_count, step);
            prop_assert_eq!(view.next_mark, if step % 2 == 0 { Mark::X } else { Mark::O });
            prop_assert_eq!(view.winner, evaluate(&view.board));
        } else {
            prop_assert!(step >= game.len());
        }
    }

    #[test]
    fn won_board_rejects_every_play(
        moves in prop::collection::vec(0..9usize, 0..20),
        cell in 0..9usize
    ) {
        let mut game = GameHistory::new();
        for &m in &moves {
            let _ = game.play(m);
        }

        if game.winner().is_won() {
            prop_assert_eq!(game.play(cell), Err(Rejection::GameAlreadyWon));
        }
    }

    #[test]
    fn any_intent_sequence_passes_audit(
        intents in prop::collection::vec(arbitrary_intent(), 0..30)
    ) {
        let mut game = GameHistory::new();
        for intent in intents {
            match intent {
                Intent::Play(cell) => { let _ = game.play(cell); }
                Intent::Jump(step) => { let _ = game.jump_to(step); }
            }
        }
        prop_assert!(audit(&game).is_success());
    }
}
