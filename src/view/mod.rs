//! Read-only projection handed to the presentation layer.
//!
//! A [`View`] is everything a renderer needs for one frame: the visible
//! board, the status line and the "go to move" list. Views share their
//! board with the history by reference and stay valid after further play.

mod symbols;

pub use symbols::Symbols;

use crate::core::{evaluate, GameHistory, Mark, Outcome, Snapshot};
use serde::Serialize;
use std::fmt;

/// Status line for the visible snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Winner(Mark),
    /// Board is full and nobody completed a line.
    Draw,
    NextPlayer(Mark),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner(mark) => write!(f, "Winner: {mark}"),
            Status::Draw => f.write_str("Draw"),
            Status::NextPlayer(mark) => write!(f, "Next player: {mark}"),
        }
    }
}

/// One "go to move" control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    pub step: usize,
    pub label: String,
    pub is_current: bool,
}

impl MoveEntry {
    fn new(step: usize, cursor: usize) -> Self {
        let label = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{step}")
        };
        Self {
            step,
            label,
            is_current: step == cursor,
        }
    }
}

/// Snapshot of everything needed to render one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub board: Snapshot,
    pub winner: Outcome,
    /// Number of moves leading to the visible board (the cursor).
    pub move_count: usize,
    pub next_mark: Mark,
    pub status: Status,
    /// One entry per recorded snapshot, game start first.
    pub moves: Vec<MoveEntry>,
    pub symbols: Symbols,
}

impl View {
    pub(crate) fn project(history: &GameHistory) -> Self {
        let board = history.current();
        let winner = evaluate(&board);
        let next_mark = history.next_mark();
        let status = match winner {
            Outcome::Winner(mark) => Status::Winner(mark),
            Outcome::NoWinner if board.is_full() => Status::Draw,
            Outcome::NoWinner => Status::NextPlayer(next_mark),
        };
        let cursor = history.cursor();
        let moves = (0..history.len())
            .map(|step| MoveEntry::new(step, cursor))
            .collect();

        Self {
            board,
            winner,
            move_count: cursor,
            next_mark,
            status,
            moves,
            symbols: *history.symbols(),
        }
    }

    /// Status line with marks drawn in the configured symbols.
    pub fn status_line(&self) -> String {
        match self.status {
            Status::Winner(mark) => format!("Winner: {}", self.symbols.mark(mark)),
            Status::Draw => Status::Draw.to_string(),
            Status::NextPlayer(mark) => format!("Next player: {}", self.symbols.mark(mark)),
        }
    }

    /// Three-row text grid of the visible board.
    pub fn render_board(&self) -> String {
        self.board
            .cells()
            .chunks(3)
            .map(|row| row.iter().map(|&c| self.symbols.cell(c)).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_game_view() {
        let view = GameHistory::new().current_view();

        assert_eq!(view.move_count, 0);
        assert_eq!(view.next_mark, Mark::X);
        assert_eq!(view.winner, Outcome::NoWinner);
        assert_eq!(view.status, Status::NextPlayer(Mark::X));
        assert_eq!(view.moves.len(), 1);
        assert_eq!(view.moves[0].label, "Go to game start");
        assert!(view.moves[0].is_current);
    }

    #[test]
    fn move_list_tracks_cursor() {
        let mut game = GameHistory::new();
        game.play(0).unwrap();
        game.play(1).unwrap();
        game.jump_to(1).unwrap();

        let view = game.current_view();
        let labels: Vec<&str> = view.moves.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Go to game start", "Go to move #1", "Go to move #2"]);
        let current: Vec<usize> = view
            .moves
            .iter()
            .filter(|m| m.is_current)
            .map(|m| m.step)
            .collect();
        assert_eq!(current, vec![1]);
    }

    #[test]
    fn winner_status_uses_separator() {
        let mut game = GameHistory::new();
        for i in [0, 3, 1, 4, 2] {
            game.play(i).unwrap();
        }
        let view = game.current_view();
        assert_eq!(view.status, Status::Winner(Mark::X));
        assert_eq!(view.status.to_string(), "Winner: X");
        assert_eq!(view.status_line(), "Winner: X");
    }

    #[test]
    fn full_board_without_winner_is_a_draw() {
        let mut game = GameHistory::new();
        // X O X / X O O / O X X
        for i in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.play(i).unwrap();
        }
        let view = game.current_view();
        assert_eq!(view.winner, Outcome::NoWinner);
        assert_eq!(view.status, Status::Draw);
        assert_eq!(view.status_line(), "Draw");
    }

    #[test]
    fn render_board_uses_symbols() {
        let mut game = GameHistory::new();
        game.play(0).unwrap();
        game.play(4).unwrap();

        assert_eq!(game.current_view().render_board(), "X..\n.O.\n...");
    }

    #[test]
    fn stale_view_survives_truncation() {
        let mut game = GameHistory::new();
        game.play(0).unwrap();
        game.play(1).unwrap();
        let stale = game.current_view();

        game.jump_to(0).unwrap();
        game.play(8).unwrap();

        assert_eq!(stale.board.occupied(), 2);
        assert_eq!(stale.moves.len(), 3);
        assert_eq!(game.current_view().moves.len(), 2);
    }

    #[test]
    fn view_serializes_to_json() {
        let mut game = GameHistory::new();
        game.play(4).unwrap();

        let json = serde_json::to_value(game.current_view()).unwrap();
        assert_eq!(json["move_count"], 1);
        assert_eq!(json["next_mark"], "O");
        assert_eq!(json["winner"], "NoWinner");
        assert_eq!(json["moves"][1]["label"], "Go to move #1");
    }
}
