//! Win detection.
//!
//! Evaluation is a pure function of a board: eight fixed line checks, no
//! side effects.

use super::board::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};

/// The eight winning lines: rows, then columns, then diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Result of evaluating a board for a completed line.
///
/// A full board with no completed line is also `NoWinner`; telling a draw
/// from a game in progress is left to the caller (see [`Board::is_full`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Mark),
    NoWinner,
}

impl Outcome {
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(mark),
            Outcome::NoWinner => None,
        }
    }

    pub fn is_won(self) -> bool {
        matches!(self, Outcome::Winner(_))
    }
}

/// Evaluates a board, returning the mark that completed a line.
///
/// Lines are checked in [`WINNING_LINES`] order and the first complete
/// one decides.
///
/// ```rust
/// use timetoe::{evaluate, Board, Mark, Outcome};
///
/// let board = [0, 4, 8]
///     .into_iter()
///     .try_fold(Board::new(), |b, i| b.with_mark(i, Mark::X))
///     .unwrap();
///
/// assert_eq!(evaluate(&board), Outcome::Winner(Mark::X));
/// assert_eq!(evaluate(&Board::new()), Outcome::NoWinner);
/// ```
pub fn evaluate(board: &Board) -> Outcome {
    let cells = board.cells();
    for [a, b, c] in WINNING_LINES {
        if let Cell::Occupied(mark) = cells[a] {
            if cells[b] == cells[a] && cells[c] == cells[a] {
                return Outcome::Winner(mark);
            }
        }
    }
    Outcome::NoWinner
}
