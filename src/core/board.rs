//! Board, cell and mark types.
//!
//! A board is a plain value: nine cells in row-major order. Boards are
//! never mutated once they enter a history; new positions are built from
//! copies via [`Board::with_mark`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A player's symbol.
///
/// `X` always moves first, so the mark to play is fully determined by the
/// parity of the step number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// First player.
    X,
    /// Second player.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Mark whose turn it is after `step` moves have been played.
    ///
    /// ```rust
    /// use timetoe::Mark;
    ///
    /// assert_eq!(Mark::for_step(0), Mark::X);
    /// assert_eq!(Mark::for_step(3), Mark::O);
    /// ```
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Mark),
}

impl Cell {
    /// Mark occupying this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// 3x3 board, cells indexed 0-8 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

/// Immutable board shared between a history and any views handed out.
pub type Snapshot = Arc<Board>;

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from raw cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Cell at `index`, or `None` when the index is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// The receiver is left untouched. Returns `None` when `index` is off
    /// the board; occupancy is not checked here, that is the job of the
    /// play guards.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Self> {
        let mut next = *self;
        let cell = next.cells.get_mut(index)?;
        *cell = Cell::Occupied(mark);
        Some(next)
    }

    /// True when every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Indices of the cells that differ between `self` and `other`.
    pub fn diff(&self, other: &Board) -> Vec<usize> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect()
    }
}
