//! Core game state types and logic.
//!
//! This module contains the pure core of the game:
//! - Board, cell and mark values
//! - Win detection over the eight fixed lines
//! - Guard predicates checked before a move
//! - The snapshot history and its cursor
//!
//! Nothing here performs I/O; the only side effect is emitting `tracing`
//! events.

mod board;
mod guard;
mod history;
mod outcome;
mod rejection;

pub use board::{Board, Cell, Mark, Snapshot, CELL_COUNT};
pub use guard::Guard;
pub use history::{GameHistory, MoveRecord};
pub use outcome::{evaluate, Outcome, WINNING_LINES};
pub use rejection::Rejection;
