//! Timetoe: tic-tac-toe game state with time travel
//!
//! Timetoe is the model half of a tic-tac-toe UI. It keeps every board
//! position as an immutable snapshot, lets the caller jump to any recorded
//! step, and derives whose turn it is and who has won. Rendering is left to
//! the presentation layer, which sends intents and reads back a [`View`].
//!
//! # Core Concepts
//!
//! - **Board**: nine cells in row-major order, evaluated by [`evaluate`]
//! - **History**: append-and-truncate sequence of snapshots with a cursor
//! - **Guards**: pure predicates that must pass before a move is applied
//! - **View**: read-only projection for one rendered frame
//!
//! # Example
//!
//! ```rust
//! use timetoe::{GameHistory, Mark, Outcome, Rejection, Status};
//!
//! let mut game = GameHistory::new();
//! for cell in [0, 3, 1, 4] {
//!     game.play(cell).unwrap();
//! }
//! assert_eq!(game.current_view().winner, Outcome::NoWinner);
//!
//! game.play(2).unwrap();
//! let view = game.current_view();
//! assert_eq!(view.winner, Outcome::Winner(Mark::X));
//! assert_eq!(view.status, Status::Winner(Mark::X));
//! assert_eq!(game.play(5), Err(Rejection::GameAlreadyWon));
//!
//! // Travel back and the game is open again.
//! game.jump_to(2).unwrap();
//! assert_eq!(game.current_view().next_mark, Mark::X);
//! ```

pub mod audit;
pub mod builder;
pub mod core;
pub mod view;

// Re-export commonly used types
pub use crate::builder::{BuildError, GameBuilder};
pub use crate::core::{
    evaluate, Board, Cell, GameHistory, Guard, Mark, MoveRecord, Outcome, Rejection, Snapshot,
};
pub use crate::view::{MoveEntry, Status, Symbols, View};
