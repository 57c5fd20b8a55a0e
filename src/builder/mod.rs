//! Builder API for configuring games.
//!
//! This module provides a fluent builder for setting display symbols,
//! registering house-rule guards and seeding a game from a recorded move
//! list.

pub mod error;
pub mod game;

pub use error::BuildError;
pub use game::GameBuilder;

use crate::core::GameHistory;

/// Rebuild a game from a recorded list of cells, with default settings.
///
/// # Example
///
/// ```
/// use timetoe::builder::replayed;
///
/// let game = replayed([0, 4, 8]).unwrap();
/// assert_eq!(game.len(), 4);
/// assert_eq!(game.cursor(), 3);
/// ```
pub fn replayed(moves: impl IntoIterator<Item = usize>) -> Result<GameHistory, BuildError> {
    GameBuilder::new().replay(moves).build()
}
