//! Builder for configuring and seeding games.

use crate::builder::error::BuildError;
use crate::core::{GameHistory, Guard};
use crate::view::Symbols;
use tracing::debug;

/// Builder for [`GameHistory`] with a fluent API.
#[derive(Debug, Clone, Default)]
pub struct GameBuilder {
    symbols: Symbols,
    guards: Vec<Guard>,
    replay: Vec<usize>,
}

impl GameBuilder {
    /// Create a new builder with default symbols and no extra guards.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display symbols.
    pub fn symbols(mut self, symbols: Symbols) -> Self {
        self.symbols = symbols;
        self
    }

    /// Add a guard checked after the standard ones.
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guards.push(guard);
        self
    }

    /// Play these cells in order once the game is built.
    pub fn replay(mut self, moves: impl IntoIterator<Item = usize>) -> Self {
        self.replay.extend(moves);
        self
    }

    /// Build the game.
    /// Returns an error if the symbols clash or a replayed move is rejected.
    pub fn build(self) -> Result<GameHistory, BuildError> {
        if !self.symbols.is_distinct() {
            return Err(BuildError::DuplicateSymbols {
                symbols: self.symbols,
            });
        }

        let mut game = GameHistory::with_config(self.guards, self.symbols);
        for (i, index) in self.replay.into_iter().enumerate() {
            game.play(index)
                .map_err(|rejection| BuildError::ReplayRejected {
                    step: i + 1,
                    index,
                    rejection,
                })?;
        }

        debug!(snapshots = game.len(), "game built");
        Ok(game)
    }
}
