//! Build errors for the game builder.

use crate::core::Rejection;
use crate::view::Symbols;
use thiserror::Error;

/// Errors that can occur when building a game.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("Display symbols must be distinct, got {symbols:?}")]
    DuplicateSymbols { symbols: Symbols },

    #[error("Replay move {step} (cell {index}) was rejected: {rejection}")]
    ReplayRejected {
        step: usize,
        index: usize,
        #[source]
        rejection: Rejection,
    },
}
