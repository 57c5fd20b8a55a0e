//! Reasons an intent can be turned away.

use thiserror::Error;

/// Why a `play` or `jump_to` was not applied.
///
/// Rejections are never fatal: the history is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("Game already won; jump to an earlier step to keep playing")]
    GameAlreadyWon,

    #[error("Cell index {index} is out of range (expected 0-8)")]
    IndexOutOfRange { index: usize },

    #[error("Step {step} is out of range (history has {len} snapshots)")]
    StepOutOfRange { step: usize, len: usize },

    /// An extra guard registered through the builder refused the move.
    #[error("Move rejected: {reason}")]
    GuardRejected { reason: String },
}
