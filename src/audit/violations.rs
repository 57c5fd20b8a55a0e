//! Invariant violations found by an audit.

use crate::core::Mark;
use thiserror::Error;

/// A history invariant that does not hold.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Violation {
    #[error("Starting snapshot is not empty ({occupied} cells occupied)")]
    NonEmptyStart { occupied: usize },

    #[error("Snapshot {step} changes {changed} cells (expected exactly 1)")]
    NotSingleMove { step: usize, changed: usize },

    #[error("Snapshot {step} overwrites occupied cell {index}")]
    OverwroteCell { step: usize, index: usize },

    #[error("Snapshot {step} places {found}, expected {expected}")]
    WrongMark {
        step: usize,
        expected: Mark,
        found: Mark,
    },

    #[error("Snapshot {step} follows a board that was already won")]
    PlayedAfterWin { step: usize },

    #[error("Cursor {cursor} is out of bounds (history has {len} snapshots)")]
    CursorOutOfBounds { cursor: usize, len: usize },

    #[error("Move record for snapshot {step} does not match the board change")]
    RecordMismatch { step: usize },

    #[error("History has {snapshots} snapshots but {moves} move records")]
    RecordCount { snapshots: usize, moves: usize },
}
