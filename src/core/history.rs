//! Snapshot history with time travel.
//!
//! A [`GameHistory`] owns an append-and-truncate sequence of immutable board
//! snapshots and a cursor pointing at the one currently shown. Whose turn it
//! is comes from the cursor's parity and is never stored on its own.
//!
//! Playing after jumping back discards everything past the cursor. The
//! sequence is rebuilt rather than truncated in place, so a [`Snapshot`]
//! handed out earlier stays valid and unchanged.

use super::board::{Board, Mark, Snapshot};
use super::guard::Guard;
use super::outcome::{evaluate, Outcome};
use super::rejection::Rejection;
use crate::view::{Symbols, View};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::iter;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Record of a single accepted move.
///
/// `step` is the index of the snapshot the move produced, so the first move
/// of a game has `step == 1`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Snapshot index produced by this move
    pub step: usize,
    /// Cell the mark was placed on
    pub index: usize,
    /// Mark that was placed
    pub mark: Mark,
    /// When the move was played
    pub played_at: DateTime<Utc>,
}

/// Game state machine: snapshots, the moves that produced them, and a cursor.
///
/// # Example
///
/// ```rust
/// use timetoe::{GameHistory, Mark, Outcome, Rejection};
///
/// let mut game = GameHistory::new();
/// game.play(0).unwrap();
/// game.play(4).unwrap();
/// assert_eq!(game.len(), 3);
///
/// // Go back to the start and take a different line.
/// game.jump_to(0).unwrap();
/// game.play(8).unwrap();
/// assert_eq!(game.len(), 2);
///
/// let view = game.current_view();
/// assert_eq!(view.move_count, 1);
/// assert_eq!(view.next_mark, Mark::O);
/// assert_eq!(view.winner, Outcome::NoWinner);
///
/// assert_eq!(game.play(8), Err(Rejection::CellOccupied { index: 8 }));
/// ```
#[derive(Clone, Debug)]
pub struct GameHistory {
    snapshots: Vec<Snapshot>,
    moves: Vec<MoveRecord>,
    cursor: usize,
    guards: Vec<Guard>,
    symbols: Symbols,
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl GameHistory {
    /// Start a new game: one empty snapshot, cursor at 0.
    pub fn new() -> Self {
        Self::with_config(Vec::new(), Symbols::default())
    }

    /// Start a new game with extra guards (checked after the standard ones)
    /// and display symbols. Usually reached through [`crate::GameBuilder`].
    pub(crate) fn with_config(extra_guards: Vec<Guard>, symbols: Symbols) -> Self {
        let mut guards = Guard::standard();
        guards.extend(extra_guards);
        Self {
            snapshots: vec![Arc::new(Board::new())],
            moves: Vec::new(),
            cursor: 0,
            guards,
            symbols,
        }
    }

    /// Place the next mark on `index` of the visible board.
    ///
    /// On success the history past the cursor is discarded, the new
    /// snapshot is appended and the cursor moves onto it. On rejection
    /// nothing changes.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn play(&mut self, index: usize) -> Result<MoveRecord, Rejection> {
        let visible = self.current();

        if let Err(rejection) = self.guards.iter().try_for_each(|g| g.check(&visible, index)) {
            debug!(%rejection, "play rejected");
            return Err(rejection);
        }

        let mark = self.next_mark();
        let next = visible
            .with_mark(index, mark)
            .ok_or(Rejection::IndexOutOfRange { index })?;

        let discarded = self.snapshots.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "discarding future history");
        }

        let step = self.cursor + 1;
        let record = MoveRecord {
            step,
            index,
            mark,
            played_at: Utc::now(),
        };

        // Rebuild both sequences; earlier snapshot handles stay intact.
        self.snapshots = self.snapshots[..step]
            .iter()
            .cloned()
            .chain(iter::once(Arc::new(next)))
            .collect();
        self.moves = self.moves[..self.cursor]
            .iter()
            .cloned()
            .chain(iter::once(record.clone()))
            .collect();
        self.cursor = step;

        debug_assert_eq!(self.snapshots.len(), self.cursor + 1);
        debug!(step, %mark, "move accepted");
        Ok(record)
    }

    /// Move the cursor to `step` without touching the snapshots.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), Rejection> {
        let len = self.snapshots.len();
        if step >= len {
            let rejection = Rejection::StepOutOfRange { step, len };
            debug!(%rejection, "jump rejected");
            return Err(rejection);
        }
        self.cursor = step;
        debug!(step, "jumped");
        Ok(())
    }

    /// Read-only projection of the visible snapshot for rendering.
    pub fn current_view(&self) -> View {
        View::project(self)
    }

    /// Currently visible snapshot.
    pub fn current(&self) -> Snapshot {
        Arc::clone(&self.snapshots[self.cursor])
    }

    /// Snapshot at `step`, if recorded.
    pub fn snapshot(&self, step: usize) -> Option<Snapshot> {
        self.snapshots.get(step).cloned()
    }

    /// All recorded snapshots, game start first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Moves that produced snapshots `1..len()`, in order.
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// Index of the visible snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded snapshots (never zero).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least the starting board.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Mark that plays next from the visible snapshot.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.cursor)
    }

    /// Outcome of the visible snapshot.
    pub fn winner(&self) -> Outcome {
        evaluate(&self.snapshots[self.cursor])
    }

    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }
}
