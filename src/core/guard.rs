//! Guard predicates checked before a move is applied.
//!
//! Guards are pure: they look at the visible board and the requested cell
//! and decide whether the move may proceed. A failing guard names the
//! [`Rejection`] handed back to the caller.

use super::board::Board;
use super::outcome::evaluate;
use super::rejection::Rejection;
use std::fmt;
use std::sync::Arc;

/// Pure predicate that decides whether a move may be played.
///
/// # Example
///
/// ```rust
/// use timetoe::{Board, Guard, Rejection};
///
/// // House rule: the opening move may not take the centre.
/// let no_centre_opening = Guard::new("centre opening is not allowed", |board: &Board, index| {
///     !(board.occupied() == 0 && index == 4)
/// });
///
/// assert!(no_centre_opening.check(&Board::new(), 0).is_ok());
/// assert_eq!(
///     no_centre_opening.check(&Board::new(), 4),
///     Err(Rejection::GuardRejected {
///         reason: "centre opening is not allowed".to_string()
///     })
/// );
/// ```
#[derive(Clone)]
pub struct Guard {
    predicate: Arc<dyn Fn(&Board, usize) -> bool + Send + Sync>,
    rejection: GuardRejection,
}

#[derive(Clone)]
enum GuardRejection {
    Fixed(Rejection),
    WithIndex(&'static str, fn(usize) -> Rejection),
}

impl Guard {
    /// Create a guard from a pure predicate.
    ///
    /// When the predicate returns `false` the move is refused with
    /// [`Rejection::GuardRejected`] carrying `reason`.
    pub fn new<F>(reason: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Board, usize) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
            rejection: GuardRejection::Fixed(Rejection::GuardRejected {
                reason: reason.into(),
            }),
        }
    }

    fn builtin<F>(rejection: GuardRejection, predicate: F) -> Self
    where
        F: Fn(&Board, usize) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
            rejection,
        }
    }

    /// Refuses indices off the board.
    pub fn in_range() -> Self {
        Self::builtin(
            GuardRejection::WithIndex("IndexOutOfRange", |index| {
                Rejection::IndexOutOfRange { index }
            }),
            |board, index| board.get(index).is_some(),
        )
    }

    /// Refuses any move once the visible board has a winner.
    pub fn not_won() -> Self {
        Self::builtin(
            GuardRejection::Fixed(Rejection::GameAlreadyWon),
            |board, _| !evaluate(board).is_won(),
        )
    }

    /// Refuses moves onto an occupied cell.
    pub fn cell_empty() -> Self {
        Self::builtin(
            GuardRejection::WithIndex("CellOccupied", |index| Rejection::CellOccupied { index }),
            |board, index| board.get(index).is_some_and(|c| c.is_empty()),
        )
    }

    /// The guards every game enforces, in evaluation order.
    pub fn standard() -> Vec<Guard> {
        vec![Self::in_range(), Self::not_won(), Self::cell_empty()]
    }

    /// Check the guard against the visible board.
    pub fn check(&self, board: &Board, index: usize) -> Result<(), Rejection> {
        if (self.predicate)(board, index) {
            return Ok(());
        }
        Err(match &self.rejection {
            GuardRejection::Fixed(rejection) => rejection.clone(),
            GuardRejection::WithIndex(_, make) => make(index),
        })
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rejection = match &self.rejection {
            GuardRejection::Fixed(rejection) => rejection.to_string(),
            GuardRejection::WithIndex(kind, _) => kind.to_string(),
        };
        f.debug_struct("Guard")
            .field("rejects_with", &rejection)
            .finish_non_exhaustive()
    }
}
