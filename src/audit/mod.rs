//! Validation-based audit of a game history.
//!
//! A history built through [`GameHistory::play`] always satisfies its
//! invariants; the audit exists to check that claim in tests and to vet
//! histories assembled by other means. It uses Stillwater's `Validation`
//! to report every violation in one pass rather than the first one.
//!
//! # Example
//!
//! ```rust
//! use timetoe::audit::audit;
//! use timetoe::GameHistory;
//!
//! let mut game = GameHistory::new();
//! game.play(4).unwrap();
//! game.play(0).unwrap();
//!
//! assert!(audit(&game).is_success());
//! ```

pub mod rules;
pub mod violations;

pub use rules::{audit_parts, AuditResult};
pub use violations::Violation;

use crate::core::GameHistory;

/// Audit a history, accumulating ALL violations.
pub fn audit(history: &GameHistory) -> AuditResult {
    audit_parts(history.snapshots(), history.moves(), history.cursor())
}
