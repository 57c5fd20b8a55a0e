//! Audit checks over a snapshot sequence, using Validation.

use crate::audit::violations::Violation;
use crate::core::{evaluate, Board, Cell, Mark, MoveRecord, Snapshot};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of an audit: success, or every violation found.
pub type AuditResult = Validation<(), NonEmptyVec<Violation>>;

fn check(violation: Option<Violation>) -> AuditResult {
    match violation {
        Some(v) => Validation::fail(v),
        None => Validation::success(()),
    }
}

fn check_start(start: &Board) -> AuditResult {
    let occupied = start.occupied();
    check((occupied != 0).then_some(Violation::NonEmptyStart { occupied }))
}

fn check_cursor(cursor: usize, len: usize) -> AuditResult {
    check((cursor >= len).then_some(Violation::CursorOutOfBounds { cursor, len }))
}

fn check_record_count(snapshots: usize, moves: usize) -> AuditResult {
    check(
        (moves + 1 != snapshots).then_some(Violation::RecordCount { snapshots, moves }),
    )
}

/// Checks for the move from `prev` to `next`, producing snapshot `step`.
fn check_step(
    step: usize,
    prev: &Board,
    next: &Board,
    record: Option<&MoveRecord>,
) -> Vec<AuditResult> {
    let mut checks = Vec::new();

    if evaluate(prev).is_won() {
        checks.push(Validation::fail(Violation::PlayedAfterWin { step }));
    }

    let changed = prev.diff(next);
    let &[index] = changed.as_slice() else {
        checks.push(Validation::fail(Violation::NotSingleMove {
            step,
            changed: changed.len(),
        }));
        return checks;
    };

    if prev.get(index) != Some(Cell::Empty) {
        checks.push(Validation::fail(Violation::OverwroteCell { step, index }));
    }

    // Odd steps are X, even steps are O.
    let expected = Mark::for_step(step - 1);
    if let Some(found) = next.get(index).and_then(Cell::mark) {
        checks.push(check((found != expected).then_some(Violation::WrongMark {
            step,
            expected,
            found,
        })));

        if let Some(record) = record {
            let matches = record.step == step && record.index == index && record.mark == found;
            checks.push(check((!matches).then_some(Violation::RecordMismatch { step })));
        }
    }

    checks
}

/// Audit raw history parts, accumulating ALL violations.
///
/// `moves[n - 1]` is expected to describe the change from snapshot `n - 1`
/// to snapshot `n`.
pub fn audit_parts(snapshots: &[Snapshot], moves: &[MoveRecord], cursor: usize) -> AuditResult {
    let mut checks: Vec<AuditResult> = vec![
        check_cursor(cursor, snapshots.len()),
        check_record_count(snapshots.len(), moves.len()),
    ];

    if let Some(start) = snapshots.first() {
        checks.push(check_start(start));
    }

    for (i, pair) in snapshots.windows(2).enumerate() {
        let step = i + 1;
        checks.extend(check_step(step, &pair[0], &pair[1], moves.get(i)));
    }

    Validation::all_vec(checks).map(|_| ())
}
