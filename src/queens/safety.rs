//! Conflict detection for speculative placements.
//!
//! The check is a pure predicate over the current placement sequence: a
//! candidate is safe when no previously placed queen shares its column or
//! either diagonal. Rows need no check because the search assigns exactly
//! one queen per row in increasing row order.

use crate::queens::board::Position;

/// Whether two queens attack each other along a row, column, or diagonal.
///
/// Diagonal adjacency is an integer absolute-difference comparison; no
/// floating point is involved.
#[must_use]
pub const fn attacks(a: Position, b: Position) -> bool {
    a.row == b.row || a.col == b.col || a.row.abs_diff(b.row) == a.col.abs_diff(b.col)
}

/// Whether `candidate` is non-attacking with respect to every *other* queen
/// in `placed`.
///
/// The candidate is expected to already be appended to the sequence, so
/// entries on the candidate's own row (the candidate itself) are skipped.
/// An otherwise empty sequence is trivially safe.
#[must_use]
pub fn is_safe(placed: &[Position], candidate: Position) -> bool {
    for &queen in placed {
        if queen.row == candidate.row {
            continue;
        }
        if attacks(queen, candidate) {
            return false;
        }
    }

    true
}
