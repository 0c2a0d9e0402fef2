//! The published result of a successful search, plus independent
//! re-verification and rendering.
//!
//! Once the search fills every row the placement sequence is frozen into a
//! [`Solution`]: read-only, iterable in row order, and printable either as
//! coordinate lines or as an ASCII grid. [`Solution::verify`] re-checks the
//! non-attack invariant from scratch so a finished run can be validated
//! without trusting the search.

use crate::queens::board::{BoardSize, Position};
use bit_vec::BitVec;
use itertools::Itertools;
use rustc_hash::FxHashSet;
use std::fmt;
use std::slice::Iter;

/// A full non-attacking placement: exactly one queen per row of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    size: BoardSize,
    positions: Vec<Position>,
}

impl Solution {
    pub(crate) fn new(size: BoardSize, positions: &[Position]) -> Self {
        Self {
            size,
            positions: positions.to_vec(),
        }
    }

    /// The queens in row order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// The board this placement solves.
    #[must_use]
    pub const fn board_size(&self) -> BoardSize {
        self.size
    }

    /// Number of queens, equal to the board width for a verified solution.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the placement holds no queens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterates the queens in row order.
    pub fn iter(&self) -> Iter<'_, Position> {
        self.positions.iter()
    }

    /// Re-checks the whole placement independently of the search.
    ///
    /// Valid means: one queen per row `1..=N` in order, every column in
    /// `1..=N` and distinct, and no two queens on a shared diagonal. Column
    /// occupancy is tracked in a hash set, the two diagonal directions in
    /// bit vectors indexed by `row + col` and `row - col`.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn verify(&self) -> bool {
        let n = self.size.get();
        if self.positions.len() != n as usize {
            return false;
        }

        let mut cols = FxHashSet::default();
        let diagonals = 2 * n as usize - 1;
        let mut sum_diagonals = BitVec::from_elem(diagonals, false);
        let mut diff_diagonals = BitVec::from_elem(diagonals, false);

        for (i, p) in self.positions.iter().enumerate() {
            if p.row as usize != i + 1 || p.col == 0 || p.col > n {
                return false;
            }
            if !cols.insert(p.col) {
                return false;
            }

            let sum = (p.row + p.col - 2) as usize;
            let diff = (i64::from(p.row) - i64::from(p.col) + i64::from(n) - 1) as usize;
            if sum_diagonals[sum] || diff_diagonals[diff] {
                return false;
            }
            sum_diagonals.set(sum, true);
            diff_diagonals.set(diff, true);
        }

        true
    }

    /// Renders the board as an ASCII grid, one `*` per queen.
    #[must_use]
    pub fn render_grid(&self) -> String {
        let n = self.size.get() as usize;
        let row_separator = format!("{}+", "+---".repeat(n));

        let mut grid = String::new();
        for p in &self.positions {
            grid.push_str(&row_separator);
            grid.push('\n');
            for col in 1..=self.size.get() {
                grid.push_str(if p.col == col { "| * " } else { "|   " });
            }
            grid.push_str("|\n");
        }
        grid.push_str(&row_separator);
        grid
    }
}

impl fmt::Display for Solution {
    /// One `(row; col)` coordinate line per queen, in increasing row order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.positions.iter().format("\n"))
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a Position;
    type IntoIter = Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
