//! Column ordering policies for the placement search.
//!
//! The order in which candidate columns are tried is a tie-break policy, not
//! a correctness requirement: any order yields a valid arrangement, but a
//! different first one. [`LeftToRight`] preserves the classic
//! leftmost-column-first behavior; [`Shuffled`] permutes each row's
//! candidates from a fixed seed.

use crate::queens::board::BoardSize;
use std::fmt::Debug;
use std::ops::RangeInclusive;

/// Seed used by [`Shuffled`] when none is supplied.
pub const DEFAULT_SEED: u64 = 7919;

/// Supplies the candidate columns for a row, in the order they should be
/// tried.
pub trait ColumnOrder: Clone + Debug {
    /// Iterator over candidate columns in `1..=N`.
    type Columns: Iterator<Item = u32>;

    /// Creates the policy for a board of the given size.
    fn new(size: BoardSize) -> Self;

    /// The candidate columns for `row`, each yielded exactly once.
    fn columns(&self, row: u32) -> Self::Columns;
}

/// Strictly increasing column order, `1..=N` for every row.
///
/// The first complete arrangement found under this policy is the one the
/// row-by-row depth-first search reaches greedily; it is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeftToRight(u32);

impl ColumnOrder for LeftToRight {
    type Columns = RangeInclusive<u32>;

    fn new(size: BoardSize) -> Self {
        Self(size.get())
    }

    fn columns(&self, _row: u32) -> Self::Columns {
        1..=self.0
    }
}

/// Seeded per-row permutation of the candidate columns.
///
/// Deterministic for a given seed; two solvers sharing a seed explore the
/// same tree and find the same arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shuffled {
    width: u32,
    seed: u64,
}

impl Shuffled {
    /// Creates the policy with an explicit seed.
    #[must_use]
    pub const fn with_seed(size: BoardSize, seed: u64) -> Self {
        Self {
            width: size.get(),
            seed,
        }
    }
}

impl ColumnOrder for Shuffled {
    type Columns = std::vec::IntoIter<u32>;

    fn new(size: BoardSize) -> Self {
        Self::with_seed(size, DEFAULT_SEED)
    }

    fn columns(&self, row: u32) -> Self::Columns {
        let mut cols: Vec<u32> = (1..=self.width).collect();
        // Each row gets its own stream so the permutations differ per row
        // while staying reproducible from the single seed.
        let mut rng = fastrand::Rng::with_seed(self.seed ^ (u64::from(row) << 32));
        rng.shuffle(&mut cols);
        cols.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn size(width: u32) -> BoardSize {
        BoardSize::new(width).expect("nonzero width")
    }

    #[test]
    fn test_left_to_right_is_ascending() {
        let order = LeftToRight::new(size(6));
        assert_eq!(order.columns(1).collect_vec(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(order.columns(4).collect_vec(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_shuffled_yields_a_permutation() {
        let order = Shuffled::with_seed(size(8), 1);
        let cols = order.columns(3).sorted().collect_vec();
        assert_eq!(cols, (1..=8).collect_vec());
    }

    #[test]
    fn test_shuffled_is_deterministic_per_seed() {
        let a = Shuffled::with_seed(size(8), 99);
        let b = Shuffled::with_seed(size(8), 99);
        for row in 1..=8 {
            assert_eq!(a.columns(row).collect_vec(), b.columns(row).collect_vec());
        }
    }

    #[test]
    fn test_shuffled_rows_differ() {
        let order = Shuffled::with_seed(size(8), 5);
        let permutations = (1..=8).map(|row| order.columns(row).collect_vec());
        assert!(permutations.dedup().count() > 1);
    }
}
