//! Defines the main backtracking placement engine.
//!
//! This module provides the `Backtracker` struct, which searches for one
//! arrangement of N non-attacking queens on an N×N board. The search is
//! row-by-row and depth-first: a queen is speculatively appended for the
//! current row, checked against every earlier queen, and either kept (the
//! search recurses to the next row) or removed again (the next candidate
//! column is tried). The first full placement found is kept and published;
//! the engine never enumerates alternatives.
//!
//! The `Backtracker` is generic over a `SolverConfig` trait, allowing the
//! column-ordering policy and the placement's backing storage to be plugged
//! in. A `DefaultConfig` preserves the classic leftmost-column-first
//! behavior.
//!
//! The core logic involves:
//! 1.  **Speculative placement:** append `(row, col)` to the shared
//!     placement sequence before it is checked.
//! 2.  **Conflict check:** query [`is_safe`] against all earlier queens.
//! 3.  **Backtracking:** when a candidate conflicts, or no column of a
//!     deeper row works out, pop the entry and try the next candidate.
//!     A call that fails leaves the sequence exactly as it found it.

use crate::queens::board::{BoardSize, DefaultStorage, Placement, Position, PositionStorage};
use crate::queens::ordering::{ColumnOrder, LeftToRight, Shuffled};
use crate::queens::safety::is_safe;
use crate::queens::solution::Solution;

/// Ties together the pluggable pieces of a solver instance.
pub trait SolverConfig {
    /// Column ordering policy.
    type Columns: ColumnOrder;
    /// Backing storage of the placement sequence.
    type Storage: PositionStorage;
}

/// Leftmost-column-first search over inline storage; the behavior of the
/// original fixed-grid program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultConfig;

impl SolverConfig for DefaultConfig {
    type Columns = LeftToRight;
    type Storage = DefaultStorage;
}

/// Seeded-permutation search over heap storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShuffledConfig;

impl SolverConfig for ShuffledConfig {
    type Columns = Shuffled;
    type Storage = Vec<Position>;
}

/// Counters gathered during a single `solve` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Speculative placements appended, successful or not.
    pub placements: usize,
    /// Speculative placements removed again.
    pub backtracks: usize,
    /// Deepest row for which a queen was (however briefly) placed.
    pub max_depth: usize,
}

/// Depth-first backtracking search for a single non-attacking placement.
///
/// The struct owns the shared placement sequence for the duration of the
/// search; nothing else writes to it. Recursion depth is bounded by the
/// board width, one stack frame per row.
#[derive(Debug, Clone)]
pub struct Backtracker<Config: SolverConfig + Clone = DefaultConfig> {
    size: BoardSize,
    placement: Placement<Config::Storage>,
    columns: Config::Columns,
    stats: SearchStats,
}

impl<Config: SolverConfig + Clone> Backtracker<Config> {
    /// Creates a solver for the given board with the config's default
    /// column ordering.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self::with_columns(size, Config::Columns::new(size))
    }

    /// Creates a solver with an explicitly constructed ordering policy,
    /// e.g. a [`Shuffled`] policy carrying a caller-chosen seed.
    #[must_use]
    pub fn with_columns(size: BoardSize, columns: Config::Columns) -> Self {
        Self {
            size,
            placement: Placement::new(),
            columns,
            stats: SearchStats::default(),
        }
    }

    /// Searches for an arrangement, starting from a fresh empty sequence.
    ///
    /// Returns `Some` with the first full placement reached under the
    /// configured column order, or `None` when no arrangement exists for
    /// this board (widths 2 and 3). Solving twice yields the same result;
    /// the sequence and counters are reset on entry.
    pub fn solve(&mut self) -> Option<Solution> {
        self.placement.clear();
        self.stats = SearchStats::default();

        if self.place_from(1) {
            Some(Solution::new(self.size, self.placement.as_slice()))
        } else {
            None
        }
    }

    /// Attempts to place the queen for `row` and, recursively, for every
    /// row below it.
    ///
    /// On success the sequence holds valid entries for `row..=N` on top of
    /// whatever it held at entry. On failure the sequence is exactly as it
    /// was at entry: every speculative append is matched by a pop.
    fn place_from(&mut self, row: u32) -> bool {
        for col in self.columns.columns(row) {
            let candidate = Position::new(row, col);
            self.placement.push(candidate);
            self.stats.placements += 1;
            self.stats.max_depth = self.stats.max_depth.max(self.placement.len());

            if is_safe(self.placement.as_slice(), candidate)
                && (row == self.size.get() || self.place_from(row + 1))
            {
                return true;
            }

            self.placement.pop();
            self.stats.backtracks += 1;
        }

        false
    }

    /// Counters for the most recent `solve` call.
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// The board this solver searches.
    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// The current placement sequence, in row order.
    ///
    /// Holds the found arrangement after a successful `solve`, and is empty
    /// after a failed one.
    #[must_use]
    pub fn placement(&self) -> &[Position] {
        self.placement.as_slice()
    }
}

impl<Config: SolverConfig + Clone> Default for Backtracker<Config> {
    /// A solver for the original fixed grid width of 22.
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn size(width: u32) -> BoardSize {
        BoardSize::new(width).expect("nonzero width")
    }

    fn columns_of(solution: &Solution) -> Vec<u32> {
        solution.iter().map(|p| p.col).collect_vec()
    }

    #[test]
    fn test_one_queen_board_has_unique_solution() {
        let mut solver = Backtracker::<DefaultConfig>::new(size(1));
        let solution = solver.solve().expect("1x1 board is solvable");
        assert_eq!(solution.positions(), &[Position::new(1, 1)]);
    }

    #[test]
    fn test_two_and_three_queen_boards_are_unsolvable() {
        for width in [2, 3] {
            let mut solver = Backtracker::<DefaultConfig>::new(size(width));
            assert_eq!(solver.solve(), None);
            // A failed top-level call leaves no speculative entries behind.
            assert!(solver.placement().is_empty());
        }
    }

    #[test]
    fn test_four_queens_leftmost_first_solution() {
        let mut solver = Backtracker::<DefaultConfig>::new(size(4));
        let solution = solver.solve().expect("4x4 board is solvable");
        assert_eq!(
            solution.positions(),
            &[
                Position::new(1, 2),
                Position::new(2, 4),
                Position::new(3, 1),
                Position::new(4, 3),
            ]
        );
        assert!(solution.verify());
    }

    #[test]
    fn test_eight_queens_leftmost_first_solution() {
        let mut solver = Backtracker::<DefaultConfig>::new(size(8));
        let solution = solver.solve().expect("8x8 board is solvable");
        assert_eq!(columns_of(&solution), vec![1, 5, 8, 6, 3, 7, 2, 4]);
        assert!(solution.verify());
    }

    #[test]
    fn test_solutions_verify_for_a_range_of_widths() {
        for width in [1, 4, 5, 6, 7, 8, 10, 12] {
            let mut solver = Backtracker::<DefaultConfig>::new(size(width));
            let solution = solver.solve().expect("board is solvable");
            assert_eq!(solution.len(), width as usize);
            assert!(solution.verify(), "width {width} produced an attack");
        }
    }

    #[test]
    fn test_default_solver_covers_the_original_grid() {
        let mut solver = Backtracker::<DefaultConfig>::default();
        assert_eq!(solver.size().get(), 22);
        let solution = solver.solve().expect("22x22 board is solvable");
        assert!(solution.verify());
    }

    #[test]
    fn test_solving_twice_is_deterministic() {
        let mut solver = Backtracker::<DefaultConfig>::new(size(8));
        let first = solver.solve().expect("solvable");
        let first_stats = solver.stats();
        let second = solver.solve().expect("solvable");
        assert_eq!(first, second);
        assert_eq!(first_stats, solver.stats());
    }

    #[test]
    fn test_stats_track_backtracking() {
        let mut solver = Backtracker::<DefaultConfig>::new(size(4));
        solver.solve().expect("solvable");
        let stats = solver.stats();
        // 4 queens survive; everything else tried was taken back.
        assert_eq!(stats.placements - stats.backtracks, 4);
        assert_eq!(stats.max_depth, 4);

        let mut unsolvable = Backtracker::<DefaultConfig>::new(size(3));
        assert_eq!(unsolvable.solve(), None);
        let stats = unsolvable.stats();
        assert_eq!(stats.placements, stats.backtracks);
    }

    #[test]
    fn test_shuffled_ordering_still_finds_valid_solutions() {
        for seed in [0, 1, 42] {
            let columns = Shuffled::with_seed(size(8), seed);
            let mut solver = Backtracker::<ShuffledConfig>::with_columns(size(8), columns);
            let solution = solver.solve().expect("8x8 board is solvable");
            assert!(solution.verify(), "seed {seed} produced an attack");
        }
    }

    #[test]
    fn test_shuffled_ordering_is_deterministic_per_seed() {
        let run = |seed| {
            let columns = Shuffled::with_seed(size(8), seed);
            let mut solver = Backtracker::<ShuffledConfig>::with_columns(size(8), columns);
            solver.solve().expect("solvable")
        };
        assert_eq!(run(7), run(7));
    }
}
