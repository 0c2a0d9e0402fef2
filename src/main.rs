//! # queens-solver
//!
//! `queens-solver` is a configurable command-line N-Queens solver. It
//! searches an N×N board for one arrangement of N mutually non-attacking
//! queens using depth-first backtracking, printing the arrangement as one
//! `(row; col)` coordinate line per queen.
//!
//! ## Features
//!
//! -   **First-solution search**: the engine stops at the first full
//!     placement; it never enumerates alternatives.
//! -   **Configurable ordering**: candidate columns can be tried left to
//!     right (the classic greedy order) or in a seeded shuffle.
//! -   **Verification**: option to re-check the found placement against the
//!     non-attack rules, independently of the search.
//! -   **Statistics**: placements tried, backtracks, search depth, timing,
//!     and memory usage.
//! -   **Memory Management**: uses `tikv-jemallocator` for memory
//!     allocation and provides memory usage statistics.
//!
//! ## Usage
//!
//! ```sh
//! # Solve the default 22x22 board
//! queens-solver
//!
//! # Solve an 8x8 board
//! queens-solver 8
//!
//! # Solve with an explicit subcommand, printing the board grid
//! queens-solver solve -n 8 --print-board
//!
//! # Try columns in a seeded shuffle instead of left to right
//! queens-solver solve -n 12 --ordering shuffled --seed 7
//! ```
//!
//! Boards with no arrangement (widths 2 and 3) are reported as UNSOLVABLE
//! and the process exits nonzero.

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use queens_solver::queens::board::{BoardSize, DEFAULT_BOARD_SIZE};
use queens_solver::queens::ordering::{ColumnOrder, Shuffled};
use queens_solver::queens::solution::Solution;
use queens_solver::queens::solver::{
    Backtracker, DefaultConfig, SearchStats, ShuffledConfig, SolverConfig,
};
use std::fmt;
use std::time::Duration;
use tikv_jemalloc_ctl::{epoch, stats};

/// Global allocator using `tikv-jemallocator` for potentially better
/// performance and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Defines the command-line interface for the queens-solver application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "queens-solver", version, about = "A configurable N-Queens solver")]
struct Cli {
    /// An optional board width. If provided without a subcommand, that
    /// board is solved directly; left out, the original width of 22 is
    /// used.
    size: Option<u32>,

    /// Specifies the subcommand to execute (e.g. `solve`, `completions`).
    #[clap(subcommand)]
    command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    common: CommonOptions,
}

/// Enumerates the available subcommands for the queens-solver.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve a single board.
    Solve {
        /// Board width, which is also the number of queens to place.
        #[arg(short = 'n', long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: u32,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
struct CommonOptions {
    /// Enable debug output, providing more verbose logging during the
    /// solving process.
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Enable verification of the found placement. If an arrangement is
    /// found, it's re-checked against the non-attack rules.
    #[arg(short, long, default_value_t = true)]
    verify: bool,

    /// Enable printing of performance and search statistics after solving.
    #[arg(short, long, default_value_t = true)]
    stats: bool,

    /// Print the solved board as an ASCII grid in addition to the
    /// coordinate lines.
    #[arg(short, long, default_value_t = false)]
    print_board: bool,

    /// Specifies the column ordering policy of the search.
    #[arg(long, value_enum, default_value_t = OrderingType::LeftToRight)]
    ordering: OrderingType,

    /// Seed for the shuffled ordering. Ignored for left-to-right.
    #[arg(long)]
    seed: Option<u64>,
}

/// The column ordering policies selectable from the command line.
#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
enum OrderingType {
    /// Try columns 1..=N in increasing order for every row.
    #[default]
    LeftToRight,
    /// Try each row's columns in a seeded permutation.
    Shuffled,
}

impl fmt::Display for OrderingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeftToRight => write!(f, "left-to-right"),
            Self::Shuffled => write!(f, "shuffled"),
        }
    }
}

/// Main entry point of the queens-solver application.
///
/// Parses command-line arguments, validates the board size, and runs the
/// search.
fn main() {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let (width, common) = match cli.command {
        Some(Commands::Solve { size, common }) => (size, common),
        _ => (board_width(cli.size), cli.common),
    };

    let size = match BoardSize::new(width) {
        Ok(size) => size,
        Err(e) => {
            eprintln!("Invalid board width {width}: {e}");
            std::process::exit(2);
        }
    };

    solve_and_report(size, &common);
}

/// Resolves the width of the board to solve when no subcommand was given.
const fn board_width(global: Option<u32>) -> u32 {
    match global {
        Some(width) => width,
        None => DEFAULT_BOARD_SIZE,
    }
}

/// Runs the search for `size`, prints the arrangement (or UNSOLVABLE), and
/// reports verification and statistics according to `common`.
fn solve_and_report(size: BoardSize, common: &CommonOptions) {
    // Advance epoch for jemalloc stats; helps isolate memory usage for the
    // solving phase.
    epoch::advance().unwrap();

    let (solution, elapsed, search_stats) = run_solver(size, common);

    // Advance epoch again to ensure memory stats capture everything up to
    // this point.
    epoch::advance().unwrap();

    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();
    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    if let Some(solution) = &solution {
        println!("{solution}");
        if common.print_board {
            println!("{}", solution.render_grid());
        }
    }

    if common.verify {
        verify_solution(&solution);
    }

    if common.stats {
        print_stats(
            elapsed,
            size,
            &search_stats,
            allocated_mib,
            resident_mib,
            solution.is_some(),
        );
    }

    if solution.is_none() {
        std::process::exit(1);
    }
}

/// Dispatches to a solver instance for the selected ordering policy.
fn run_solver(
    size: BoardSize,
    common: &CommonOptions,
) -> (Option<Solution>, Duration, SearchStats) {
    if common.debug {
        println!("Board width: {size}");
        println!("Ordering: {}", common.ordering);
    }

    match common.ordering {
        OrderingType::LeftToRight => {
            let mut solver = Backtracker::<DefaultConfig>::new(size);
            time_solve(&mut solver, common.debug)
        }
        OrderingType::Shuffled => {
            let columns = match common.seed {
                Some(seed) => Shuffled::with_seed(size, seed),
                None => Shuffled::new(size),
            };
            let mut solver = Backtracker::<ShuffledConfig>::with_columns(size, columns);
            time_solve(&mut solver, common.debug)
        }
    }
}

/// Times a single solve on an already configured solver.
fn time_solve<Config: SolverConfig + Clone>(
    solver: &mut Backtracker<Config>,
    debug: bool,
) -> (Option<Solution>, Duration, SearchStats) {
    let time = std::time::Instant::now();
    let solution = solver.solve();
    let elapsed = time.elapsed();

    if debug {
        println!("Solution: {solution:?}");
        println!("Time: {elapsed:?}");
    }

    (solution, elapsed, solver.stats())
}

/// Re-checks a found arrangement against the non-attack rules.
///
/// Prints whether the verification was successful. If verification fails,
/// it panics. If no arrangement exists, it prints "UNSOLVABLE".
fn verify_solution(solution: &Option<Solution>) {
    if let Some(solution) = solution {
        let ok = solution.verify();
        println!("Verified: {ok:?}");
        if !ok {
            panic!("Arrangement failed verification!");
        }
    } else {
        println!("UNSOLVABLE");
    }
}

/// Helper function to print a single statistic line in a formatted table
/// row.
fn stat_line(label: &str, value: impl fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate
/// (value/second).
fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of board and search statistics.
fn print_stats(
    elapsed: Duration,
    size: BoardSize,
    s: &SearchStats,
    allocated: f64, // MiB
    resident: f64,  // MiB
    solved: bool,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=========================[ Board Statistics ]========================");
    stat_line("Width", size);
    stat_line("Queens to place", size);
    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("Placements tried", s.placements, elapsed_secs);
    stat_line_with_rate("Backtracks", s.backtracks, elapsed_secs);
    stat_line("Deepest row reached", s.max_depth);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    stat_line("Duration (milliseconds)", elapsed.as_millis());
    println!("=====================================================================");

    if solved {
        println!("\nSOLVED");
    } else {
        println!("\nUNSOLVABLE");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_width_defaults_to_original_grid() {
        assert_eq!(board_width(None), 22);
    }

    #[test]
    fn test_board_width_prefers_the_global_argument() {
        assert_eq!(board_width(Some(8)), 8);
    }

    #[test]
    fn test_ordering_display_matches_value_enum_names() {
        for ordering in [OrderingType::LeftToRight, OrderingType::Shuffled] {
            let name = ordering
                .to_possible_value()
                .expect("no skipped variants")
                .get_name()
                .to_string();
            assert_eq!(ordering.to_string(), name);
        }
    }

    #[test]
    fn test_cli_parses_debug_assertions() {
        Cli::command().debug_assert();
    }
}
