//! Search driver.
//!
//! Runs a [`LocalSearch`] strategy from a starting board until the board
//! is solved, the step budget is used up, or the strategy reports a local
//! optimum.
//!
//! # Algorithm
//!
//! 1. Evaluate the current board; fitness 0 returns `Solved`
//! 2. If `max_steps` steps were taken, return `Exhausted`
//! 3. Ask the strategy for one step; `Stuck` returns `Exhausted`
//! 4. Continue from the returned board

mod config;
mod runner;

pub use config::SearchConfig;
pub use runner::{SearchReport, SearchResult, SearchRunner};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::family::PuzzleFamily;
use crate::strategy::LocalSearch;

/// Runs one search and returns only its result.
///
/// # Examples
///
/// ```
/// use hillclimb::board::Board;
/// use hillclimb::family::EightPuzzle;
/// use hillclimb::search::{run, SearchResult};
/// use hillclimb::strategy::SteepestAscent;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let board: Board = "1 0 2 3 4 5 6 7 8".parse().unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
/// let result = run(&EightPuzzle::default(), &mut SteepestAscent, board, 10, &mut rng);
/// assert_eq!(result, SearchResult::Solved(EightPuzzle::goal()));
/// ```
pub fn run<F, S, R>(
    family: &F,
    strategy: &mut S,
    board: Board,
    max_steps: usize,
    rng: &mut R,
) -> SearchResult
where
    F: PuzzleFamily,
    S: LocalSearch,
    R: Rng,
{
    SearchRunner::run_with_rng(family, strategy, board, max_steps, rng).result
}

/// Creates the crate's seeded random number generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
