//! Search execution loop.

use rand::Rng;
use tracing::{debug, trace};

use super::config::SearchConfig;
use super::create_rng;
use crate::board::Board;
use crate::family::PuzzleFamily;
use crate::strategy::{LocalSearch, Step};

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchResult {
    /// A board with fitness zero was reached.
    Solved(Board),

    /// The step budget ran out or the strategy got stuck.
    Exhausted,
}

impl SearchResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchResult::Solved(_))
    }

    pub fn solution(&self) -> Option<&Board> {
        match self {
            SearchResult::Solved(board) => Some(board),
            SearchResult::Exhausted => None,
        }
    }

    pub fn into_solution(self) -> Option<Board> {
        match self {
            SearchResult::Solved(board) => Some(board),
            SearchResult::Exhausted => None,
        }
    }
}

/// Result of a search run with statistics.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    pub result: SearchResult,

    /// Last board the search held: the solution, or where it stopped.
    pub board: Board,

    /// Fitness of [`board`](Self::board).
    pub fitness: usize,

    /// Number of strategy steps taken.
    pub steps: usize,

    /// Whether the run ended because the strategy reported
    /// [`Step::Stuck`].
    pub local_optimum: bool,
}

/// Executes a search.
pub struct SearchRunner;

impl SearchRunner {
    /// Runs a search with an RNG seeded from `config`.
    pub fn run<F, S>(family: &F, strategy: &mut S, board: Board, config: &SearchConfig) -> SearchReport
    where
        F: PuzzleFamily,
        S: LocalSearch,
    {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(family, strategy, board, config.max_steps, &mut rng)
    }

    /// Runs a search drawing randomness from `rng`.
    pub fn run_with_rng<F, S, R>(
        family: &F,
        strategy: &mut S,
        board: Board,
        max_steps: usize,
        rng: &mut R,
    ) -> SearchReport
    where
        F: PuzzleFamily,
        S: LocalSearch,
        R: Rng,
    {
        strategy.reset();
        debug!(
            event = "search_start",
            strategy = strategy.name(),
            family = family.name(),
            board = %board,
            max_steps,
        );

        let mut board = board;
        let mut steps = 0usize;

        loop {
            let fitness = family.fitness(&board);

            if fitness == 0 {
                debug!(event = "search_end", outcome = "solved", steps);
                return SearchReport {
                    result: SearchResult::Solved(board.clone()),
                    board,
                    fitness,
                    steps,
                    local_optimum: false,
                };
            }

            if steps >= max_steps {
                debug!(event = "search_end", outcome = "exhausted", steps, fitness);
                return SearchReport {
                    result: SearchResult::Exhausted,
                    board,
                    fitness,
                    steps,
                    local_optimum: false,
                };
            }

            match strategy.step(family, &board, rng) {
                Step::Moved(next) => board = next,
                Step::Stuck => {
                    debug!(event = "search_end", outcome = "local_optimum", steps, fitness);
                    return SearchReport {
                        result: SearchResult::Exhausted,
                        board,
                        fitness,
                        steps,
                        local_optimum: true,
                    };
                }
            }

            steps += 1;
            trace!(event = "step", step = steps, fitness);
        }
    }
}
