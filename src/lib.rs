//! Local search over combinatorial puzzles.
//!
//! Generates and solves 8-puzzle and n-queens instances with four
//! local-search strategies and reports success rate and search cost:
//!
//! - **Random walk** ([`RandomRestart`](strategy::RandomRestart)): takes a
//!   random legal move every step.
//! - **First-choice hill climbing** ([`FirstChoice`](strategy::FirstChoice)):
//!   takes a random move only if it is not worse.
//! - **Steepest-ascent hill climbing**
//!   ([`SteepestAscent`](strategy::SteepestAscent)): takes the best move,
//!   breaking ties at random, and stops at a local optimum.
//! - **Simulated annealing**
//!   ([`SimulatedAnnealing`](strategy::SimulatedAnnealing)): takes
//!   improving moves and other moves with a temperature-dependent
//!   probability.
//!
//! # Architecture
//!
//! [`board::Board`] is a plain value type. A [`family::PuzzleFamily`]
//! supplies fitness and neighbors for one kind of board, a
//! [`strategy::LocalSearch`] makes one decision per call, and the
//! [`search`] driver iterates it under a step budget. [`eval`] runs a
//! strategy over a batch of boards and produces CSV-ready records.
//!
//! # Example
//!
//! ```
//! use hillclimb::board::Board;
//! use hillclimb::family::NQueens;
//! use hillclimb::search::{SearchConfig, SearchRunner};
//! use hillclimb::strategy::SteepestAscent;
//!
//! let config = SearchConfig::default().with_max_steps(200).with_seed(7);
//! let board = Board::new(vec![1, 3, 0, 2]);
//! let report = SearchRunner::run(&NQueens::new(4), &mut SteepestAscent, board, &config);
//! assert!(report.result.is_solved());
//! ```

pub mod board;
pub mod error;
pub mod eval;
pub mod family;
pub mod heuristic;
pub mod search;
pub mod strategy;

pub use error::{BoardError, ConfigError, Error, Result};
