//! Puzzle families.
//!
//! A [`PuzzleFamily`] bundles everything a search strategy needs to know
//! about one kind of board: how to score it, which boards are one move
//! away, and how to produce and check instances. The strategies in
//! [`crate::strategy`] are generic over this trait.
//!
//! - [`EightPuzzle`]: sliding tiles on a 3×3 grid.
//! - [`NQueens`]: one queen per column on an n×n chessboard.

mod eight_puzzle;
mod n_queens;

pub use eight_puzzle::{apply_move, is_solvable, Direction, EightPuzzle, PUZZLE_CELLS};
pub use n_queens::NQueens;

use rand::Rng;

use crate::board::Board;
use crate::error::BoardError;

/// Defines one puzzle family for local search.
///
/// # Minimization
///
/// Fitness is a non-negative collision or distance count. Zero is the
/// unique solved condition.
///
/// # Examples
///
/// ```
/// use hillclimb::board::Board;
/// use hillclimb::family::{NQueens, PuzzleFamily};
///
/// let queens = NQueens::new(4);
/// let board = Board::new(vec![0, 0, 0, 0]);
/// assert_eq!(queens.fitness(&board), 6);
/// assert_eq!(queens.neighbors(&board).len(), 12);
/// ```
pub trait PuzzleFamily: Send + Sync {
    /// Short human-readable family name.
    fn name(&self) -> &'static str;

    /// Scores a board. Lower is better, zero is solved.
    fn fitness(&self, board: &Board) -> usize;

    /// All boards reachable with one legal move, in a fixed order.
    fn neighbors(&self, board: &Board) -> Vec<Board>;

    /// One uniformly chosen board reachable with one legal move, or `None`
    /// when the board has no neighbor at all.
    fn random_neighbor<R: Rng>(&self, board: &Board, rng: &mut R) -> Option<Board>;

    /// Annealing start temperature for this board's problem size.
    fn initial_temperature(&self, board: &Board) -> f64;

    /// Checks that a board is a well-formed instance of this family.
    fn validate(&self, board: &Board) -> Result<(), BoardError>;

    /// Creates a random instance.
    fn generate<R: Rng>(&self, rng: &mut R) -> Board;

    /// Whether the board is solved.
    fn is_solved(&self, board: &Board) -> bool {
        self.fitness(board) == 0
    }
}

fn check_range(board: &Board, expected_len: usize, bound: usize) -> Result<(), BoardError> {
    if board.len() != expected_len {
        return Err(BoardError::Length {
            expected: expected_len,
            found: board.len(),
        });
    }
    match board.cells().iter().enumerate().find(|&(_, &v)| v >= bound) {
        Some((position, &value)) => Err(BoardError::OutOfRange {
            position,
            value,
            bound,
        }),
        None => Ok(()),
    }
}
