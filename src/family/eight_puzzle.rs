//! The 8-puzzle.

use rand::Rng;

use super::{check_range, PuzzleFamily};
use crate::board::Board;
use crate::error::BoardError;
use crate::heuristic::{puzzle_distance, puzzle_distance_excluding_blank, PUZZLE_SIDE};

/// Number of cells on an 8-puzzle board.
pub const PUZZLE_CELLS: usize = PUZZLE_SIDE * PUZZLE_SIDE;

/// Direction the blank moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in sampling order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Whether the blank at `blank` may move this way.
    pub fn is_legal(self, blank: usize) -> bool {
        match self {
            Direction::Up => blank >= PUZZLE_SIDE,
            Direction::Down => blank < PUZZLE_CELLS - PUZZLE_SIDE,
            Direction::Left => blank % PUZZLE_SIDE != 0,
            Direction::Right => (blank + 1) % PUZZLE_SIDE != 0,
        }
    }

    /// The cell the blank swaps with, if the move is legal.
    pub fn target(self, blank: usize) -> Option<usize> {
        if !self.is_legal(blank) {
            return None;
        }
        Some(match self {
            Direction::Up => blank - PUZZLE_SIDE,
            Direction::Down => blank + PUZZLE_SIDE,
            Direction::Left => blank - 1,
            Direction::Right => blank + 1,
        })
    }

    /// The direction that undoes this one.
    pub fn inverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Slides the blank one cell in `direction`.
///
/// Returns `None` if the board has no blank or the move leaves the grid.
pub fn apply_move(board: &Board, direction: Direction) -> Option<Board> {
    let blank = board.position(0)?;
    let target = direction.target(blank)?;
    Some(board.with_swap(blank, target))
}

/// Whether the solved layout is reachable from `board`.
///
/// On a 3-wide grid this holds exactly when the number of inversions
/// among the tiles (blank ignored) is even.
pub fn is_solvable(board: &Board) -> bool {
    let tiles: Vec<usize> = board.cells().iter().copied().filter(|&v| v != 0).collect();
    let mut inversions = 0;
    for i in 0..tiles.len() {
        for j in (i + 1)..tiles.len() {
            if tiles[i] > tiles[j] {
                inversions += 1;
            }
        }
    }
    inversions % 2 == 0
}

/// The 8-puzzle family.
///
/// # Examples
///
/// ```
/// use hillclimb::board::Board;
/// use hillclimb::family::{EightPuzzle, PuzzleFamily};
///
/// let puzzle = EightPuzzle::default();
/// let board: Board = "1 0 2 3 4 5 6 7 8".parse().unwrap();
/// assert_eq!(puzzle.fitness(&board), 2);
/// assert_eq!(puzzle.neighbors(&board).len(), 3);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EightPuzzle {
    /// Leave the blank out of the distance sum.
    pub exclude_blank: bool,

    /// Length of the random walk from the solved layout used by
    /// [`generate`](PuzzleFamily::generate).
    pub scramble_moves: usize,
}

impl Default for EightPuzzle {
    fn default() -> Self {
        Self {
            exclude_blank: false,
            scramble_moves: 30,
        }
    }
}

impl EightPuzzle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blank_excluded(mut self, exclude: bool) -> Self {
        self.exclude_blank = exclude;
        self
    }

    pub fn with_scramble_moves(mut self, n: usize) -> Self {
        self.scramble_moves = n;
        self
    }

    /// The solved layout `[0, 1, ..., 8]`.
    pub fn goal() -> Board {
        Board::new((0..PUZZLE_CELLS).collect())
    }

    /// Legal moves from `board` paired with the boards they produce.
    pub fn moves(board: &Board) -> Vec<(Direction, Board)> {
        Direction::ALL
            .iter()
            .filter_map(|&d| apply_move(board, d).map(|next| (d, next)))
            .collect()
    }
}

impl PuzzleFamily for EightPuzzle {
    fn name(&self) -> &'static str {
        "8-puzzle"
    }

    fn fitness(&self, board: &Board) -> usize {
        if self.exclude_blank {
            puzzle_distance_excluding_blank(board)
        } else {
            puzzle_distance(board)
        }
    }

    fn neighbors(&self, board: &Board) -> Vec<Board> {
        Self::moves(board).into_iter().map(|(_, next)| next).collect()
    }

    fn random_neighbor<R: Rng>(&self, board: &Board, rng: &mut R) -> Option<Board> {
        let blank = board.position(0)?;
        // every cell of a 3x3 grid has at least two legal directions
        loop {
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            if let Some(target) = direction.target(blank) {
                return Some(board.with_swap(blank, target));
            }
        }
    }

    fn initial_temperature(&self, board: &Board) -> f64 {
        board.len() as f64
    }

    fn validate(&self, board: &Board) -> Result<(), BoardError> {
        check_range(board, PUZZLE_CELLS, PUZZLE_CELLS)?;
        let mut seen = [false; PUZZLE_CELLS];
        for &value in board.cells() {
            if seen[value] {
                return Err(BoardError::Duplicate(value));
            }
            seen[value] = true;
        }
        Ok(())
    }

    fn generate<R: Rng>(&self, rng: &mut R) -> Board {
        let mut board = Self::goal();
        for _ in 0..self.scramble_moves {
            if let Some(next) = self.random_neighbor(&board, rng) {
                board = next;
            }
        }
        board
    }
}
