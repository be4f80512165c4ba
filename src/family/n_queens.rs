//! The n-queens problem, one queen per column.

use rand::Rng;

use super::{check_range, PuzzleFamily};
use crate::board::Board;
use crate::error::BoardError;
use crate::heuristic::queens_collisions;

/// The n-queens family.
///
/// Cell `c` of a board holds the row of the queen in column `c`. A move
/// reassigns one column to a different row.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NQueens {
    /// Board size used by [`generate`](PuzzleFamily::generate) and
    /// [`validate`](PuzzleFamily::validate). Moves follow the length of
    /// the board they are given.
    pub n: usize,
}

impl NQueens {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Family sized to match a batch of boards, taking `n` from the first
    /// board. `None` for an empty batch.
    ///
    /// # Examples
    ///
    /// ```
    /// use hillclimb::board::parse_boards;
    /// use hillclimb::family::NQueens;
    ///
    /// let boards = parse_boards("1 3 0 2\n0 0 0 0\n").unwrap();
    /// assert_eq!(NQueens::sized_for(&boards).map(|q| q.n), Some(4));
    /// ```
    pub fn sized_for(boards: &[Board]) -> Option<Self> {
        boards.first().map(|board| Self::new(board.len()))
    }
}

impl Default for NQueens {
    fn default() -> Self {
        Self::new(8)
    }
}

impl PuzzleFamily for NQueens {
    fn name(&self) -> &'static str {
        "n-queens"
    }

    fn fitness(&self, board: &Board) -> usize {
        queens_collisions(board)
    }

    fn neighbors(&self, board: &Board) -> Vec<Board> {
        let n = board.len();
        let mut result = Vec::with_capacity(n * n.saturating_sub(1));
        for col in 0..n {
            for row in 0..n {
                if board[col] != row {
                    result.push(board.with_cell(col, row));
                }
            }
        }
        result
    }

    fn random_neighbor<R: Rng>(&self, board: &Board, rng: &mut R) -> Option<Board> {
        let n = board.len();
        if n < 2 {
            return None;
        }
        loop {
            let row = rng.random_range(0..n);
            let col = rng.random_range(0..n);
            if board[col] != row {
                return Some(board.with_cell(col, row));
            }
        }
    }

    fn initial_temperature(&self, board: &Board) -> f64 {
        (board.len() * board.len()) as f64
    }

    fn validate(&self, board: &Board) -> Result<(), BoardError> {
        check_range(board, self.n, self.n)
    }

    fn generate<R: Rng>(&self, rng: &mut R) -> Board {
        Board::new((0..self.n).map(|_| rng.random_range(0..self.n)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::parse_boards;
    use crate::eval::evaluate;
    use crate::search::SearchConfig;
    use crate::strategy::SteepestAscent;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_neighbors_count_and_order() {
        let queens = NQueens::new(3);
        let board = Board::new(vec![0, 1, 2]);
        let neighbors = queens.neighbors(&board);
        assert_eq!(neighbors.len(), 6);
        assert_eq!(neighbors[0].cells(), &[1, 1, 2]);
        assert_eq!(neighbors[1].cells(), &[2, 1, 2]);
        assert_eq!(neighbors[2].cells(), &[0, 0, 2]);
        assert!(neighbors.iter().all(|b| b != &board));
    }

    #[test]
    fn test_single_queen_has_no_neighbor() {
        let queens = NQueens::new(1);
        let board = Board::new(vec![0]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(queens.neighbors(&board).is_empty());
        assert!(queens.random_neighbor(&board, &mut rng).is_none());
    }

    #[test]
    fn test_initial_temperature_is_n_squared() {
        let queens = NQueens::new(8);
        let board = Board::new(vec![0; 8]);
        assert!((queens.initial_temperature(&board) - 64.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate() {
        let queens = NQueens::new(4);
        assert!(queens.validate(&Board::new(vec![1, 3, 0, 2])).is_ok());
        assert!(queens.validate(&Board::new(vec![3, 3, 3, 3])).is_ok());
        assert_eq!(
            queens.validate(&Board::new(vec![1, 3, 0])),
            Err(BoardError::Length {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            queens.validate(&Board::new(vec![1, 4, 0, 2])),
            Err(BoardError::OutOfRange {
                position: 1,
                value: 4,
                bound: 4
            })
        );
    }

    #[test]
    fn test_generate_is_valid() {
        let queens = NQueens::new(8);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let board = queens.generate(&mut rng);
            assert!(queens.validate(&board).is_ok());
        }
    }

    #[test]
    fn test_sized_for_takes_first_board_length() {
        let boards = parse_boards("1 3 0 2\n0 0 0 0\n").unwrap();
        let queens = NQueens::sized_for(&boards).unwrap();
        assert_eq!(queens.n, 4);
        for board in &boards {
            assert!(queens.validate(board).is_ok());
        }
        assert!(NQueens::sized_for(&[]).is_none());
    }

    #[test]
    fn test_sized_for_rejects_mixed_sizes() {
        let boards = parse_boards("1 3 0 2\n0 0 0 0 0\n").unwrap();
        let queens = NQueens::sized_for(&boards).unwrap();
        assert_eq!(
            queens.validate(&boards[1]),
            Err(BoardError::Length {
                expected: 4,
                found: 5
            })
        );
    }

    #[test]
    fn test_four_queens_file_is_searchable() {
        let boards = parse_boards("1 3 0 2\n0 0 0 0\n").unwrap();
        let queens = NQueens::sized_for(&boards).unwrap();
        let config = SearchConfig::default().with_max_steps(200).with_seed(1);
        let records = evaluate(&queens, &SteepestAscent, &boards, &config).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].success);
        assert_eq!(records[0].steps, 0);
    }

    fn arb_queens() -> impl Strategy<Value = Board> {
        (2usize..9).prop_flat_map(|n| prop::collection::vec(0..n, n).prop_map(Board::new))
    }

    proptest! {
        #[test]
        fn prop_random_neighbor_changes_one_column(board in arb_queens(), seed in any::<u64>()) {
            let queens = NQueens::new(board.len());
            let mut rng = StdRng::seed_from_u64(seed);
            let next = queens.random_neighbor(&board, &mut rng).unwrap();
            let changed = board
                .cells()
                .iter()
                .zip(next.cells())
                .filter(|(a, b)| a != b)
                .count();
            prop_assert_eq!(changed, 1);
            prop_assert!(queens.validate(&next).is_ok());
        }
    }
}
