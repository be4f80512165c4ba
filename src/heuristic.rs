//! Fitness functions. Zero means solved; lower is better.
//!
//! Neither function validates its input. A board of the wrong shape
//! yields a meaningless score.

use crate::board::Board;

/// Side length of the 8-puzzle grid.
pub const PUZZLE_SIDE: usize = 3;

/// Sum of Manhattan distances between each cell and the home of the
/// value it holds, blank included.
///
/// The home of value `v` is position `v`, so the solved layout is
/// `[0, 1, 2, 3, 4, 5, 6, 7, 8]`.
///
/// # Examples
///
/// ```
/// use hillclimb::board::Board;
/// use hillclimb::heuristic::puzzle_distance;
///
/// assert_eq!(puzzle_distance(&Board::new((0..9).collect())), 0);
/// assert_eq!(puzzle_distance(&Board::new(vec![1, 0, 2, 3, 4, 5, 6, 7, 8])), 2);
/// ```
pub fn puzzle_distance(board: &Board) -> usize {
    manhattan(board, false)
}

/// Like [`puzzle_distance`] but the blank does not count.
pub fn puzzle_distance_excluding_blank(board: &Board) -> usize {
    manhattan(board, true)
}

fn manhattan(board: &Board, skip_blank: bool) -> usize {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &value)| !(skip_blank && value == 0))
        .map(|(i, &value)| {
            (i / PUZZLE_SIDE).abs_diff(value / PUZZLE_SIDE)
                + (i % PUZZLE_SIDE).abs_diff(value % PUZZLE_SIDE)
        })
        .sum()
}

/// Number of unordered column pairs whose queens share a row or a
/// diagonal.
///
/// # Examples
///
/// ```
/// use hillclimb::board::Board;
/// use hillclimb::heuristic::queens_collisions;
///
/// assert_eq!(queens_collisions(&Board::new(vec![1, 3, 0, 2])), 0);
/// assert_eq!(queens_collisions(&Board::new(vec![0, 0, 0, 0])), 6);
/// ```
pub fn queens_collisions(board: &Board) -> usize {
    let rows = board.cells();
    let mut collisions = 0;
    for c1 in 0..rows.len() {
        for c2 in (c1 + 1)..rows.len() {
            if rows[c1] == rows[c2] || rows[c1].abs_diff(rows[c2]) == c2 - c1 {
                collisions += 1;
            }
        }
    }
    collisions
}
