//! The board value type and board-file parsing.
//!
//! A [`Board`] is a fixed-length sequence of non-negative integers. The
//! same type serves both puzzle families:
//!
//! - **8-puzzle**: 9 cells holding a permutation of `0..9`, `0` is the blank.
//! - **n-queens**: `n` cells, cell `c` holds the row of the queen in column `c`.
//!
//! Boards are values. Every operation that "moves" returns a new board and
//! leaves the receiver untouched.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::error::BoardError;

/// A fixed-length board of cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: Vec<usize>,
}

impl Board {
    /// Creates a board from its cells.
    pub fn new(cells: Vec<usize>) -> Self {
        Self { cells }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<usize> {
        self.cells
    }

    /// Position of the first cell holding `value`.
    pub fn position(&self, value: usize) -> Option<usize> {
        self.cells.iter().position(|&v| v == value)
    }

    /// Returns a copy with cells `a` and `b` exchanged.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn with_swap(&self, a: usize, b: usize) -> Board {
        let mut cells = self.cells.clone();
        cells.swap(a, b);
        Board { cells }
    }

    /// Returns a copy with cell `index` set to `value`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn with_cell(&self, index: usize, value: usize) -> Board {
        let mut cells = self.cells.clone();
        cells[index] = value;
        Board { cells }
    }
}

impl From<Vec<usize>> for Board {
    fn from(cells: Vec<usize>) -> Self {
        Board::new(cells)
    }
}

impl Index<usize> for Board {
    type Output = usize;

    fn index(&self, index: usize) -> &usize {
        &self.cells[index]
    }
}

/// Renders as `[a, b, c]`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{cell}")?;
        }
        f.write_str("]")
    }
}

/// Parses whitespace-separated integers, e.g. `"1 2 3 4 5 6 7 0 8"`.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s, 1)
    }
}

fn parse_line(line: &str, line_number: usize) -> Result<Board, BoardError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<usize>().map_err(|_| BoardError::Parse {
                line: line_number,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Board::new)
}

/// Parses a board file: one board per line, blank lines skipped.
///
/// Only the syntax is checked here. Use
/// [`PuzzleFamily::validate`](crate::family::PuzzleFamily::validate) to
/// check a board against its family.
///
/// # Examples
///
/// ```
/// use hillclimb::board::parse_boards;
///
/// let boards = parse_boards("1 2 3 4 5 6 7 0 8\n\n1 3 0 2\n").unwrap();
/// assert_eq!(boards.len(), 2);
/// assert_eq!(boards[1].cells(), &[1, 3, 0, 2]);
/// ```
pub fn parse_boards(text: &str) -> Result<Vec<Board>, BoardError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(line, i + 1))
        .collect()
}
