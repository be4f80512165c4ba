//! Error types.
//!
//! Search outcomes (solved, budget exhausted, local optimum) are never
//! errors; these types only cover malformed input and invalid
//! configuration.

use thiserror::Error;

/// A board that could not be parsed or does not fit its family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A token on a board line is not a non-negative integer.
    #[error("line {line}: invalid cell value {token:?}")]
    Parse { line: usize, token: String },

    /// The board has the wrong number of cells for its family.
    #[error("expected {expected} cells, found {found}")]
    Length { expected: usize, found: usize },

    /// A cell holds a value outside `0..bound`.
    #[error("value {value} at position {position} is outside 0..{bound}")]
    OutOfRange {
        position: usize,
        value: usize,
        bound: usize,
    },

    /// A permutation board repeats a value.
    #[error("value {0} appears more than once")]
    Duplicate(usize),
}

/// Invalid search, annealing or command-line configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("unknown strategy {0:?}")]
    UnknownStrategy(String),

    #[error("unknown puzzle family {0:?}")]
    UnknownFamily(String),
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("board error: {0}")]
    Board(#[from] BoardError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_messages() {
        let err = BoardError::Parse {
            line: 3,
            token: "x".into(),
        };
        assert_eq!(err.to_string(), "line 3: invalid cell value \"x\"");

        let err = BoardError::OutOfRange {
            position: 2,
            value: 9,
            bound: 9,
        };
        assert_eq!(err.to_string(), "value 9 at position 2 is outside 0..9");
    }

    #[test]
    fn test_error_from_conversions() {
        let err: Error = BoardError::Duplicate(4).into();
        assert!(matches!(err, Error::Board(BoardError::Duplicate(4))));

        let err: Error = ConfigError::UnknownStrategy("Tabu".into()).into();
        assert_eq!(
            err.to_string(),
            "configuration error: unknown strategy \"Tabu\""
        );
    }
}
