//! Error types for boundary validation and file handling
//!
//! The engine itself has no fallible operations: a rejected move is an
//! outcome reported through `MoveResult::changed`, not an error. Errors
//! arise only at the boundary, when outside data (serialized boards,
//! direction logs) is turned into engine types.

use std::fmt;
use std::path::PathBuf;

/// Main error type for boundary operations
#[derive(Debug)]
pub enum GameError {
    /// A cell value is neither 0 nor a power of two of at least 2
    InvalidTileValue {
        /// Row of the offending cell
        row: usize,
        /// Column of the offending cell
        col: usize,
        /// The rejected value
        value: u32,
    },

    /// A serialized board does not hold exactly 16 cells
    InvalidCellCount {
        /// Number of cells a board requires
        expected: usize,
        /// Number of cells supplied
        actual: usize,
    },

    /// A direction log contains an unrecognized letter
    InvalidDirection {
        /// The rejected character
        token: char,
    },

    /// A direction log could not be read from disk
    ReplayRead {
        /// Path to the log file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTileValue { row, col, value } => {
                write!(
                    f,
                    "Invalid tile value {value} at row {row}, column {col} (expected 0 or a power of two >= 2)"
                )
            }
            Self::InvalidCellCount { expected, actual } => {
                write!(f, "Invalid board: expected {expected} cells, got {actual}")
            }
            Self::InvalidDirection { token } => {
                write!(
                    f,
                    "Invalid direction '{token}' (expected one of U, D, L, R)"
                )
            }
            Self::ReplayRead { path, source } => {
                write!(
                    f,
                    "Failed to read direction log '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReplayRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for boundary results
pub type Result<T> = std::result::Result<T, GameError>;
