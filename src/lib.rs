//! Rules engine for the 4x4 sliding-tile merge puzzle
//!
//! Tiles carrying power-of-two values slide in one of four directions, equal
//! neighbors fuse into a tile of double value, and a new tile spawns after
//! every successful move. The engine is a pure value-in, value-out core:
//! collaborators hold the board between calls, accumulate score from the
//! returned deltas, and inject the random source used for tile spawning.

#![forbid(unsafe_code)]

/// Board representation, directions, and structural transforms
pub mod board;
/// Slide/merge moves, tile spawning, and terminal-state detection
pub mod engine;
/// Input/output operations and error handling
pub mod io;

pub use board::{Board, Direction};
pub use engine::{MoveResult, RandomSource, SeededRandom, apply_move, is_terminal, new_game, shift};
pub use io::error::{GameError, Result};
