//! Move logic: sliding, merging, spawning, and terminal-state detection
//!
//! All four directions are served by one row primitive plus the board
//! transforms; randomness enters only through the injectable
//! [`RandomSource`] seam at spawn time.

/// Whole-board moves and the per-move result type
pub mod moves;
/// The single-row slide-and-merge primitive
pub mod slide;
/// Tile spawning, the random-source seam, and game initialization
pub mod spawn;
/// Terminal-state detection
pub mod terminal;

pub use moves::{MoveResult, apply_move, shift};
pub use spawn::{RandomSource, SeededRandom, new_game};
pub use terminal::is_terminal;
