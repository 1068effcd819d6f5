//! Board representation and structural transforms
//!
//! This module contains the board-side half of the engine:
//! - The fixed 4x4 board value type with construct-time validation
//! - Transposition and row reversal, the two transforms that reduce every
//!   direction to the canonical leftward slide
//! - The direction enumeration and its transform table

/// Direction enumeration and the direction-to-transform table
pub mod direction;
/// The 4x4 board value type and its transforms
pub mod grid;

pub use direction::{Direction, Orientation};
pub use grid::Board;
