//! Tile spawning and game initialization
//!
//! The only non-determinism in the engine is the choice of spawn cell and
//! spawn value. Both go through the [`RandomSource`] seam so collaborators
//! inject a seeded source for reproducible play and tests inject a scripted
//! one for exact assertions.

use crate::board::Board;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Values a spawned tile may take, chosen with even odds
const SPAWN_VALUES: [u32; 2] = [2, 4];

/// Uniform choice among a candidate set
///
/// The engine asks for an index into an ordered candidate set (empty cells
/// in row-major order, or the two spawn values) and never asks for a choice
/// among zero candidates.
pub trait RandomSource {
    /// Choose an index in `0..candidates` uniformly
    ///
    /// `candidates` is always non-zero. Returned values outside the range
    /// are clamped by the engine to the last candidate.
    fn choose(&mut self, candidates: usize) -> usize;
}

/// Seeded random source for reproducible games
#[derive(Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a deterministic random source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn choose(&mut self, candidates: usize) -> usize {
        self.rng.random_range(0..candidates.max(1))
    }
}

/// Place one new tile (2 or 4, even odds) in a uniformly chosen empty cell
///
/// Does nothing on a full board; callers gate on [`Board::has_empty`].
pub(crate) fn spawn_tile<R: RandomSource + ?Sized>(board: &mut Board, rng: &mut R) {
    let empties = board.empty_cells();
    if empties.is_empty() {
        return;
    }

    let cell_pick = rng.choose(empties.len()).min(empties.len() - 1);
    let (row, col) = empties.get(cell_pick).copied().unwrap_or((0, 0));

    let value_pick = rng.choose(SPAWN_VALUES.len()).min(SPAWN_VALUES.len() - 1);
    let value = SPAWN_VALUES.get(value_pick).copied().unwrap_or(2);

    board.set(row, col, value);
}

/// Start a new game: an empty board with two spawned tiles
///
/// The draws are made without replacement: the first tile occupies its cell
/// before the second cell is chosen, so the two tiles always land on
/// distinct cells.
pub fn new_game<R: RandomSource + ?Sized>(rng: &mut R) -> Board {
    let mut board = Board::empty();
    spawn_tile(&mut board, rng);
    spawn_tile(&mut board, rng);
    board
}
