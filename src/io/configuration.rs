//! Runtime configuration defaults for the command-line driver

/// Fixed seed for reproducible play
pub const DEFAULT_SEED: u64 = 42;

/// Default number of random games to simulate
pub const DEFAULT_GAMES: usize = 1;

// Random playouts on a 4x4 board end well before this
/// Default cap on move attempts per game
pub const DEFAULT_MAX_MOVES: usize = 10_000;

/// Smallest batch size that warrants a progress bar
pub const MIN_BATCH_FOR_PROGRESS: usize = 2;
