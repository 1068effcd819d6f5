//! Command-line driver for seeded playouts and direction-log replay
//!
//! The binary exercises the engine the way any collaborator would: it holds
//! the board between calls, accumulates score from the returned deltas, and
//! feeds the engine a seeded random source.

use crate::board::{Board, Direction};
use crate::engine::{RandomSource, SeededRandom, apply_move, new_game};
use crate::io::configuration::{DEFAULT_GAMES, DEFAULT_MAX_MOVES, DEFAULT_SEED};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::replay::load_moves;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mergetile")]
#[command(
    author,
    version,
    about = "Simulate sliding-tile merge puzzle games"
)]
/// Command-line arguments for the game driver
pub struct Cli {
    /// Random seed for reproducible games
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of random games to simulate
    #[arg(short, long, default_value_t = DEFAULT_GAMES)]
    pub games: usize,

    /// Replay a direction log (letters U, D, L, R) instead of playing randomly
    #[arg(short, long)]
    pub replay: Option<PathBuf>,

    /// Maximum move attempts per game before stopping
    #[arg(short, long, default_value_t = DEFAULT_MAX_MOVES)]
    pub max_moves: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the final board of every game
    #[arg(short, long)]
    pub boards: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Summary of one finished game
#[derive(Clone, Copy, Debug)]
pub struct GameSummary {
    /// Total score accumulated from per-move deltas
    pub score: u32,
    /// Largest tile on the final board
    pub max_tile: u32,
    /// Number of accepted moves
    pub moves: usize,
    /// Whether the game ended on a terminal board
    pub terminal: bool,
}

/// Play uniformly random directions until the board is terminal
///
/// Rejected no-ops consume an attempt but not a move; the attempt cap
/// bounds the loop even for pathological sources.
pub fn random_game<R: RandomSource + ?Sized>(rng: &mut R, max_attempts: usize) -> (GameSummary, Board) {
    let mut board = new_game(rng);
    let mut score = 0;
    let mut moves = 0;
    let mut terminal = false;

    let mut attempts = 0;
    while attempts < max_attempts && !terminal {
        attempts += 1;
        let direction = choose_direction(rng);
        let result = apply_move(board, direction, rng);
        board = result.board;
        score += result.score;
        if result.changed {
            moves += 1;
        }
        terminal = result.terminal;
    }

    (
        GameSummary {
            score,
            max_tile: board.max_tile(),
            moves,
            terminal,
        },
        board,
    )
}

/// Replay a recorded direction log from a fresh game
///
/// Stops early if the board goes terminal before the log runs out.
pub fn replay_game<R: RandomSource + ?Sized>(
    moves: &[Direction],
    rng: &mut R,
) -> (GameSummary, Board) {
    let mut board = new_game(rng);
    let mut score = 0;
    let mut accepted = 0;
    let mut terminal = false;

    for &direction in moves {
        if terminal {
            break;
        }
        let result = apply_move(board, direction, rng);
        board = result.board;
        score += result.score;
        if result.changed {
            accepted += 1;
        }
        terminal = result.terminal;
    }

    (
        GameSummary {
            score,
            max_tile: board.max_tile(),
            moves: accepted,
            terminal,
        },
        board,
    )
}

/// Pick one of the four directions uniformly
fn choose_direction<R: RandomSource + ?Sized>(rng: &mut R) -> Direction {
    let directions = Direction::all();
    directions
        .get(rng.choose(directions.len()))
        .copied()
        .unwrap_or(Direction::Left)
}

/// Drives batches of games according to CLI arguments
pub struct GameRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl GameRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the requested games or replay
    ///
    /// # Errors
    ///
    /// Returns an error if a replay log cannot be read or parsed.
    pub fn run(&mut self) -> Result<()> {
        if let Some(path) = &self.cli.replay {
            let moves = load_moves(path)?;
            let mut rng = SeededRandom::new(self.cli.seed);
            let (summary, board) = replay_game(&moves, &mut rng);
            self.report(0, &summary, &board);
            return Ok(());
        }

        if let Some(pm) = &mut self.progress_manager {
            pm.initialize(self.cli.games);
        }

        let mut results = Vec::with_capacity(self.cli.games);
        for game_index in 0..self.cli.games {
            // Offset the seed so every game in a batch is distinct yet reproducible
            let seed = self.cli.seed.wrapping_add(game_index as u64);
            let mut rng = SeededRandom::new(seed);
            results.push(random_game(&mut rng, self.cli.max_moves));

            if let Some(pm) = &self.progress_manager {
                pm.complete_game();
            }
        }

        if let Some(pm) = &self.progress_manager {
            pm.finish();
        }

        for (game_index, (summary, board)) in results.iter().enumerate() {
            self.report(game_index, summary, board);
        }

        Ok(())
    }

    // Allow print for user-facing results
    #[allow(clippy::print_stdout)]
    fn report(&self, game_index: usize, summary: &GameSummary, board: &Board) {
        println!(
            "game {game_index}: score {}, max tile {}, moves {}{}",
            summary.score,
            summary.max_tile,
            summary.moves,
            if summary.terminal { ", terminal" } else { "" }
        );
        if self.cli.boards {
            println!("{board}");
        }
    }
}
