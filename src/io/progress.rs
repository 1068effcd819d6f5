//! Progress display for batches of simulated games
//!
//! Single games finish too quickly to need feedback; batches get one bar
//! tracking completed games.

use crate::io::configuration::MIN_BATCH_FOR_PROGRESS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Games: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for a batch of games
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no visible bar yet
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Show a batch bar when the game count warrants one
    pub fn initialize(&mut self, games: usize) {
        if games >= MIN_BATCH_FOR_PROGRESS {
            let bar = ProgressBar::new(games as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.bar = Some(bar);
        }
    }

    /// Record one finished game
    pub fn complete_game(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
