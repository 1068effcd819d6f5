//! CLI entry point for the sliding-tile merge puzzle driver

use clap::Parser;
use mergetile::io::cli::{Cli, GameRunner};

fn main() -> mergetile::Result<()> {
    let cli = Cli::parse();
    let mut runner = GameRunner::new(cli);
    runner.run()
}
