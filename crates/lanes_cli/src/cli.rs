//! Command-line interface for lanes.

use clap::{Parser, Subcommand};
use lanes_tictactoe::{Mark, Strategy};

/// Lanes - N×N tic-tac-toe against a lane-counting AI
#[derive(Parser, Debug)]
#[command(name = "lanes")]
#[command(about = "N×N tic-tac-toe against a lane-counting AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the AI on the console
    Play {
        /// Path to the game configuration file
        #[arg(short, long, default_value = "lanes.toml")]
        config: std::path::PathBuf,

        /// Board side length (overrides the config file)
        #[arg(short, long)]
        size: Option<usize>,

        /// AI strategy: naive-fallback, greedy-fill or block-then-finish
        #[arg(long)]
        strategy: Option<Strategy>,

        /// Your mark; X moves first
        #[arg(long)]
        human_mark: Option<Mark>,
    },

    /// Let two strategies play each other
    SelfPlay {
        /// Board side length
        #[arg(short, long, default_value = "3")]
        size: usize,

        /// Strategy playing X
        #[arg(long, default_value = "block-then-finish")]
        x: Strategy,

        /// Strategy playing O
        #[arg(long, default_value = "block-then-finish")]
        o: Strategy,

        /// Print the game record as JSON
        #[arg(long)]
        json: bool,
    },
}
