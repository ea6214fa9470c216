//! Lanes - N×N tic-tac-toe on the console.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use lanes_cli::{Cli, Command, GameConfig, console};
use lanes_tictactoe::{Board, Game, Strategy, self_play};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            size,
            strategy,
            human_mark,
        } => {
            let config =
                GameConfig::load_or_default(&config)?.with_overrides(size, strategy, human_mark);
            run_play(&config)
        }
        Command::SelfPlay { size, x, o, json } => run_self_play(size, x, o, json),
    }
}

/// Run the interactive console game
#[instrument(skip(config), fields(size = config.size(), strategy = %config.strategy()))]
fn run_play(config: &GameConfig) -> Result<()> {
    let board = Board::new(*config.size())?;
    let mut game = Game::new(board, *config.strategy(), *config.human_mark());
    info!(human = %game.human(), "Starting console game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    console::run(&mut game, stdin.lock(), stdout.lock())
}

/// Run two strategies against each other
#[instrument]
fn run_self_play(size: usize, x: Strategy, o: Strategy, json: bool) -> Result<()> {
    let record = self_play(size, x, o)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    let stdout = std::io::stdout();
    console::write_self_play(&record, x, o, &mut stdout.lock())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
