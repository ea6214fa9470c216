//! Console front end for lanes tic-tac-toe.
//!
//! - **Cli**: `clap` command definitions
//! - **Config**: TOML game settings with command-line overrides
//! - **Console**: the read-play-print loop against the AI
//! - **Input**: parsing of typed moves

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod console;
mod input;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use input::parse_move;
