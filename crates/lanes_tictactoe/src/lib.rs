//! N×N tic-tac-toe with lane tallies and heuristic strategies.
//!
//! # Architecture
//!
//! - **Board**: the grid plus one signed tally per lane (row, column or
//!   diagonal). A move touches at most four tallies, and a tally reaching
//!   the board size means a win.
//! - **Strategy**: three read-only policies that pick a move for a mark.
//! - **Game**: a human-versus-strategy session with explicit phases.
//!
//! # Example
//!
//! ```
//! use lanes_tictactoe::{Board, Mark, Position, Strategy};
//!
//! let mut board = Board::new(3)?;
//! board.place(Position::new(0, 0), Mark::X)?;
//! let reply = Strategy::BlockThenFinish.next_move(&board, Mark::O);
//! assert_eq!(reply, Some(Position::new(1, 1)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod invariants;
mod lane;
mod session;
mod strategy;
mod types;

pub use board::{Board, MoveOutcome};
pub use error::{BoardError, GameError, MoveError};
pub use lane::Lane;
pub use session::{Game, Phase, SelfPlay, SelfPlayOutcome, self_play};
pub use strategy::{Strategy, search_lane};
pub use types::{Cell, Mark, Position};
