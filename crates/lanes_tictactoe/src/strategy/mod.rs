//! Move-selection strategies.
//!
//! Every strategy reads the board through `&Board` and answers with an
//! empty position for the mover, or `None` when it cannot find one.
//! [`Strategy::BlockThenFinish`] is the policy used in normal play; it is
//! layered on top of [`Strategy::GreedyFill`], which falls back to
//! [`Strategy::NaiveFallback`].

mod block;
mod greedy;
mod naive;

use super::board::Board;
use super::lane::Lane;
use super::types::{Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The available AI policies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// First empty cell in row-major order.
    NaiveFallback,
    /// Keep filling the strongest lane the opponent has not touched.
    GreedyFill,
    /// Finish a near-complete own lane, else block the strongest threat,
    /// else fill greedily.
    BlockThenFinish,
}

impl Strategy {
    /// Picks the next move for `mover`.
    ///
    /// Returns `None` only when no empty cell satisfies the strategy or any
    /// of its fallbacks.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn next_move(self, board: &Board, mover: Mark) -> Option<Position> {
        let choice = match self {
            Strategy::NaiveFallback => naive::next_move(board),
            Strategy::GreedyFill => greedy::next_move(board, mover),
            Strategy::BlockThenFinish => block::next_move(board, mover),
        };
        debug!(?choice, "Strategy chose move");
        choice
    }
}

/// First cell of `lane`, in lane order, whose content equals `target`.
pub fn search_lane(target: Cell, lane: Lane, board: &Board) -> Option<Position> {
    lane.cells(board.size())
        .find(|&pos| board.get(pos) == Some(target))
}

/// Whether `lane` already holds a cell of `mark`.
fn is_blocked_by(lane: Lane, mark: Mark, board: &Board) -> bool {
    search_lane(Cell::Occupied(mark), lane, board).is_some()
}

/// First empty cell of `lane`.
fn first_empty(lane: Lane, board: &Board) -> Option<Position> {
    search_lane(Cell::Empty, lane, board)
}
