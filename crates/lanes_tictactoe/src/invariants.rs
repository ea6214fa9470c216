//! First-class invariants for the lane tallies.
//!
//! The tallies are derived data: they must always agree with the grid they
//! summarize. These checks recount from the cells and are meant for tests
//! and debugging, not for the move path.

use super::board::Board;
use super::types::{Cell, Mark};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Every lane's tally equals its X count minus its O count.
pub struct TallyMatchesCells;

impl Invariant<Board> for TallyMatchesCells {
    #[instrument(skip(board))]
    fn holds(board: &Board) -> bool {
        board.all_lanes().iter().all(|&lane| {
            let counted: i32 = lane
                .cells(board.size())
                .filter_map(|pos| board.get(pos).and_then(Cell::mark))
                .map(Mark::sign)
                .sum();
            let recorded = board.tally(lane);
            if counted != recorded {
                warn!(%lane, counted, recorded, "Tally out of sync with cells");
            }
            counted == recorded
        })
    }

    fn description() -> &'static str {
        "Lane tally equals X count minus O count"
    }
}

/// No tally exceeds the board size in magnitude.
pub struct TallyWithinBounds;

impl Invariant<Board> for TallyWithinBounds {
    #[instrument(skip(board))]
    fn holds(board: &Board) -> bool {
        let size = board.full_tally();
        board.tallies().values().all(|tally| tally.abs() <= size)
    }

    fn description() -> &'static str {
        "Lane tally magnitude never exceeds board size"
    }
}

/// Runs every board invariant and collects the violations.
pub fn check_board(board: &Board) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = Vec::new();

    if !TallyMatchesCells::holds(board) {
        violations.push(InvariantViolation::new(TallyMatchesCells::description()));
    }

    if !TallyWithinBounds::holds(board) {
        violations.push(InvariantViolation::new(TallyWithinBounds::description()));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    #[test]
    fn test_fresh_board_holds() {
        let board = Board::new(4).unwrap();
        assert_eq!(check_board(&board), Ok(()));
    }

    #[test]
    fn test_holds_after_moves_and_reset() {
        let mut board = Board::new(3).unwrap();
        board.place(Position::new(0, 2), Mark::X).unwrap();
        board.place(Position::new(1, 1), Mark::O).unwrap();
        board.place(Position::new(2, 0), Mark::X).unwrap();
        assert_eq!(check_board(&board), Ok(()));
        board.reset();
        assert_eq!(check_board(&board), Ok(()));
    }
}
