//! First-available-cell strategy.

use crate::board::Board;
use crate::types::{Cell, Position};

/// Returns the first empty cell in row-major order.
pub fn next_move(board: &Board) -> Option<Position> {
    board
        .iter()
        .find_map(|(pos, cell)| (cell == Cell::Empty).then_some(pos))
}
