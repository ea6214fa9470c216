//! Greedy lane filling.
//!
//! The mover keeps building on the lane where it is strongest among the
//! lanes the opponent has not entered yet.

use super::{first_empty, is_blocked_by, naive};
use crate::board::Board;
use crate::types::{Mark, Position};
use tracing::{debug, instrument};

/// Fills the strongest lane without opponent marks, falling back to the
/// first empty cell.
#[instrument(skip(board))]
pub fn next_move(board: &Board, mover: Mark) -> Option<Position> {
    let opponent = mover.opponent();

    // `min_by_key` keeps the first of equal keys, so ties go to lane order.
    let target = board
        .all_lanes()
        .iter()
        .copied()
        .filter(|&lane| !is_blocked_by(lane, opponent, board))
        .min_by_key(|&lane| -board.tally(lane) * mover.sign());

    if let Some(lane) = target {
        debug!(%lane, tally = board.tally(lane), "Greedy target lane");
        if let Some(pos) = first_empty(lane, board) {
            return Some(pos);
        }
    }

    naive::next_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_fills_first_row() {
        let board = Board::new(3).unwrap();
        assert_eq!(next_move(&board, Mark::O), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_builds_on_own_lane() {
        let mut board = Board::new(3).unwrap();
        board.place(Position::new(0, 0), Mark::X).unwrap();
        board.place(Position::new(2, 1), Mark::O).unwrap();
        // Row 2 and column 1 both hold one O and no X; row 2 comes first.
        assert_eq!(next_move(&board, Mark::O), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_avoids_lanes_entered_by_opponent() {
        let mut board = Board::new(3).unwrap();
        board.place(Position::new(0, 0), Mark::X).unwrap();
        // Row 0, column 0 and the main diagonal hold an X; row 1 is first clean lane.
        assert_eq!(next_move(&board, Mark::O), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_plays_for_x_too() {
        let mut board = Board::new(3).unwrap();
        board.place(Position::new(1, 2), Mark::X).unwrap();
        board.place(Position::new(0, 0), Mark::O).unwrap();
        assert_eq!(next_move(&board, Mark::X), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_falls_back_when_every_lane_is_blocked() {
        let mut board = Board::new(2).unwrap();
        board.place(Position::new(0, 0), Mark::X).unwrap();
        board.place(Position::new(1, 1), Mark::X).unwrap();
        // X sits on both rows, both columns and the main diagonal; the
        // anti-diagonal is still clean.
        assert_eq!(next_move(&board, Mark::O), Some(Position::new(1, 0)));

        board.place(Position::new(1, 0), Mark::O).unwrap();
        board.place(Position::new(0, 1), Mark::X).unwrap();
        assert_eq!(next_move(&board, Mark::O), None);
    }
}
