//! Block-then-finish: the primary policy.
//!
//! Priority order: complete an own lane that is one move short, then
//! contest the opponent's strongest lane, then fill greedily.

use super::{first_empty, greedy, is_blocked_by};
use crate::board::Board;
use crate::lane::Lane;
use crate::types::{Mark, Position};
use tracing::{debug, instrument};

#[instrument(skip(board))]
pub fn next_move(board: &Board, mover: Mark) -> Option<Position> {
    let block = block_threat(board, mover);
    let win_move = greedy::next_move(board, mover);

    let finish = win_move
        .and_then(|pos| finishing_lane(board, pos, mover))
        .and_then(|lane| {
            debug!(%lane, "Finishing own lane");
            first_empty(lane, board)
        });

    finish.or(block).or(win_move)
}

/// Empty cell on the opponent's strongest lane that the mover has not
/// entered yet. Diagonals win ties, main before anti.
fn block_threat(board: &Board, mover: Mark) -> Option<Position> {
    let opponent = mover.opponent();
    let threat = board
        .all_lanes()
        .iter()
        .map(|&lane| board.tally(lane) * opponent.sign())
        .max()?;
    if threat <= 0 {
        return None;
    }

    let candidates: Vec<Lane> = board
        .all_lanes()
        .iter()
        .copied()
        .filter(|&lane| {
            board.tally(lane) * opponent.sign() == threat && !is_blocked_by(lane, mover, board)
        })
        .collect();

    // Lane order puts the main diagonal before the anti-diagonal.
    let lane = candidates
        .iter()
        .copied()
        .find(|lane| lane.is_diagonal())
        .or_else(|| candidates.first().copied())?;
    debug!(%lane, threat, "Blocking threat");
    first_empty(lane, board)
}

/// A lane through `pos` that the mover completes by playing one more cell.
fn finishing_lane(board: &Board, pos: Position, mover: Mark) -> Option<Lane> {
    let needed = board.full_tally() - 1;
    board.lanes_for_cell(pos).into_iter().find(|&lane| {
        board.tally(lane) * mover.sign() == needed && !is_blocked_by(lane, mover.opponent(), board)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, moves: &[(usize, usize, Mark)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &(row, column, mark) in moves {
            board.place(Position::new(row, column), mark).unwrap();
        }
        board
    }

    #[test]
    fn test_answers_corner_with_centre() {
        let board = board_with(3, &[(0, 0, Mark::X)]);
        assert_eq!(next_move(&board, Mark::O), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_centre_threat_prefers_main_diagonal() {
        let board = board_with(3, &[(1, 1, Mark::X)]);
        assert_eq!(next_move(&board, Mark::O), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_row_before_column_among_straight_threats() {
        let board = board_with(3, &[(0, 1, Mark::X)]);
        assert_eq!(next_move(&board, Mark::O), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_blocks_two_in_a_row() {
        let board = board_with(3, &[(0, 0, Mark::X), (1, 1, Mark::O), (0, 1, Mark::X)]);
        assert_eq!(next_move(&board, Mark::O), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_finishing_beats_blocking() {
        let board = board_with(
            3,
            &[
                (0, 0, Mark::X),
                (1, 0, Mark::O),
                (0, 1, Mark::X),
                (1, 1, Mark::O),
            ],
        );
        assert_eq!(next_move(&board, Mark::O), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_ignores_threats_already_contested() {
        // Row 0 holds two X but O already sits on it, so it is no threat.
        let board = board_with(3, &[(0, 0, Mark::X), (0, 1, Mark::O), (0, 2, Mark::X)]);
        let pos = next_move(&board, Mark::O).unwrap();
        assert_ne!(pos.row, 0);
        assert!(board.is_empty_at(pos));
    }

    #[test]
    fn test_opening_move_for_x() {
        let board = Board::new(3).unwrap();
        assert_eq!(next_move(&board, Mark::X), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = board_with(
            2,
            &[
                (0, 0, Mark::X),
                (0, 1, Mark::O),
                (1, 0, Mark::O),
                (1, 1, Mark::X),
            ],
        );
        assert_eq!(next_move(&board, Mark::O), None);
    }
}
