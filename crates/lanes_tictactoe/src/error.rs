//! Error types for board construction, moves and game sessions.

use super::types::Position;

/// Error constructing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The requested side length is not positive.
    #[display("Board size must be positive, got {}", _0)]
    InvalidSize(usize),

    /// The side length is too large to hold its cells or lane tallies.
    #[display("Board size {} is too large", _0)]
    TooLarge(usize),

    /// Serialized cells do not fill a board of the stated size.
    #[display("Expected {expected} cells, found {found}")]
    CellCount {
        /// Cells a board of the stated size holds.
        expected: usize,
        /// Cells actually supplied.
        found: usize,
    },
}

impl std::error::Error for BoardError {}

/// A move the board refused. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column is outside the board.
    #[display("Position {} is outside the board", _0)]
    OutOfBounds(Position),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Position),
}

impl std::error::Error for MoveError {}

/// Error driving a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The board rejected the move.
    #[display("{}", _0)]
    Move(MoveError),

    /// The other side is due to move.
    #[display("It is not this side's turn")]
    NotYourTurn,

    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::Move(err)
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Move(err) => Some(err),
            GameError::NotYourTurn | GameError::GameOver => None,
        }
    }
}
