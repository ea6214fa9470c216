//! Lanes: the rows, columns and diagonals a player must fill to win.

use super::types::Position;
use serde::{Deserialize, Serialize};

/// A line of cells on an N×N board.
///
/// The derived ordering is the board's lane order: rows ascending, then
/// columns ascending, then the main diagonal, then the anti-diagonal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Lane {
    /// Horizontal line at the given row.
    Row(usize),
    /// Vertical line at the given column.
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Lane {
    /// All 2N+2 lanes of a board of side `size`, in lane order.
    pub fn all(size: usize) -> Vec<Lane> {
        let mut lanes = Vec::with_capacity(2 * size + 2);
        lanes.extend((0..size).map(Lane::Row));
        lanes.extend((0..size).map(Lane::Column));
        lanes.push(Lane::MainDiagonal);
        lanes.push(Lane::AntiDiagonal);
        lanes
    }

    /// Cells of this lane in increasing index order.
    ///
    /// Rows run left to right, columns top to bottom, the main diagonal from
    /// (0, 0) and the anti-diagonal from (size - 1, 0).
    pub fn cells(self, size: usize) -> impl Iterator<Item = Position> {
        (0..size).map(move |i| match self {
            Lane::Row(row) => Position::new(row, i),
            Lane::Column(column) => Position::new(i, column),
            Lane::MainDiagonal => Position::new(i, i),
            Lane::AntiDiagonal => Position::new(size - 1 - i, i),
        })
    }

    /// Whether `pos` lies on this lane of a board of side `size`.
    pub fn contains(self, pos: Position, size: usize) -> bool {
        if pos.row >= size || pos.column >= size {
            return false;
        }
        match self {
            Lane::Row(row) => pos.row == row,
            Lane::Column(column) => pos.column == column,
            Lane::MainDiagonal => pos.row == pos.column,
            Lane::AntiDiagonal => pos.row + pos.column == size - 1,
        }
    }

    /// Compact key form of the lane.
    ///
    /// Row r is `(r, -1)`, column c is `(-1, c)`, the main diagonal is
    /// `(size, size)` and the anti-diagonal is `(-size, -size)`.
    pub fn encode(self, size: usize) -> (isize, isize) {
        let n = size as isize;
        match self {
            Lane::Row(row) => (row as isize, -1),
            Lane::Column(column) => (-1, column as isize),
            Lane::MainDiagonal => (n, n),
            Lane::AntiDiagonal => (-n, -n),
        }
    }

    /// Inverse of [`Lane::encode`]. Returns `None` for keys naming no lane.
    pub fn decode(key: (isize, isize), size: usize) -> Option<Lane> {
        let n = size as isize;
        let in_range = |i: isize| (0..n).contains(&i);
        match key {
            (row, -1) if in_range(row) => Some(Lane::Row(row as usize)),
            (-1, column) if in_range(column) => Some(Lane::Column(column as usize)),
            (a, b) if a == n && b == n => Some(Lane::MainDiagonal),
            (a, b) if a == -n && b == -n => Some(Lane::AntiDiagonal),
            _ => None,
        }
    }

    /// Whether this is one of the two diagonals.
    pub fn is_diagonal(self) -> bool {
        matches!(self, Lane::MainDiagonal | Lane::AntiDiagonal)
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lane::Row(row) => write!(f, "row {}", row + 1),
            Lane::Column(column) => write!(f, "column {}", column + 1),
            Lane::MainDiagonal => write!(f, "main diagonal"),
            Lane::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}
