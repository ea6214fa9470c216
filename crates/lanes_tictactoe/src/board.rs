//! N×N board with incremental lane tallies.
//!
//! Every accepted move adjusts the tally of the 2 to 4 lanes passing through
//! the played cell: +1 for `X`, -1 for `O`. A lane whose tally reaches the
//! board size in absolute value is owned by one mark, so win detection never
//! rescans the grid.

use super::error::{BoardError, MoveError};
use super::lane::Lane;
use super::types::{Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed and no lane is complete.
    Placed,
    /// The mark was placed and completed at least one lane.
    Won,
}

impl MoveOutcome {
    /// Whether the move completed a lane.
    pub fn is_win(self) -> bool {
        matches!(self, MoveOutcome::Won)
    }
}

/// Square board of side `size`.
///
/// Serializes as its size and cells; the tallies are rebuilt on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BoardRecord", try_from = "BoardRecord")]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
    /// Recorded lane tallies. Lanes never touched are absent.
    tallies: BTreeMap<Lane, i32>,
    lanes: Vec<Lane>,
    /// `size` as a tally magnitude.
    full_tally: i32,
}

impl Board {
    /// Creates an empty board of side `size`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] when `size` is zero and
    /// [`BoardError::TooLarge`] when the cell count or a lane tally would
    /// overflow.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize(size));
        }
        let full_tally = i32::try_from(size).map_err(|_| BoardError::TooLarge(size))?;
        let cell_count = size.checked_mul(size).ok_or(BoardError::TooLarge(size))?;
        Ok(Self {
            size,
            cells: vec![Cell::Empty; cell_count],
            tallies: BTreeMap::new(),
            lanes: Lane::all(size),
            full_tally,
        })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Tally magnitude of a complete lane, equal to the side length.
    pub fn full_tally(&self) -> i32 {
        self.full_tally
    }

    /// All 2N+2 lanes in lane order.
    pub fn all_lanes(&self) -> &[Lane] {
        &self.lanes
    }

    /// Reads a cell, or `None` outside the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Whether `pos` is on the board and empty.
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Places `mark` at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] or [`MoveError::Occupied`] without
    /// touching the board.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<MoveOutcome, MoveError> {
        let index = self.index(pos).ok_or(MoveError::OutOfBounds(pos))?;
        if self.cells[index] != Cell::Empty {
            return Err(MoveError::Occupied(pos));
        }

        Ok(if self.mark_cell(index, mark) {
            MoveOutcome::Won
        } else {
            MoveOutcome::Placed
        })
    }

    /// Lanes passing through `pos`: its row and column, plus any diagonal.
    pub fn lanes_for_cell(&self, pos: Position) -> Vec<Lane> {
        let mut lanes = vec![Lane::Row(pos.row), Lane::Column(pos.column)];
        if pos.row == pos.column {
            lanes.push(Lane::MainDiagonal);
        }
        if pos.row + pos.column + 1 == self.size {
            lanes.push(Lane::AntiDiagonal);
        }
        lanes
    }

    /// Tally of `lane`; unrecorded lanes read as 0.
    pub fn tally(&self, lane: Lane) -> i32 {
        self.tallies.get(&lane).copied().unwrap_or(0)
    }

    /// Recorded tallies.
    pub fn tallies(&self) -> &BTreeMap<Lane, i32> {
        &self.tallies
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// The mark owning a complete lane, if any.
    #[instrument(skip(self))]
    pub fn winner(&self) -> Option<Mark> {
        let size = self.full_tally;
        self.tallies.values().find_map(|&tally| {
            if tally >= size {
                Some(Mark::X)
            } else if tally <= -size {
                Some(Mark::O)
            } else {
                None
            }
        })
    }

    /// Clears every cell and tally. The size is kept.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.tallies.clear();
    }

    /// `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Position::new(i / size, i % size), *cell))
    }

    /// Writes `mark` into an empty cell and updates its lanes. Returns
    /// whether a lane is now complete.
    fn mark_cell(&mut self, index: usize, mark: Mark) -> bool {
        self.cells[index] = Cell::Occupied(mark);

        let size = self.full_tally;
        let pos = Position::new(index / self.size, index % self.size);
        let mut won = false;
        for lane in self.lanes_for_cell(pos) {
            let tally = self.tallies.entry(lane).or_insert(0);
            *tally += mark.sign();
            if tally.abs() >= size {
                debug!(%lane, tally = *tally, "Lane completed");
                won = true;
            }
        }
        won
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.size && pos.column < self.size).then(|| pos.row * self.size + pos.column)
    }
}

/// Wire form of a [`Board`].
#[derive(Serialize, Deserialize)]
struct BoardRecord {
    size: usize,
    cells: Vec<Cell>,
}

impl From<Board> for BoardRecord {
    fn from(board: Board) -> Self {
        Self {
            size: board.size,
            cells: board.cells,
        }
    }
}

impl TryFrom<BoardRecord> for Board {
    type Error = BoardError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        let mut board = Board::new(record.size)?;
        if record.cells.len() != board.cells.len() {
            return Err(BoardError::CellCount {
                expected: board.cells.len(),
                found: record.cells.len(),
            });
        }
        for (index, cell) in record.cells.into_iter().enumerate() {
            if let Cell::Occupied(mark) = cell {
                board.mark_cell(index, mark);
            }
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size) {
            for (column, cell) in row.iter().enumerate() {
                if column > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
