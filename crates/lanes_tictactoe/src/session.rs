//! A game between a human and a strategy, plus strategy self-play.
//!
//! The session is a small state machine. Each accepted move moves it to
//! the other side's turn, to a win, or to a draw; a strategy that cannot
//! find a move aborts the game.

use super::board::{Board, MoveOutcome};
use super::error::{BoardError, GameError};
use super::strategy::Strategy;
use super::types::{Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human's move.
    AwaitingHuman,
    /// Waiting for the strategy's move.
    AwaitingAi,
    /// A mark completed a lane.
    Won(Mark),
    /// The board filled up without a winner.
    Draw,
    /// The strategy produced no move on a non-finished board.
    Aborted,
}

impl Phase {
    /// Whether no more moves are accepted.
    pub fn is_over(self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Draw | Phase::Aborted)
    }
}

/// Human versus strategy on a single reusable board.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    strategy: Strategy,
    human: Mark,
    phase: Phase,
    moves: usize,
}

impl Game {
    /// Creates a game. `X` moves first, so the strategy opens when the
    /// human plays `O`.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn new(board: Board, strategy: Strategy, human: Mark) -> Self {
        Self {
            phase: Self::opening_phase(human),
            board,
            strategy,
            human,
            moves: 0,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The strategy playing against the human.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The human's mark.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// The strategy's mark.
    pub fn ai(&self) -> Mark {
        self.human.opponent()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of accepted moves.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Plays the human's move.
    ///
    /// # Errors
    ///
    /// [`GameError::Move`] when the board rejects the position (the phase is
    /// unchanged, so the human can try again), [`GameError::NotYourTurn`]
    /// or [`GameError::GameOver`] when called out of turn.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn play_human(&mut self, pos: Position) -> Result<Phase, GameError> {
        self.expect_phase(Phase::AwaitingHuman)?;
        let outcome = self.board.place(pos, self.human).inspect_err(|err| {
            debug!(%err, "Human move rejected");
        })?;
        Ok(self.advance(self.human, outcome))
    }

    /// Asks the strategy for a move and plays it.
    ///
    /// Returns the position played, or `None` when the strategy found no
    /// move, in which case the game is [`Phase::Aborted`].
    ///
    /// # Errors
    ///
    /// [`GameError::NotYourTurn`] or [`GameError::GameOver`] when called out
    /// of turn, and [`GameError::Move`] if the strategy picked an illegal
    /// cell.
    #[instrument(skip(self), fields(phase = ?self.phase, strategy = %self.strategy))]
    pub fn play_ai(&mut self) -> Result<Option<Position>, GameError> {
        self.expect_phase(Phase::AwaitingAi)?;
        let mark = self.ai();
        let Some(pos) = self.strategy.next_move(&self.board, mark) else {
            warn!("Strategy found no move");
            self.phase = Phase::Aborted;
            return Ok(None);
        };
        let outcome = self.board.place(pos, mark)?;
        self.advance(mark, outcome);
        Ok(Some(pos))
    }

    /// Clears the board for a new game with the same settings.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.moves = 0;
        self.phase = Self::opening_phase(self.human);
    }

    fn opening_phase(human: Mark) -> Phase {
        if human == Mark::X {
            Phase::AwaitingHuman
        } else {
            Phase::AwaitingAi
        }
    }

    fn expect_phase(&self, wanted: Phase) -> Result<(), GameError> {
        if self.phase.is_over() {
            Err(GameError::GameOver)
        } else if self.phase != wanted {
            Err(GameError::NotYourTurn)
        } else {
            Ok(())
        }
    }

    fn advance(&mut self, mover: Mark, outcome: MoveOutcome) -> Phase {
        self.moves += 1;
        self.phase = if outcome.is_win() {
            info!(winner = %mover, moves = self.moves, "Game won");
            Phase::Won(mover)
        } else if self.board.is_full() {
            info!(moves = self.moves, "Game drawn");
            Phase::Draw
        } else if mover == self.human {
            Phase::AwaitingAi
        } else {
            Phase::AwaitingHuman
        };
        self.phase
    }
}

/// How a self-play game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfPlayOutcome {
    /// A mark completed a lane.
    Won(Mark),
    /// Full board, no winner.
    Draw,
    /// The side to move found no move.
    Aborted(Mark),
}

/// Record of a finished self-play game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlay {
    /// Final position.
    pub board: Board,
    /// How the game ended.
    pub outcome: SelfPlayOutcome,
    /// Moves in the order played.
    pub moves: Vec<(Mark, Position)>,
}

/// Plays `x` against `o` on a fresh board of side `size`.
///
/// # Errors
///
/// Returns the [`BoardError`] from [`Board::new`] for an unusable `size`.
#[instrument]
pub fn self_play(size: usize, x: Strategy, o: Strategy) -> Result<SelfPlay, BoardError> {
    let mut board = Board::new(size)?;
    let mut moves = Vec::with_capacity(size * size);
    let mut mover = Mark::X;

    let outcome = loop {
        let strategy = if mover == Mark::X { x } else { o };
        let Some(pos) = strategy.next_move(&board, mover) else {
            break SelfPlayOutcome::Aborted(mover);
        };
        match board.place(pos, mover) {
            Ok(outcome) => {
                moves.push((mover, pos));
                if outcome.is_win() {
                    break SelfPlayOutcome::Won(mover);
                }
                if board.is_full() {
                    break SelfPlayOutcome::Draw;
                }
            }
            Err(err) => {
                warn!(%err, %strategy, "Strategy picked an illegal move");
                break SelfPlayOutcome::Aborted(mover);
            }
        }
        mover = mover.opponent();
    };

    info!(?outcome, moves = moves.len(), "Self-play finished");
    Ok(SelfPlay {
        board,
        outcome,
        moves,
    })
}
