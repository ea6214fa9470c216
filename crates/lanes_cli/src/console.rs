//! Console driver for a human-versus-AI game.
//!
//! Reads moves line by line and writes the board after every move. The
//! reader and writer are generic so tests can script whole games.

use super::input::parse_move;
use anyhow::Result;
use lanes_tictactoe::{Game, GameError, Mark, Phase, Position, SelfPlay, SelfPlayOutcome, Strategy};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Plays games until the human declines a rematch or input ends.
#[instrument(skip_all, fields(size = game.board().size(), strategy = %game.strategy()))]
pub fn run<R: BufRead, W: Write>(game: &mut Game, mut input: R, mut out: W) -> Result<()> {
    loop {
        let phase = play_game(game, &mut input, &mut out)?;
        if !phase.is_over() {
            return Ok(());
        }
        writeln!(out, "Play again? [y/N]")?;
        out.flush()?;
        let Some(answer) = read_line(&mut input)? else {
            return Ok(());
        };
        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
        game.reset();
        info!("Starting a new game");
    }
}

/// Plays one game to its end, or until input runs out.
///
/// Returns the phase the game stopped in.
pub fn play_game<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    out: &mut W,
) -> Result<Phase> {
    write!(out, "{}", game.board())?;

    loop {
        match game.phase() {
            Phase::AwaitingHuman => {
                writeln!(out, "Your move (row, column):")?;
                out.flush()?;
                let Some(line) = read_line(input)? else {
                    info!("Input closed mid-game");
                    return Ok(game.phase());
                };
                let Some(pos) = parse_move(&line) else {
                    debug!(line = line.trim(), "Unparseable move");
                    writeln!(out, "Invalid move")?;
                    continue;
                };
                match game.play_human(pos) {
                    Ok(_) => write!(out, "You moved:\n{}", game.board())?,
                    Err(GameError::Move(_)) => writeln!(out, "Invalid move")?,
                    Err(err) => return Err(err.into()),
                }
            }
            Phase::AwaitingAi => {
                if let Some(pos) = game.play_ai()? {
                    write!(out, "AI moved to {}:\n{}", one_based(pos), game.board())?;
                }
            }
            Phase::Won(mark) => {
                let message = if mark == game.human() {
                    "You win!"
                } else {
                    "AI wins!"
                };
                writeln!(out, "{message}")?;
                return Ok(game.phase());
            }
            Phase::Draw => {
                writeln!(out, "Draw game!")?;
                return Ok(game.phase());
            }
            Phase::Aborted => {
                writeln!(out, "AI found no move")?;
                return Ok(game.phase());
            }
        }
    }
}

/// Writes the final board and result line of a self-play game.
pub fn write_self_play<W: Write>(
    record: &SelfPlay,
    x: Strategy,
    o: Strategy,
    out: &mut W,
) -> Result<()> {
    write!(out, "{}", record.board)?;
    let strategy_for = |mark: Mark| if mark == Mark::X { x } else { o };
    let moves = record.moves.len();
    match record.outcome {
        SelfPlayOutcome::Won(mark) => {
            writeln!(out, "{mark} ({}) wins in {moves} moves", strategy_for(mark))?;
        }
        SelfPlayOutcome::Draw => writeln!(out, "Draw after {moves} moves")?,
        SelfPlayOutcome::Aborted(mark) => {
            writeln!(out, "{mark} ({}) found no move", strategy_for(mark))?;
        }
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn one_based(pos: Position) -> String {
    format!("{}, {}", pos.row + 1, pos.column + 1)
}
