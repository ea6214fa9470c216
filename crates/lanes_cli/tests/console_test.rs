//! Scripted console games with golden output.

use lanes_cli::console::{play_game, run};
use lanes_tictactoe::{Board, Game, Mark, Phase, Strategy};
use std::io::Cursor;

fn game(size: usize, human: Mark) -> Game {
    Game::new(Board::new(size).unwrap(), Strategy::BlockThenFinish, human)
}

fn transcript(game: &mut Game, input: &str) -> String {
    let mut out = Vec::new();
    run(game, Cursor::new(input.to_string()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_invalid_input_reprompts() {
    let mut game = game(3, Mark::X);
    let output = transcript(&mut game, "0,0\n1,1\n1,1\n");
    let expected = "\
-|-|-
-|-|-
-|-|-
Your move (row, column):
Invalid move
Your move (row, column):
You moved:
X|-|-
-|-|-
-|-|-
AI moved to 2, 2:
X|-|-
-|O|-
-|-|-
Your move (row, column):
Invalid move
Your move (row, column):
";
    assert_eq!(output, expected);
    assert_eq!(game.phase(), Phase::AwaitingHuman);
}

#[test]
fn test_full_game_ends_in_draw() {
    let mut game = game(3, Mark::X);
    let output = transcript(&mut game, "1,1\n1,2\n3,1\n2,3\n3,3\nn\n");
    let expected = "\
-|-|-
-|-|-
-|-|-
Your move (row, column):
You moved:
X|-|-
-|-|-
-|-|-
AI moved to 2, 2:
X|-|-
-|O|-
-|-|-
Your move (row, column):
You moved:
X|X|-
-|O|-
-|-|-
AI moved to 1, 3:
X|X|O
-|O|-
-|-|-
Your move (row, column):
You moved:
X|X|O
-|O|-
X|-|-
AI moved to 2, 1:
X|X|O
O|O|-
X|-|-
Your move (row, column):
You moved:
X|X|O
O|O|X
X|-|-
AI moved to 3, 2:
X|X|O
O|O|X
X|O|-
Your move (row, column):
You moved:
X|X|O
O|O|X
X|O|X
Draw game!
Play again? [y/N]
";
    assert_eq!(output, expected);
    assert_eq!(game.phase(), Phase::Draw);
}

#[test]
fn test_rematch_resets_board() {
    let mut game = game(1, Mark::X);
    let output = transcript(&mut game, "1 1\ny\n");
    let expected = "\
-
Your move (row, column):
You moved:
X
You win!
Play again? [y/N]
-
Your move (row, column):
";
    assert_eq!(output, expected);
    assert_eq!(game.moves(), 0);
}

#[test]
fn test_ai_opens_for_o() {
    let mut game = game(1, Mark::O);
    let mut input = Cursor::new(String::new());
    let mut out = Vec::new();
    let phase = play_game(&mut game, &mut input, &mut out).unwrap();
    assert_eq!(phase, Phase::Won(Mark::X));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "-\nAI moved to 1, 1:\nX\nAI wins!\n"
    );
}
