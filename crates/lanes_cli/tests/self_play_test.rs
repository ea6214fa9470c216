//! Text output of self-play games.

use lanes_cli::console::write_self_play;
use lanes_tictactoe::{Board, Mark, Position, SelfPlay, SelfPlayOutcome, Strategy, self_play};

fn render(record: &SelfPlay, x: Strategy, o: Strategy) -> String {
    let mut out = Vec::new();
    write_self_play(record, x, o, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn record_from(size: usize, moves: &[(Mark, usize, usize)], outcome: SelfPlayOutcome) -> SelfPlay {
    let mut board = Board::new(size).unwrap();
    let moves: Vec<(Mark, Position)> = moves
        .iter()
        .map(|&(mark, row, column)| (mark, Position::new(row, column)))
        .collect();
    for &(mark, pos) in &moves {
        board.place(pos, mark).unwrap();
    }
    SelfPlay {
        board,
        outcome,
        moves,
    }
}

#[test]
fn test_win_line_names_strategy() {
    let x = Strategy::NaiveFallback;
    let o = Strategy::NaiveFallback;
    let record = self_play(3, x, o).unwrap();
    let expected = "\
X|O|X
O|X|O
X|-|-
X (naive-fallback) wins in 7 moves
";
    assert_eq!(render(&record, x, o), expected);
}

#[test]
fn test_draw_line() {
    let record = record_from(
        3,
        &[
            (Mark::X, 0, 0),
            (Mark::O, 1, 1),
            (Mark::X, 0, 1),
            (Mark::O, 0, 2),
            (Mark::X, 2, 0),
            (Mark::O, 1, 0),
            (Mark::X, 1, 2),
            (Mark::O, 2, 1),
            (Mark::X, 2, 2),
        ],
        SelfPlayOutcome::Draw,
    );
    let expected = "\
X|X|O
O|O|X
X|O|X
Draw after 9 moves
";
    assert_eq!(
        render(&record, Strategy::BlockThenFinish, Strategy::BlockThenFinish),
        expected
    );
}

#[test]
fn test_aborted_line_names_stuck_side() {
    let record = record_from(2, &[(Mark::X, 0, 0)], SelfPlayOutcome::Aborted(Mark::O));
    let expected = "\
X|-
-|-
O (block-then-finish) found no move
";
    assert_eq!(
        render(&record, Strategy::GreedyFill, Strategy::BlockThenFinish),
        expected
    );
}
