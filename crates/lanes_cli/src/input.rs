//! Parsing of typed moves.

use lanes_tictactoe::Position;

/// Parses a 1-based `"row, column"` pair into a board position.
///
/// Commas and whitespace both separate the numbers, so `"2,3"`, `"2 3"`
/// and `"2, 3"` are all accepted. Anything other than exactly two integers
/// of at least 1 yields `None`.
pub fn parse_move(line: &str) -> Option<Position> {
    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    let [row, column] = parts.as_slice() else {
        return None;
    };
    let row = row.parse::<usize>().ok()?.checked_sub(1)?;
    let column = column.parse::<usize>().ok()?.checked_sub(1)?;
    Some(Position::new(row, column))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators() {
        for line in ["2,3", "2 3", "2, 3", "  2 ,  3\n"] {
            assert_eq!(parse_move(line), Some(Position::new(1, 2)), "{line:?}");
        }
    }

    #[test]
    fn test_origin() {
        assert_eq!(parse_move("1, 1"), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_rejects_malformed() {
        for line in ["", "1", "1 2 3", "a, b", "0, 1", "-1, 2", "1.5 2"] {
            assert_eq!(parse_move(line), None, "{line:?}");
        }
    }

    #[test]
    fn test_large_values_parse() {
        // Range checks belong to the board.
        assert_eq!(parse_move("9, 9"), Some(Position::new(8, 8)));
    }
}
