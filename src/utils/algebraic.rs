//! Square index <-> algebraic name conversions.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and square
//! indices for diagnostics, tests, and external collaborators.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;
use crate::moves::directions::{file_of, is_on_board, rank_of};

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Two-character name of a square index (`0..=63`), for example 8 -> "a2".
#[inline]
pub fn square_name(square: Square) -> Result<String, ChessErrors> {
    if !is_on_board(square) {
        return Err(ChessErrors::OutOfRange(square));
    }

    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'1' + rank_of(square));
    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_name};
    use crate::chess_errors::ChessErrors;

    #[test]
    fn square_names() {
        assert_eq!(square_name(0).expect("0 should convert"), "a1");
        assert_eq!(square_name(8).expect("8 should convert"), "a2");
        assert_eq!(square_name(28).expect("28 should convert"), "e4");
        assert_eq!(square_name(63).expect("63 should convert"), "h8");
        assert_eq!(square_name(64), Err(ChessErrors::OutOfRange(64)));
    }

    #[test]
    fn parse_square_names() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 0);
        assert_eq!(algebraic_to_square("e2").expect("e2 should parse"), 12);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 63);
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e10").is_err());
    }
}
