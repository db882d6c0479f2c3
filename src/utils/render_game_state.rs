//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and diagnostics
//! in text environments.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board to a Unicode string for terminal output.
///
/// Square `0 == a1` is drawn bottom-left, `63 == h8` top-right. A footer line
/// reports the side to move.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            match game_state.piece_at(rank * 8 + file) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");
    out.push_str(&format!("{} to move", game_state.turn()));

    out
}

fn piece_to_unicode(piece: PieceId) -> char {
    match (piece.team(), piece.kind()) {
        (Team::First, PieceKind::Pawn) => '♙',
        (Team::First, PieceKind::Knight) => '♘',
        (Team::First, PieceKind::Bishop) => '♗',
        (Team::First, PieceKind::Rook) => '♖',
        (Team::First, PieceKind::Queen) => '♕',
        (Team::First, PieceKind::King) => '♔',
        (Team::Second, PieceKind::Pawn) => '♟',
        (Team::Second, PieceKind::Knight) => '♞',
        (Team::Second, PieceKind::Bishop) => '♝',
        (Team::Second, PieceKind::Rook) => '♜',
        (Team::Second, PieceKind::Queen) => '♛',
        (Team::Second, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::game_state::GameState;

    #[test]
    fn renders_start_position() {
        let rendered = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
        assert_eq!(lines[10], "first to move");
        assert_eq!(GameState::new_game().to_string(), rendered);
    }
}
