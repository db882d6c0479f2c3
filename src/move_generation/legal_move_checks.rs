//! Attack detection.
//!
//! A square is attacked when some opposing piece could capture a piece
//! standing on it. Pawns attack only their forward diagonals; every other
//! piece attacks exactly its pseudo-legal destination set.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::generate_pseudo_legal_moves;
use crate::moves::pawn_moves::pawn_attack_targets;

#[inline]
pub fn king_square(game_state: &GameState, team: Team) -> Option<Square> {
    game_state.king_square(team)
}

/// True when the king of `team` is attacked. A team without a king is never
/// in check.
#[inline]
pub fn is_king_in_check(game_state: &GameState, team: Team) -> bool {
    let Some(king_sq) = king_square(game_state, team) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, team)
}

/// True when any piece of the opponent of `defending_team` attacks `square`.
pub fn is_square_attacked(game_state: &GameState, square: Square, defending_team: Team) -> bool {
    let mut scratch = Vec::with_capacity(28);
    game_state
        .squares_of(defending_team.opposite())
        .any(|from| attacks_square(game_state, from, square, &mut scratch))
}

fn attacks_square(game_state: &GameState, from: Square, target: Square, scratch: &mut Vec<Square>) -> bool {
    let Some(piece) = game_state.piece_at(from) else {
        return false;
    };
    if piece.kind() == PieceKind::Pawn {
        return pawn_attack_targets(piece.team(), from).any(|sq| sq == target);
    }

    scratch.clear();
    generate_pseudo_legal_moves(game_state, from, scratch);
    scratch.contains(&target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(game: &mut GameState, square: Square, team: Team, kind: PieceKind) {
        game.place_piece(square, PieceId::new(team, kind))
            .expect("square is on the board");
    }

    #[test]
    fn start_position_has_no_checks() {
        let game = GameState::new_game();
        assert!(!is_king_in_check(&game, Team::First));
        assert!(!is_king_in_check(&game, Team::Second));
        // f3 is covered by the g1 knight and the e2/g2 pawns
        assert!(is_square_attacked(&game, 21, Team::Second));
        assert!(!is_square_attacked(&game, 28, Team::Second));
    }

    #[test]
    fn pawn_pushes_do_not_attack_but_diagonals_do() {
        let mut game = GameState::new_empty();
        place(&mut game, 52, Team::Second, PieceKind::Pawn); // e7
        assert!(!is_square_attacked(&game, 44, Team::First)); // e6
        assert!(is_square_attacked(&game, 43, Team::First)); // d6, empty
        assert!(is_square_attacked(&game, 45, Team::First)); // f6, empty
    }

    #[test]
    fn sliders_are_blocked_by_intervening_pieces() {
        let mut game = GameState::new_empty();
        place(&mut game, 4, Team::First, PieceKind::King); // e1
        place(&mut game, 60, Team::Second, PieceKind::Rook); // e8
        assert!(is_king_in_check(&game, Team::First));

        place(&mut game, 28, Team::First, PieceKind::Knight); // e4 blocks
        assert!(!is_king_in_check(&game, Team::First));
    }

    #[test]
    fn team_without_king_is_not_in_check() {
        let game = GameState::new_empty();
        assert!(!is_king_in_check(&game, Team::First));
    }
}
