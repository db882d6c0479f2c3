//! Castling availability.
//!
//! Castling is expressed as a move of either partner onto the other's square:
//! the king selects a rook's home corner, a rook selects the king's home
//! square. Executing it swaps the two pieces.

use crate::game_state::chess_rules::{king_home_square, king_side_rook_home, queen_side_rook_home};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    QueenSide,
    KingSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::QueenSide, CastleSide::KingSide];

    #[inline]
    pub const fn rook_home(self, team: Team) -> Square {
        match self {
            CastleSide::QueenSide => queen_side_rook_home(team),
            CastleSide::KingSide => king_side_rook_home(team),
        }
    }
}

/// Square the piece on `from` may castle onto for `side`, or `None`.
///
/// Requires intact rights, king and rook of the same team on their home
/// squares with `from` being one of them, every square strictly between them
/// empty, and every square from king to rook inclusive unattacked.
pub fn castling_target(game_state: &GameState, from: Square, side: CastleSide) -> Option<Square> {
    let piece = game_state.piece_at(from)?;
    let team = piece.team();
    if !game_state.can_castle(team) {
        return None;
    }

    let king_sq = king_home_square(team);
    let rook_sq = side.rook_home(team);
    let partner = match piece.kind() {
        PieceKind::King if from == king_sq => rook_sq,
        PieceKind::Rook if from == rook_sq => king_sq,
        _ => return None,
    };

    let king_in_place = game_state
        .piece_at(king_sq)
        .is_some_and(|p| p.is(team, PieceKind::King));
    let rook_in_place = game_state
        .piece_at(rook_sq)
        .is_some_and(|p| p.is(team, PieceKind::Rook));
    if !king_in_place || !rook_in_place {
        return None;
    }

    let low = king_sq.min(rook_sq);
    let high = king_sq.max(rook_sq);
    if (low + 1..high).any(|sq| game_state.piece_at(sq).is_some()) {
        return None;
    }
    if (low..=high).any(|sq| is_square_attacked(game_state, sq, team)) {
        return None;
    }

    Some(partner)
}

/// All castling destinations for the piece on `from`.
pub fn castling_destinations(game_state: &GameState, from: Square) -> Vec<Square> {
    CastleSide::ALL
        .iter()
        .filter_map(|&side| castling_target(game_state, from, side))
        .collect()
}

/// True when moving the piece on `from` onto `to` is a castling swap.
pub fn is_castling_move(game_state: &GameState, from: Square, to: Square) -> bool {
    let (Some(mover), Some(partner)) = (game_state.piece_at(from), game_state.piece_at(to)) else {
        return false;
    };
    mover.team() == partner.team()
        && matches!(
            (mover.kind(), partner.kind()),
            (PieceKind::King, PieceKind::Rook) | (PieceKind::Rook, PieceKind::King)
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn castling_setup() -> GameState {
        let mut game = GameState::new_empty();
        for (square, team, kind) in [
            (4, Team::First, PieceKind::King),
            (0, Team::First, PieceKind::Rook),
            (7, Team::First, PieceKind::Rook),
            (60, Team::Second, PieceKind::King),
        ] {
            game.place_piece(square, PieceId::new(team, kind))
                .expect("square is on the board");
        }
        game
    }

    #[test]
    fn king_and_rooks_see_each_other_with_clear_paths() {
        let game = castling_setup();
        let mut king = castling_destinations(&game, 4);
        king.sort_unstable();
        assert_eq!(king, vec![0, 7]);
        assert_eq!(castling_destinations(&game, 0), vec![4]);
        assert_eq!(castling_destinations(&game, 7), vec![4]);
        assert!(is_castling_move(&game, 4, 7));
        assert!(is_castling_move(&game, 0, 4));
        assert!(!is_castling_move(&game, 4, 60));
    }

    #[test]
    fn blocked_path_prevents_castling_on_that_side() {
        let mut game = castling_setup();
        game.place_piece(1, PieceId::new(Team::First, PieceKind::Knight))
            .expect("b1 is on the board");
        assert_eq!(castling_destinations(&game, 4), vec![7]);
        assert!(castling_destinations(&game, 0).is_empty());
    }

    #[test]
    fn attacked_transit_square_prevents_castling() {
        let mut game = castling_setup();
        // second-team rook on f8 covers f1
        game.place_piece(61, PieceId::new(Team::Second, PieceKind::Rook))
            .expect("f8 is on the board");
        assert_eq!(castling_destinations(&game, 4), vec![0]);

        // a rook covering b1 also blocks the queen side, since every square
        // from king to rook is checked
        game.place_piece(57, PieceId::new(Team::Second, PieceKind::Rook))
            .expect("b8 is on the board");
        assert!(castling_destinations(&game, 4).is_empty());
    }

    #[test]
    fn king_in_check_cannot_castle() {
        let mut game = castling_setup();
        game.place_piece(36, PieceId::new(Team::Second, PieceKind::Rook))
            .expect("e5 is on the board");
        assert!(castling_destinations(&game, 4).is_empty());
    }

    #[test]
    fn forfeited_rights_or_displaced_pieces_prevent_castling() {
        let mut game = castling_setup();
        game.forfeit_castling(Team::First);
        assert!(castling_destinations(&game, 4).is_empty());

        let mut game = castling_setup();
        game.place_piece(5, PieceId::new(Team::First, PieceKind::King))
            .expect("f1 is on the board");
        assert!(castling_destinations(&game, 5).is_empty());
        assert!(castling_destinations(&game, 0).is_empty());
    }
}
