use crate::game_state::{chess_types::*, game_state::GameState};

/// Piece on `square` if it belongs to the opponent of `team`.
#[inline]
pub fn enemy_piece_on(game_state: &GameState, team: Team, square: Square) -> Option<PieceId> {
    game_state
        .piece_at(square)
        .filter(|piece| piece.team() != team)
}

/// True when a piece of `team` may end its move on `square`: the square is
/// empty or holds an opposing piece.
#[inline]
pub fn can_land_on(game_state: &GameState, team: Team, square: Square) -> bool {
    match game_state.piece_at(square) {
        None => true,
        Some(piece) => piece.team() != team,
    }
}
