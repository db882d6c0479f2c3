use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::can_land_on;
use crate::moves::king_moves::king_targets;

/// One-square king moves. Castling is layered on by the legality filter.
pub fn generate_king_moves(game_state: &GameState, team: Team, from: Square, out: &mut Vec<Square>) {
    out.extend(king_targets(team, from).filter(|&to| can_land_on(game_state, team, to)));
}
