use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::can_land_on;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(game_state: &GameState, team: Team, from: Square, out: &mut Vec<Square>) {
    out.extend(knight_targets(team, from).filter(|&to| can_land_on(game_state, team, to)));
}
