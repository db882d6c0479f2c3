use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::directions::Direction;
use crate::moves::sliding_moves::slide;

pub fn generate_queen_moves(game_state: &GameState, team: Team, from: Square, out: &mut Vec<Square>) {
    slide(game_state, team, from, &Direction::ALL, out);
}
