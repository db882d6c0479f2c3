use crate::game_state::chess_types::{Square, Team};
use crate::moves::directions::{step, Direction};

/// The (up to eight) neighbours of `from`.
pub fn king_targets(team: Team, from: Square) -> impl Iterator<Item = Square> {
    Direction::ALL
        .iter()
        .filter_map(move |&direction| step(direction, team, from))
}
