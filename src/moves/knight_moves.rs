//! Knight leap geometry, composed from team-relative steps so that edge
//! handling stays in `directions`.

use crate::game_state::chess_types::{Square, Team};
use crate::moves::directions::{step_path, Direction};

use Direction::{Advance, Left, Retreat, Right};

pub const KNIGHT_PATHS: [[Direction; 3]; 8] = [
    [Advance, Advance, Left],
    [Advance, Advance, Right],
    [Retreat, Retreat, Left],
    [Retreat, Retreat, Right],
    [Left, Left, Advance],
    [Left, Left, Retreat],
    [Right, Right, Advance],
    [Right, Right, Retreat],
];

/// Every on-board square a knight on `from` could jump to.
pub fn knight_targets(team: Team, from: Square) -> impl Iterator<Item = Square> {
    KNIGHT_PATHS
        .iter()
        .filter_map(move |path| step_path(path, team, from))
}
