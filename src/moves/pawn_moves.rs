//! Pawn geometry: the squares a pawn pushes to and the diagonals it attacks.

use crate::game_state::chess_rules::pawn_start_rank;
use crate::game_state::chess_types::{Square, Team};
use crate::moves::directions::{rank_of, step, Direction};

pub const PAWN_CAPTURE_DIRECTIONS: [Direction; 2] =
    [Direction::AdvanceLeft, Direction::AdvanceRight];

#[inline]
pub fn is_on_pawn_start_rank(team: Team, square: Square) -> bool {
    rank_of(square) == pawn_start_rank(team)
}

/// Diagonal squares a pawn of `team` on `from` attacks.
pub fn pawn_attack_targets(team: Team, from: Square) -> impl Iterator<Item = Square> {
    PAWN_CAPTURE_DIRECTIONS
        .iter()
        .filter_map(move |&direction| step(direction, team, from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawn_attacks_point_toward_the_opponent() {
        let first: Vec<u8> = pawn_attack_targets(Team::First, 12).collect();
        assert_eq!(first, vec![19, 21]);
        let second: Vec<u8> = pawn_attack_targets(Team::Second, 52).collect();
        assert_eq!(second, vec![45, 43]);
        assert_eq!(pawn_attack_targets(Team::First, 8).count(), 1);
    }

    #[test]
    fn start_rank_detection() {
        assert!(is_on_pawn_start_rank(Team::First, 12));
        assert!(!is_on_pawn_start_rank(Team::First, 52));
        assert!(is_on_pawn_start_rank(Team::Second, 52));
    }
}
