//! Ray walking for bishops, rooks, and queens.

use crate::game_state::chess_types::{Square, Team};
use crate::game_state::game_state::GameState;
use crate::moves::directions::{step, Direction};

/// Walk from `from` in each of `directions`, pushing every empty square and
/// stopping at the first occupied one. The blocker is pushed only when it
/// belongs to the opposing team.
pub fn slide(
    game_state: &GameState,
    team: Team,
    from: Square,
    directions: &[Direction],
    out: &mut Vec<Square>,
) {
    for &direction in directions {
        let mut current = from;
        while let Some(next) = step(direction, team, current) {
            match game_state.piece_at(next) {
                None => out.push(next),
                Some(blocker) => {
                    if blocker.team() != team {
                        out.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::slide;
    use crate::game_state::chess_types::{PieceId, PieceKind, Team};
    use crate::game_state::game_state::GameState;
    use crate::moves::directions::Direction;

    #[test]
    fn ray_stops_at_blockers_and_captures_enemies_only() {
        let mut game = GameState::new_empty();
        // rook on a1, own pawn on a4, enemy knight on d1
        game.place_piece(0, PieceId::new(Team::First, PieceKind::Rook))
            .expect("a1 is on the board");
        game.place_piece(24, PieceId::new(Team::First, PieceKind::Pawn))
            .expect("a4 is on the board");
        game.place_piece(3, PieceId::new(Team::Second, PieceKind::Knight))
            .expect("d1 is on the board");

        let mut out = Vec::new();
        slide(&game, Team::First, 0, &Direction::ORTHOGONAL, &mut out);
        out.sort_unstable();
        assert_eq!(out, vec![1, 2, 3, 8, 16]);
    }
}
