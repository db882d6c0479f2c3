use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::directions::{step, Direction};
use crate::moves::pawn_moves::{is_on_pawn_start_rank, pawn_attack_targets};

pub fn generate_pawn_moves(game_state: &GameState, team: Team, from: Square, out: &mut Vec<Square>) {
    if let Some(one_step) = step(Direction::Advance, team, from) {
        if game_state.piece_at(one_step).is_none() {
            out.push(one_step);

            if is_on_pawn_start_rank(team, from) {
                if let Some(two_step) = step(Direction::Advance, team, one_step) {
                    if game_state.piece_at(two_step).is_none() {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    // captures and en-passant
    for to in pawn_attack_targets(team, from) {
        if enemy_piece_on(game_state, team, to).is_some()
            || en_passant_victim(game_state, team, from, to).is_some()
        {
            out.push(to);
        }
    }
}

/// Square of the pawn captured en passant when a pawn of `team` moves from
/// `from` to `to`, or `None` if that move is not an en-passant capture.
///
/// `to` must be an empty forward diagonal of `from`, and the square one
/// retreat step behind it must hold an opposing pawn that is a current
/// en-passant target.
pub fn en_passant_victim(game_state: &GameState, team: Team, from: Square, to: Square) -> Option<Square> {
    if !pawn_attack_targets(team, from).any(|target| target == to) {
        return None;
    }
    if game_state.piece_at(to).is_some() {
        return None;
    }

    let victim = step(Direction::Retreat, team, to)?;
    let piece = enemy_piece_on(game_state, team, victim)?;
    if piece.kind() != PieceKind::Pawn || !game_state.en_passant.contains(victim) {
        return None;
    }
    Some(victim)
}
