//! Legal move generation.
//!
//! Every pseudo-legal candidate is committed to a scratch clone of the state
//! and discarded if the mover's own king is attacked afterwards. The same
//! routine serves positions in and out of check: a move is legal exactly when
//! the king is safe once it has been played. Castling destinations are added
//! on top of the filtered one-piece moves.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::castling::castling_destinations;
use crate::move_generation::legal_move_apply::commit_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{generate_pseudo_legal_moves, MoveGenerator};
use crate::moves::directions::is_on_board;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, game_state: &GameState, from: Square) -> Vec<Square> {
        legal_moves_for_piece(game_state, from)
    }
}

/// Legal destinations for the piece on `from`, whichever team owns it.
pub fn legal_moves_for_piece(game_state: &GameState, from: Square) -> Vec<Square> {
    let Some(piece) = game_state.piece_at(from) else {
        return Vec::new();
    };
    let team = piece.team();

    let mut moves = Vec::with_capacity(28);
    generate_pseudo_legal_moves(game_state, from, &mut moves);
    moves.extend(castling_destinations(game_state, from));

    moves.retain(|&to| leaves_king_safe(game_state, team, from, to));
    moves
}

/// Legal destinations for the piece on `square` if it belongs to the side to
/// move; empty otherwise.
pub fn legal_moves_for_turn(game_state: &GameState, square: Square) -> Vec<Square> {
    if !is_on_board(square) {
        return Vec::new();
    }
    match game_state.piece_at(square) {
        Some(piece) if piece.team() == game_state.turn() => legal_moves_for_piece(game_state, square),
        _ => Vec::new(),
    }
}

/// True when `team` has at least one legal move anywhere on the board.
pub fn team_has_legal_move(game_state: &GameState, team: Team) -> bool {
    game_state
        .squares_of(team)
        .any(|from| !legal_moves_for_piece(game_state, from).is_empty())
}

/// Commit `from -> to` on a scratch copy and test the mover's king.
fn leaves_king_safe(game_state: &GameState, team: Team, from: Square, to: Square) -> bool {
    let mut scratch = game_state.clone();
    commit_move(&mut scratch, from, to);
    !is_king_in_check(&scratch, team)
}
