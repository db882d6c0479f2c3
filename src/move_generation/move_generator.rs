//! Per-square move generation entry points.
//!
//! `PseudoLegalMoveGenerator` dispatches to the piece-specific generators and
//! ignores king safety. `LegalMoveGenerator` (in `legal_move_generator`) adds
//! the simulate-then-test filter and castling. Both answer for whichever team
//! owns the piece; turn ownership is enforced one level up.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

pub trait MoveGenerator {
    /// Destinations for the piece on `from`; empty when `from` is empty.
    fn generate_moves(&self, game_state: &GameState, from: Square) -> Vec<Square>;
}

pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, game_state: &GameState, from: Square) -> Vec<Square> {
        let mut out = Vec::with_capacity(28);
        generate_pseudo_legal_moves(game_state, from, &mut out);
        out
    }
}

/// Append the pseudo-legal destinations of the piece on `from` to `out`.
pub fn generate_pseudo_legal_moves(game_state: &GameState, from: Square, out: &mut Vec<Square>) {
    let Some(piece) = game_state.piece_at(from) else {
        return;
    };
    let team = piece.team();
    match piece.kind() {
        PieceKind::Pawn => generate_pawn_moves(game_state, team, from, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, team, from, out),
        PieceKind::Rook => generate_rook_moves(game_state, team, from, out),
        PieceKind::Knight => generate_knight_moves(game_state, team, from, out),
        PieceKind::Queen => generate_queen_moves(game_state, team, from, out),
        PieceKind::King => generate_king_moves(game_state, team, from, out),
    }
}
