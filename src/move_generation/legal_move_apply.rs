//! Committing moves and promotions to a `GameState`.
//!
//! `commit_move` is the raw state transition shared by the executor and by the
//! legality filter's scratch simulations. `apply_move` and `promote_pawn` are
//! the validated entry points: every check runs before the first write, so a
//! rejected call leaves the state untouched.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{
    king_side_rook_home, piece_value, promotion_rank, queen_side_rook_home,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::castling::is_castling_move;
use crate::move_generation::legal_move_generator::legal_moves_for_piece;
use crate::move_generation::legal_moves_pawn::en_passant_victim;
use crate::moves::directions::{is_on_board, rank_of};

/// Validate `from -> to` for the side to move and commit it.
pub fn apply_move(game_state: &mut GameState, from: Square, to: Square) -> Result<CaptureResult, ChessErrors> {
    validate_move(game_state, from, to)?;
    Ok(commit_move(game_state, from, to))
}

fn validate_move(game_state: &GameState, from: Square, to: Square) -> Result<(), ChessErrors> {
    for square in [from, to] {
        if !is_on_board(square) {
            return Err(ChessErrors::OutOfRange(square));
        }
    }

    let piece = game_state
        .piece_at(from)
        .ok_or(ChessErrors::EmptySquare(from))?;
    if piece.team() != game_state.turn() {
        return Err(ChessErrors::WrongTurn {
            square: from,
            team: piece.team(),
        });
    }
    if !legal_moves_for_piece(game_state, from).contains(&to) {
        return Err(ChessErrors::IllegalMove { from, to });
    }
    Ok(())
}

/// Apply `from -> to` without legality checks. `from` must hold a piece.
///
/// Handles the castling swap, en-passant removal, king cache, castling
/// forfeiture, en-passant target refresh, capture score, and turn hand-over.
pub(crate) fn commit_move(game_state: &mut GameState, from: Square, to: Square) -> CaptureResult {
    let Some(mover) = game_state.piece_at(from) else {
        return CaptureResult::NoCapture;
    };
    let team = mover.team();

    if is_castling_move(game_state, from, to) {
        commit_castling_swap(game_state, from, to);
        game_state.castling_forfeited[team.index()] = true;
        game_state.en_passant.clear();
        game_state.turn = team.opposite();
        return CaptureResult::NoCapture;
    }

    let en_passant = if mover.kind() == PieceKind::Pawn {
        en_passant_victim(game_state, team, from, to)
    } else {
        None
    };
    let victim_square = en_passant.or_else(|| game_state.piece_at(to).map(|_| to));

    let result = match victim_square {
        Some(square) => {
            if let Some(victim) = game_state.board[square as usize].take() {
                game_state.score[team.index()] += piece_value(victim.kind());
                if victim.kind() == PieceKind::King {
                    game_state.kings[victim.team().index()] = None;
                }
            }
            CaptureResult::Captured(square)
        }
        None => CaptureResult::NoCapture,
    };

    game_state.board[from as usize] = None;
    game_state.put(to, mover);

    update_castling_rights(game_state, mover, from);

    game_state.en_passant.clear();
    if mover.kind() == PieceKind::Pawn && rank_of(from).abs_diff(rank_of(to)) == 2 {
        game_state.en_passant.insert(to);
    }

    game_state.turn = team.opposite();
    result
}

fn commit_castling_swap(game_state: &mut GameState, from: Square, to: Square) {
    let (Some(mover), Some(partner)) = (game_state.piece_at(from), game_state.piece_at(to)) else {
        return;
    };
    game_state.put(to, mover);
    game_state.put(from, partner);
}

fn update_castling_rights(game_state: &mut GameState, mover: PieceId, from: Square) {
    let team = mover.team();
    let leaves_home = match mover.kind() {
        PieceKind::King => true,
        PieceKind::Rook => from == queen_side_rook_home(team) || from == king_side_rook_home(team),
        _ => false,
    };
    if leaves_home {
        game_state.castling_forfeited[team.index()] = true;
    }
}

/// Replace the pawn on `square` with `kind`.
///
/// The pawn must stand on its own team's promotion rank, and `kind` must be a
/// bishop, rook, knight, or queen.
pub fn promote_pawn(game_state: &mut GameState, square: Square, kind: PieceKind) -> Result<(), ChessErrors> {
    if !is_on_board(square) {
        return Err(ChessErrors::OutOfRange(square));
    }
    if matches!(kind, PieceKind::Pawn | PieceKind::King) {
        return Err(ChessErrors::InvalidPromotion(square));
    }

    let pawn = game_state
        .piece_at(square)
        .filter(|piece| piece.kind() == PieceKind::Pawn)
        .ok_or(ChessErrors::InvalidPromotion(square))?;
    if rank_of(square) != promotion_rank(pawn.team()) {
        return Err(ChessErrors::InvalidPromotion(square));
    }

    game_state.en_passant.remove(square);
    game_state.put(square, PieceId::new(pawn.team(), kind));
    Ok(())
}
