//! Canonical chess-rule constants.
//!
//! Home squares, the standard back-rank layout, material weights, and the
//! rank helpers that pawn movement and promotion are checked against.

use crate::game_state::chess_types::{PieceKind, Square, Team};

/// Back-rank layout from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Capacity of the en-passant target set.
pub const EN_PASSANT_CAPACITY: usize = 16;

/// Material weight credited to the capturing team.
#[inline]
pub const fn piece_value(kind: PieceKind) -> u16 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Knight => 3,
        PieceKind::Queen => 9,
        PieceKind::King => 200,
    }
}

/// Rank (`0..=7`) holding the team's major pieces at the start.
#[inline]
pub const fn home_rank(team: Team) -> u8 {
    match team {
        Team::First => 0,
        Team::Second => 7,
    }
}

/// Rank (`0..=7`) the team's pawns start on and may double-step from.
#[inline]
pub const fn pawn_start_rank(team: Team) -> u8 {
    match team {
        Team::First => 1,
        Team::Second => 6,
    }
}

/// Rank (`0..=7`) on which the team's pawns promote.
#[inline]
pub const fn promotion_rank(team: Team) -> u8 {
    match team {
        Team::First => 7,
        Team::Second => 0,
    }
}

#[inline]
pub const fn king_home_square(team: Team) -> Square {
    home_rank(team) * 8 + 4
}

#[inline]
pub const fn queen_side_rook_home(team: Team) -> Square {
    home_rank(team) * 8
}

#[inline]
pub const fn king_side_rook_home(team: Team) -> Square {
    home_rank(team) * 8 + 7
}
