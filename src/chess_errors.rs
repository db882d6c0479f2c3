//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by the public game API.
//! Every variant describes a recoverable caller mistake: the game state is
//! never modified when one of these is returned, so callers can simply try a
//! different move.

use thiserror::Error;

use crate::game_state::chess_types::{Square, Team};

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A square index outside `0..=63` was supplied.
    #[error("square index {0} is outside the board")]
    OutOfRange(u8),

    /// The source square of a move holds no piece.
    #[error("no piece on square {0}")]
    EmptySquare(Square),

    /// The piece on `square` belongs to `team`, which is not the side to move.
    #[error("piece on square {square} belongs to {team}, who is not on move")]
    WrongTurn { square: Square, team: Team },

    /// `to` is not a legal destination for the piece on `from`.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// The square does not hold a pawn on its promotion rank, or the requested
    /// piece kind is not a valid promotion target.
    #[error("invalid promotion on square {0}")]
    InvalidPromotion(Square),

    /// A square name could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),
}
