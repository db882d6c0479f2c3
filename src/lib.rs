//! Crate root module declarations for the Plum rules engine.
//!
//! This file exposes the game state, per-piece movement geometry, legal move
//! generation and the utility helpers so binaries, benches and external
//! tooling can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod en_passant;
    pub mod game_state;
}

pub mod moves {
    pub mod directions;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod castling;
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod random_playout;
    pub mod render_game_state;
}

pub use chess_errors::ChessErrors;
pub use game_state::chess_types::{CaptureResult, GameStatus, PieceId, PieceKind, Square, Team};
pub use game_state::game_state::GameState;
