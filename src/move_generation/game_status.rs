//! Check, checkmate, and stalemate classification.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::team_has_legal_move;

/// Classify the position of `team`, regardless of whose turn it is.
pub fn game_status(game_state: &GameState, team: Team) -> GameStatus {
    let in_check = is_king_in_check(game_state, team);
    let has_move = team_has_legal_move(game_state, team);

    match (in_check, has_move) {
        (true, false) => GameStatus::Checkmate,
        (true, true) => GameStatus::Check,
        (false, false) => GameStatus::Stalemate,
        (false, true) => GameStatus::Normal,
    }
}
