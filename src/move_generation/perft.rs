//! Move-path enumeration for validating the generators.
//!
//! A pawn reaching its promotion rank counts as a single move here: promotion
//! is a separate API call and is not expanded into four children.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::commit_move;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub castles: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
    }
}

/// Count leaf move paths of length `depth` from `game_state`, moving the side
/// to move and alternating from there.
pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    let team = game_state.turn();
    let origins: Vec<Square> = game_state.squares_of(team).collect();

    for from in origins {
        for to in generator.generate_moves(game_state, from) {
            let is_castle = game_state
                .piece_at(to)
                .is_some_and(|piece| piece.team() == team);

            let mut next = game_state.clone();
            let result = commit_move(&mut next, from, to);

            if depth == 1 {
                total.nodes += 1;
                if matches!(result, CaptureResult::Captured(_)) {
                    total.captures += 1;
                }
                if is_castle {
                    total.castles += 1;
                }
            } else {
                total.merge(perft(generator, &next, depth - 1));
            }
        }
    }

    total
}

/// `perft` with the legal generator.
pub fn perft_legal(game_state: &GameState, depth: u8) -> PerftCounts {
    perft(&LegalMoveGenerator, game_state, depth)
}
