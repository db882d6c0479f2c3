//! Mailbox game state.
//!
//! `GameState` is the single mutable snapshot of a game: the 64 squares, the
//! king-square cache, castling forfeiture flags, en-passant targets, side to
//! move, and accumulated capture score. Analysis never mutates it; the legality
//! filter and castling evaluator work on clones.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{home_rank, pawn_start_rank, BACK_RANK_LAYOUT};
use crate::game_state::chess_types::*;
use crate::game_state::en_passant::EnPassantTargets;
use crate::move_generation::game_status::game_status;
use crate::move_generation::legal_move_apply::{apply_move, promote_pawn};
use crate::move_generation::legal_move_generator::legal_moves_for_turn;
use crate::moves::directions::is_on_board;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: [Option<PieceId>; 64],
    pub(crate) kings: [Option<Square>; 2],
    pub(crate) castling_forfeited: [bool; 2],
    pub(crate) en_passant: EnPassantTargets,
    pub(crate) turn: Team,
    pub(crate) score: [u16; 2],
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [None; 64],
            kings: [None; 2],
            castling_forfeited: [false; 2],
            en_passant: EnPassantTargets::new(),
            turn: Team::First,
            score: [0; 2],
        }
    }
}

impl GameState {
    /// Board with no pieces, first team to move, castling rights intact.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        let mut game_state = Self::new_empty();
        for team in Team::ALL {
            let back = home_rank(team) * 8;
            let pawns = pawn_start_rank(team) * 8;
            for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                game_state.put(back + file as u8, PieceId::new(team, *kind));
                game_state.put(pawns + file as u8, PieceId::new(team, PieceKind::Pawn));
            }
        }
        game_state
    }

    #[inline]
    pub fn turn(&self) -> Team {
        self.turn
    }

    /// Piece on `square`, or `None` when empty or off the board.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<PieceId> {
        self.board.get(square as usize).copied().flatten()
    }

    #[inline]
    pub fn king_square(&self, team: Team) -> Option<Square> {
        self.kings[team.index()]
    }

    #[inline]
    pub fn score(&self, team: Team) -> u16 {
        self.score[team.index()]
    }

    #[inline]
    pub fn can_castle(&self, team: Team) -> bool {
        !self.castling_forfeited[team.index()]
    }

    #[inline]
    pub fn en_passant_targets(&self) -> &EnPassantTargets {
        &self.en_passant
    }

    /// Legal destinations for the piece on `square`. Empty when the square is
    /// off the board, empty, or holds a piece of the team not on move.
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        legal_moves_for_turn(self, square)
    }

    /// Validate and commit a move for the side to move.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<CaptureResult, ChessErrors> {
        apply_move(self, from, to)
    }

    /// Replace a pawn standing on its promotion rank.
    pub fn promote(&mut self, square: Square, kind: PieceKind) -> Result<(), ChessErrors> {
        promote_pawn(self, square, kind)
    }

    pub fn status(&self, team: Team) -> GameStatus {
        game_status(self, team)
    }

    /// Status of both teams, indexed by `Team::index`.
    pub fn statuses(&self) -> [GameStatus; 2] {
        [self.status(Team::First), self.status(Team::Second)]
    }

    /// Place `piece` on `square`, replacing whatever was there. Placing a king
    /// moves that team's king: a previous king of the same team is removed.
    pub fn place_piece(&mut self, square: Square, piece: PieceId) -> Result<(), ChessErrors> {
        if !is_on_board(square) {
            return Err(ChessErrors::OutOfRange(square));
        }
        if piece.kind() == PieceKind::King {
            if let Some(old) = self.kings[piece.team().index()] {
                self.board[old as usize] = None;
            }
        }
        self.clear_king_cache_at(square);
        self.en_passant.remove(square);
        self.put(square, piece);
        Ok(())
    }

    /// Empty `square`, returning what stood there.
    pub fn remove_piece(&mut self, square: Square) -> Result<Option<PieceId>, ChessErrors> {
        if !is_on_board(square) {
            return Err(ChessErrors::OutOfRange(square));
        }
        self.clear_king_cache_at(square);
        self.en_passant.remove(square);
        Ok(self.board[square as usize].take())
    }

    /// Hand the move to `team`. Intended for building test positions.
    pub fn set_turn(&mut self, team: Team) {
        self.turn = team;
    }

    /// Permanently drop castling rights for `team`.
    pub fn forfeit_castling(&mut self, team: Team) {
        self.castling_forfeited[team.index()] = true;
    }

    pub(crate) fn put(&mut self, square: Square, piece: PieceId) {
        self.board[square as usize] = Some(piece);
        if piece.kind() == PieceKind::King {
            self.kings[piece.team().index()] = Some(square);
        }
    }

    fn clear_king_cache_at(&mut self, square: Square) {
        if let Some(piece) = self.board[square as usize] {
            if piece.kind() == PieceKind::King && self.kings[piece.team().index()] == Some(square) {
                self.kings[piece.team().index()] = None;
            }
        }
    }

    /// Squares holding a piece of `team`, in index order.
    pub fn squares_of(&self, team: Team) -> impl Iterator<Item = Square> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter(move |(_, piece)| piece.is_some_and(|p| p.team() == team))
            .map(|(square, _)| square as Square)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_sets_standard_position() {
        let game = GameState::new_game();
        assert_eq!(game.turn(), Team::First);
        assert_eq!(game.piece_at(4), Some(PieceId::new(Team::First, PieceKind::King)));
        assert_eq!(game.piece_at(3), Some(PieceId::new(Team::First, PieceKind::Queen)));
        assert_eq!(game.piece_at(60), Some(PieceId::new(Team::Second, PieceKind::King)));
        assert_eq!(game.piece_at(57), Some(PieceId::new(Team::Second, PieceKind::Knight)));
        assert_eq!(game.piece_at(12), Some(PieceId::new(Team::First, PieceKind::Pawn)));
        assert_eq!(game.piece_at(52), Some(PieceId::new(Team::Second, PieceKind::Pawn)));
        assert_eq!(game.piece_at(28), None);
        assert_eq!(game.king_square(Team::First), Some(4));
        assert_eq!(game.king_square(Team::Second), Some(60));
        assert!(game.can_castle(Team::First) && game.can_castle(Team::Second));
        assert!(game.en_passant_targets().is_empty());
        assert_eq!(game.score(Team::First), 0);
        assert_eq!(game.squares_of(Team::First).count(), 16);
        assert_eq!(game.squares_of(Team::Second).count(), 16);
    }

    #[test]
    fn piece_at_off_board_is_none() {
        let game = GameState::new_game();
        assert_eq!(game.piece_at(64), None);
        assert_eq!(game.piece_at(200), None);
    }

    #[test]
    fn placing_a_king_keeps_a_single_cached_king() {
        let mut game = GameState::new_empty();
        let king = PieceId::new(Team::First, PieceKind::King);
        game.place_piece(4, king).expect("e1 is on the board");
        game.place_piece(20, king).expect("e3 is on the board");
        assert_eq!(game.king_square(Team::First), Some(20));
        assert_eq!(game.piece_at(4), None);

        game.remove_piece(20).expect("e3 is on the board");
        assert_eq!(game.king_square(Team::First), None);
        assert_eq!(game.place_piece(64, king), Err(ChessErrors::OutOfRange(64)));
    }
}
