//! Core value types shared by the board model, move generation, and the
//! public game API.

use std::fmt;

pub use crate::game_state::game_state::GameState;

/// Board square index (`0..=63`, `0 == a1`, `63 == h8`).
pub type Square = u8;

/// Side owning a piece. `First` starts on ranks 1-2, `Second` on ranks 7-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    First,
    Second,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::First, Team::Second];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Team::First => 0,
            Team::Second => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Team::First => Team::Second,
            Team::Second => Team::First,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::First => write!(f, "first"),
            Team::Second => write!(f, "second"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Bishop,
    Rook,
    Knight,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Bishop => 1,
            PieceKind::Rook => 2,
            PieceKind::Knight => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// Identity of a piece on the board: which team owns it and what it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId {
    team: Team,
    kind: PieceKind,
}

impl PieceId {
    #[inline]
    pub const fn new(team: Team, kind: PieceKind) -> Self {
        Self { team, kind }
    }

    #[inline]
    pub const fn team(self) -> Team {
        self.team
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn is(self, team: Team, kind: PieceKind) -> bool {
        self.team == team && self.kind == kind
    }
}

/// Position classification for one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// True once the game cannot continue for this team.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Normal => "normal",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(name)
    }
}

/// Outcome of a successfully committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureResult {
    NoCapture,
    /// The square the captured piece was removed from. For en passant this is
    /// the captured pawn's square, not the mover's destination.
    Captured(Square),
}
