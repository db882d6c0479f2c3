//! Team-relative board stepping.
//!
//! Every direction is expressed from the moving team's point of view: the
//! first team advances toward higher square indices, the second team toward
//! lower ones, and left/right are mirrored accordingly. This module is the only
//! place that knows about file wrap-around and the board edges.

use crate::game_state::chess_types::{Square, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Advance,
    Retreat,
    Left,
    Right,
    AdvanceLeft,
    AdvanceRight,
    RetreatLeft,
    RetreatRight,
}

impl Direction {
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Advance,
        Direction::Retreat,
        Direction::Left,
        Direction::Right,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::AdvanceLeft,
        Direction::AdvanceRight,
        Direction::RetreatLeft,
        Direction::RetreatRight,
    ];

    pub const ALL: [Direction; 8] = [
        Direction::AdvanceLeft,
        Direction::AdvanceRight,
        Direction::RetreatLeft,
        Direction::RetreatRight,
        Direction::Advance,
        Direction::Retreat,
        Direction::Left,
        Direction::Right,
    ];

    /// (file delta, rank delta) as seen by the first team.
    const fn deltas(self) -> (i8, i8) {
        match self {
            Direction::Advance => (0, 1),
            Direction::Retreat => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::AdvanceLeft => (-1, 1),
            Direction::AdvanceRight => (1, 1),
            Direction::RetreatLeft => (-1, -1),
            Direction::RetreatRight => (1, -1),
        }
    }
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn is_on_board(square: Square) -> bool {
    square < 64
}

/// One step from `square` in `direction` for `team`, or `None` if the step
/// leaves the board or wraps around a file edge.
pub fn step(direction: Direction, team: Team, square: Square) -> Option<Square> {
    if !is_on_board(square) {
        return None;
    }

    let (mut d_file, mut d_rank) = direction.deltas();
    if team == Team::Second {
        d_file = -d_file;
        d_rank = -d_rank;
    }

    let file = file_of(square) as i8 + d_file;
    let rank = rank_of(square) as i8 + d_rank;
    if !(0..8).contains(&file) || !(0..8).contains(&rank) {
        return None;
    }

    Some((rank * 8 + file) as Square)
}

/// Apply several steps in sequence; `None` as soon as one falls off the board.
pub fn step_path(path: &[Direction], team: Team, square: Square) -> Option<Square> {
    path.iter()
        .try_fold(square, |current, &direction| step(direction, team, current))
}
