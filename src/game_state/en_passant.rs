//! Fixed-capacity set of en-passant target squares.
//!
//! A square is a target when the pawn standing on it double-stepped on the
//! immediately preceding ply. The executor clears the set on every committed
//! move, so in practice it holds at most one entry.

use crate::game_state::chess_rules::EN_PASSANT_CAPACITY;
use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnPassantTargets {
    slots: [Option<Square>; EN_PASSANT_CAPACITY],
}

impl Default for EnPassantTargets {
    fn default() -> Self {
        Self {
            slots: [None; EN_PASSANT_CAPACITY],
        }
    }
}

impl EnPassantTargets {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `square`. Returns false when the set is full; duplicates are
    /// accepted silently.
    pub fn insert(&mut self, square: Square) -> bool {
        if self.contains(square) {
            return true;
        }
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(square);
                true
            }
            None => false,
        }
    }

    /// Removes `square`, returning whether it was present.
    pub fn remove(&mut self, square: Square) -> bool {
        match self.slots.iter_mut().find(|slot| **slot == Some(square)) {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        self.slots.contains(&Some(square))
    }

    #[inline]
    pub fn clear(&mut self) {
        self.slots = [None; EN_PASSANT_CAPACITY];
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.slots.iter().flatten().copied()
    }
}
