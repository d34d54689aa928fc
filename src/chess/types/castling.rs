//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

const WHITE_KINGSIDE: u8 = 1 << 0;
const WHITE_QUEENSIDE: u8 = 1 << 1;
const BLACK_KINGSIDE: u8 = 1 << 2;
const BLACK_QUEENSIDE: u8 = 1 << 3;

const ALL_RIGHTS: u8 = WHITE_KINGSIDE | WHITE_QUEENSIDE | BLACK_KINGSIDE | BLACK_QUEENSIDE;

/// The four castling rights as a bitmask.
///
/// Rights only ever transition from set to cleared over the course of a
/// game; `set` exists for position setup (FEN parsing), not for play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights.
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All four rights, as in the initial position.
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_RIGHTS)
    }

    /// Check a specific right.
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    /// Grant a specific right (position setup only).
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Clear a specific right.
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Clear both rights of one side (king moved).
    #[inline]
    pub fn remove_both(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => WHITE_KINGSIDE,
            (Color::White, false) => WHITE_QUEENSIDE,
            (Color::Black, true) => BLACK_KINGSIDE,
            (Color::Black, false) => BLACK_QUEENSIDE,
        }
    }
}
