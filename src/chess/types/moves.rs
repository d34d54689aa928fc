//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

/// A chess move.
///
/// Equality is structural; two moves with the same source, destination and
/// promotion compare equal, which is also the criterion `Board::apply_move`
/// uses to match a request against the legal set. The `is_en_passant` and
/// `is_castle` flags are set by the generator and trusted by make/unmake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl Move {
    /// A plain move with no special flags.
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            is_en_passant: false,
            is_castle: false,
        }
    }

    /// A pawn promotion.
    #[must_use]
    pub const fn promotion(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
            is_en_passant: false,
            is_castle: false,
        }
    }

    /// An en-passant capture onto the recorded target square.
    #[must_use]
    pub(crate) const fn en_passant(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            is_en_passant: true,
            is_castle: false,
        }
    }

    /// A castling move, given the king's source and destination.
    #[must_use]
    pub(crate) const fn castle(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            is_en_passant: false,
            is_castle: true,
        }
    }

    /// True if this move matches a `(from, to, promotion)` request.
    #[inline]
    #[must_use]
    pub fn matches(&self, from: Square, to: Square, promotion: Option<Piece>) -> bool {
        self.from == from && self.to == to && self.promotion == promotion
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}
