//! Attack detection.
//!
//! `is_square_attacked` is computed closed-form from the raw grid rather
//! than through move generation; the castling-safety checks inside the
//! generator call it, so routing it through the generator would recurse.

use super::state::Board;
use super::types::{Color, Piece, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

impl Board {
    /// Returns true if any piece of `by` attacks `sq`.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        // Pawns attack the two squares diagonally ahead of them, so an
        // attacking pawn sits one row behind sq from `by`'s perspective.
        for d_file in [-1, 1] {
            if let Some(from) = sq.offset(-by.pawn_direction(), d_file) {
                if self.piece_at(from) == Some((by, Piece::Pawn)) {
                    return true;
                }
            }
        }

        for (d_row, d_file) in KNIGHT_OFFSETS {
            if let Some(from) = sq.offset(d_row, d_file) {
                if self.piece_at(from) == Some((by, Piece::Knight)) {
                    return true;
                }
            }
        }

        for (d_row, d_file) in KING_OFFSETS {
            if let Some(from) = sq.offset(d_row, d_file) {
                if self.piece_at(from) == Some((by, Piece::King)) {
                    return true;
                }
            }
        }

        // Ray-cast outward from sq: the first occupied square along each ray
        // decides whether the ray attacks.
        if self.ray_attacked(sq, by, &BISHOP_DIRECTIONS, Piece::attacks_diagonally) {
            return true;
        }
        self.ray_attacked(sq, by, &ROOK_DIRECTIONS, Piece::attacks_straight)
    }

    fn ray_attacked(
        &self,
        sq: Square,
        by: Color,
        directions: &[(isize, isize)],
        attacks_along: fn(Piece) -> bool,
    ) -> bool {
        for &(d_row, d_file) in directions {
            let mut current = sq;
            while let Some(next) = current.offset(d_row, d_file) {
                if let Some((color, piece)) = self.piece_at(next) {
                    if color == by && attacks_along(piece) {
                        return true;
                    }
                    break;
                }
                current = next;
            }
        }
        false
    }
}
