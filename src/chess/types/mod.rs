//! Core value types: squares, pieces, moves, castling rights.

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
pub(crate) use square::{file_to_index, rank_to_index};
