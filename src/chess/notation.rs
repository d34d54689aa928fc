//! Console move notation and committed move application.
//!
//! Moves arrive as 4-5 ASCII characters: source square, destination square,
//! optional promotion letter (`e2e4`, `e7e8q`). Malformed or illegal input
//! is rejected without touching the position.

use super::error::{IllegalMoveError, MoveParseError, PlayError};
use super::state::Board;
use super::types::{Move, Piece, Square};

impl Board {
    /// Parse move notation into `(from, to, promotion)`.
    pub fn parse_move(notation: &str) -> Result<(Square, Square, Option<Piece>), MoveParseError> {
        let s = notation.trim().to_ascii_lowercase();
        let len = s.chars().count();
        if len != 4 && len != 5 {
            return Err(MoveParseError::InvalidLength { len });
        }

        // Slice with `get` so non-ASCII input (where char and byte counts
        // diverge) is rejected rather than panicking on a char boundary.
        let from: Square = s
            .get(0..2)
            .unwrap_or("")
            .parse()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: s.clone(),
            })?;
        let to: Square = s
            .get(2..4)
            .unwrap_or("")
            .parse()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: s.clone(),
            })?;

        let promotion = match s.chars().nth(4) {
            None => None,
            Some('q') => Some(Piece::Queen),
            Some('r') => Some(Piece::Rook),
            Some('b') => Some(Piece::Bishop),
            Some('n') => Some(Piece::Knight),
            Some(c) => return Err(MoveParseError::InvalidPromotion { char: c }),
        };

        Ok((from, to, promotion))
    }

    /// Commit the legal move matching `(from, to, promotion)`.
    ///
    /// The committed move is the generator's, so its en-passant and castle
    /// flags are authoritative; a promotion-row pawn move without an
    /// explicit choice matches nothing and is rejected.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<Move, IllegalMoveError> {
        let matched = self
            .legal_moves()
            .into_iter()
            .find(|m| m.matches(from, to, promotion))
            .ok_or(IllegalMoveError {
                from,
                to,
                promotion,
            })?;
        self.make_move(&matched);
        Ok(matched)
    }

    /// Parse and commit a move in console notation.
    pub fn play(&mut self, notation: &str) -> Result<Move, PlayError> {
        let (from, to, promotion) = Board::parse_move(notation)?;
        Ok(self.apply_move(from, to, promotion)?)
    }
}
