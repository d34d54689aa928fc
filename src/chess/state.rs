//! Board state: the mailbox grid plus everything that rides along with it
//! (side to move, castling rights, en-passant target, clocks, undo history).

use std::fmt;

use super::error::MissingKingError;
use super::types::{CastlingRights, Color, Move, Piece, Square};

/// One entry of the undo stack, recorded by `make_move` and consumed by
/// `unmake_move`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HistoryEntry {
    pub(crate) mv: Move,
    pub(crate) captured: Option<(Color, Piece)>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

/// Result of a finished (or unfinished) game, computed from the legal move
/// set and check status of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

/// A full chess game state.
///
/// The grid is indexed `squares[row][file]` with row 0 at the top (rank 8).
/// All mutation goes through `make_move`/`unmake_move`, which keep the undo
/// stack in strict push/pop discipline: every speculative make used for a
/// legality probe is undone before the probing function returns.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8],
    pub(crate) white_to_move: bool,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) history: Vec<HistoryEntry>,
}

impl Board {
    /// The initial chess position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_row = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_row.iter().enumerate() {
            board.squares[0][file] = Some((Color::Black, *piece));
            board.squares[1][file] = Some((Color::Black, Piece::Pawn));
            board.squares[6][file] = Some((Color::White, Piece::Pawn));
            board.squares[7][file] = Some((Color::White, *piece));
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            white_to_move: true,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    /// The piece on a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.squares[sq.0][sq.1] = None;
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    /// The side to move.
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Whether White is to move.
    #[inline]
    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    /// Current castling rights.
    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// The en-passant target square, valid for exactly one ply after a
    /// two-square pawn advance.
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Plies since the last capture or pawn move.
    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Move number, starting at 1 and incremented after each Black move.
    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Locate the king of `color` by scanning the grid.
    ///
    /// A missing king means the position is corrupt; the error must not be
    /// swallowed.
    pub fn king_square(&self, color: Color) -> Result<Square, MissingKingError> {
        for row in 0..8 {
            for file in 0..8 {
                if self.squares[row][file] == Some((color, Piece::King)) {
                    return Ok(Square(row, file));
                }
            }
        }
        Err(MissingKingError { color })
    }

    /// Whether `color`'s king is attacked.
    ///
    /// # Panics
    /// Panics if `color` has no king; positions fed through `make_move`
    /// always have one, so this fires only on corrupt setups.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        let king = self
            .king_square(color)
            .expect("in_check on a position without a king");
        self.is_square_attacked(king, color.opponent())
    }

    /// Game result for the current position.
    #[must_use]
    pub fn outcome(&mut self) -> Outcome {
        if !self.legal_moves().is_empty() {
            return Outcome::Ongoing;
        }
        let side = self.side_to_move();
        if self.in_check(side) {
            Outcome::Checkmate {
                winner: side.opponent(),
            }
        } else {
            Outcome::Stalemate
        }
    }

    /// Checkmate test for the side to move.
    #[must_use]
    pub fn is_checkmate(&mut self) -> bool {
        self.in_check(self.side_to_move()) && self.legal_moves().is_empty()
    }

    /// Stalemate test for the side to move.
    #[must_use]
    pub fn is_stalemate(&mut self) -> bool {
        !self.in_check(self.side_to_move()) && self.legal_moves().is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +------------------------+")?;
        for row in 0..8 {
            write!(f, "{} | ", 8 - row)?;
            for file in 0..8 {
                match self.squares[row][file] {
                    Some((color, piece)) => write!(f, "{} ", piece.to_fen_char(color))?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  +------------------------+")?;
        write!(f, "    a b c d e f g h")
    }
}
