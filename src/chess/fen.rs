//! FEN parsing and formatting.

use super::error::FenError;
use super::state::Board;
use super::types::{file_to_index, rank_to_index, CastlingRights, Color, Piece, Square};

impl Board {
    /// Parse a position from FEN notation.
    ///
    /// The clock fields (parts 5 and 6) are optional and default to 0 and 1;
    /// when present they must be numeric.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Piece placement runs rank 8 down to rank 1, which is row 0 to 7.
        for (row, rank_str) in parts[0].split('/').enumerate() {
            if row >= 8 {
                return Err(FenError::TooManyRanks { ranks: row + 1 });
            }
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    file += digit as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: row,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square(row, file), color, piece);
                    file += 1;
                }
            }
        }

        match parts[1] {
            "w" => board.white_to_move = true,
            "b" => board.white_to_move = false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        }

        let mut rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => rights.set(Color::White, true),
                'Q' => rights.set(Color::White, false),
                'k' => rights.set(Color::Black, true),
                'q' => rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        board.castling_rights = rights;

        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let chars: Vec<char> = parts[3].chars().collect();
            if chars.len() == 2
                && ('a'..='h').contains(&chars[0])
                && ('1'..='8').contains(&chars[1])
            {
                Some(Square(rank_to_index(chars[1]), file_to_index(chars[0])))
            } else {
                return Err(FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                });
            }
        };

        if let Some(halfmove) = parts.get(4) {
            board.halfmove_clock = halfmove.parse().map_err(|_| FenError::InvalidClock {
                found: (*halfmove).to_string(),
            })?;
        }
        if let Some(fullmove) = parts.get(5) {
            board.fullmove_number = fullmove.parse().map_err(|_| FenError::InvalidClock {
                found: (*fullmove).to_string(),
            })?;
        }

        Ok(board)
    }

    /// Parse a position from FEN notation, panicking on malformed input.
    /// Convenience for tests and fixed internal positions.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid; use [`Board::try_from_fen`] for
    /// untrusted input.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Board::try_from_fen(fen).expect("invalid FEN")
    }

    /// Format the position as a FEN string.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for row in 0..8 {
            let mut empty_run = 0;
            for file in 0..8 {
                match self.piece_at(Square(row, file)) {
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            fen.push(char::from_digit(empty_run, 10).unwrap_or('0'));
                            empty_run = 0;
                        }
                        fen.push(piece.to_fen_char(color));
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                fen.push(char::from_digit(empty_run, 10).unwrap_or('0'));
            }
            if row < 7 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(if self.white_to_move { 'w' } else { 'b' });

        fen.push(' ');
        let rights = self.castling_rights;
        if rights == CastlingRights::none() {
            fen.push('-');
        } else {
            if rights.has(Color::White, true) {
                fen.push('K');
            }
            if rights.has(Color::White, false) {
                fen.push('Q');
            }
            if rights.has(Color::Black, true) {
                fen.push('k');
            }
            if rights.has(Color::Black, false) {
                fen.push('q');
            }
        }

        fen.push(' ');
        match self.en_passant_target {
            Some(sq) => fen.push_str(&sq.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }
}
