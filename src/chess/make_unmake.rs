//! Applying and reversing moves.
//!
//! `make_move` pushes an undo record; `unmake_move` pops it and restores
//! the prior state exactly. The record snapshots everything a move can
//! clobber irreversibly: castling rights, the en-passant target, and both
//! clocks. Legality probing unmakes on the live board, so the en-passant
//! target must survive the round trip, not merely be cleared.

use super::state::{Board, HistoryEntry};
use super::types::{Color, Move, Piece, Square};

impl Board {
    /// Apply `m`, which must come from the move generator (its flags are
    /// trusted). Returns the captured piece, if any.
    ///
    /// # Panics
    /// Panics if the source square is empty; the generator never produces
    /// such a move.
    pub fn make_move(&mut self, m: &Move) -> Option<(Color, Piece)> {
        let color = self.side_to_move();
        let (_, piece) = self
            .piece_at(m.from)
            .expect("make_move: source square is empty");

        let prior_rights = self.castling_rights;
        let prior_ep = self.en_passant_target;
        let prior_halfmove = self.halfmove_clock;
        let prior_fullmove = self.fullmove_number;

        // En passant captures the pawn beside the mover, not the (empty)
        // destination square.
        let captured = if m.is_en_passant {
            let victim_sq = Square(m.from.0, m.to.1);
            let victim = self.piece_at(victim_sq);
            self.clear_square(victim_sq);
            victim
        } else {
            self.piece_at(m.to)
        };

        self.clear_square(m.from);
        match m.promotion {
            Some(promo) => self.set_piece(m.to, color, promo),
            None => self.set_piece(m.to, color, piece),
        }

        if m.is_castle {
            self.move_castling_rook(color, m.to, false);
        }

        // A fresh en-passant target only survives a double pawn push.
        self.en_passant_target = None;
        if piece == Piece::Pawn && m.from.0.abs_diff(m.to.0) == 2 {
            let mid_row = (m.from.0 + m.to.0) / 2;
            self.en_passant_target = Some(Square(mid_row, m.from.1));
        }

        self.update_castling_rights(m, color, piece);

        if piece == Piece::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number += 1;
        }

        self.white_to_move = !self.white_to_move;
        self.history.push(HistoryEntry {
            mv: *m,
            captured,
            castling_rights: prior_rights,
            en_passant_target: prior_ep,
            halfmove_clock: prior_halfmove,
            fullmove_number: prior_fullmove,
        });
        captured
    }

    /// Reverse the most recent move. A no-op when the undo stack is empty.
    pub fn unmake_move(&mut self) {
        let Some(entry) = self.history.pop() else {
            return;
        };
        let m = entry.mv;

        self.white_to_move = !self.white_to_move;
        let color = self.side_to_move();

        // A promoted piece turns back into a pawn.
        let piece = if m.promotion.is_some() {
            Piece::Pawn
        } else {
            self.piece_at(m.to)
                .expect("unmake_move: destination square is empty")
                .1
        };
        self.set_piece(m.from, color, piece);

        if m.is_en_passant {
            // The captured pawn goes back beside the mover, one row behind
            // the (empty again) destination square.
            self.clear_square(m.to);
            if let Some((cap_color, cap_piece)) = entry.captured {
                self.set_piece(Square(m.from.0, m.to.1), cap_color, cap_piece);
            }
        } else {
            match entry.captured {
                Some((cap_color, cap_piece)) => self.set_piece(m.to, cap_color, cap_piece),
                None => self.clear_square(m.to),
            }
        }

        if m.is_castle {
            self.move_castling_rook(color, m.to, true);
        }

        self.castling_rights = entry.castling_rights;
        self.en_passant_target = entry.en_passant_target;
        self.halfmove_clock = entry.halfmove_clock;
        self.fullmove_number = entry.fullmove_number;
    }

    /// Relocate the rook half of a castle given the king's destination.
    fn move_castling_rook(&mut self, color: Color, king_to: Square, reverse: bool) {
        let row = king_to.0;
        let (corner_file, beside_file) = if king_to.1 == 6 { (7, 5) } else { (0, 3) };
        let (from_file, to_file) = if reverse {
            (beside_file, corner_file)
        } else {
            (corner_file, beside_file)
        };
        self.clear_square(Square(row, from_file));
        self.set_piece(Square(row, to_file), color, Piece::Rook);
    }

    /// Castling rights transitions are monotonic: a king move clears both of
    /// its side's rights, and any move touching a rook home corner (moving
    /// the rook away, or capturing on it) clears that corner's right.
    fn update_castling_rights(&mut self, m: &Move, color: Color, piece: Piece) {
        if piece == Piece::King {
            self.castling_rights.remove_both(color);
        }
        for corner_color in Color::BOTH {
            let row = corner_color.back_row();
            for (file, kingside) in [(0, false), (7, true)] {
                let corner = Square(row, file);
                if m.from == corner || m.to == corner {
                    self.castling_rights.remove(corner_color, kingside);
                }
            }
        }
    }
}
