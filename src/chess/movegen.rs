//! Pseudo-legal and legal move generation.

use super::attacks::{
    BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};
use super::state::Board;
use super::types::{Color, Move, Piece, Square, PROMOTION_PIECES};

impl Board {
    /// All pseudo-legal moves for `color`: piece movement rules are obeyed
    /// but the mover's king may be left attacked.
    ///
    /// Castle moves already carry their attack conditions (king not in
    /// check, transit and destination squares safe); only the squares-empty
    /// and rights checks distinguish them from legality.
    #[must_use]
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..8 {
            for file in 0..8 {
                let from = Square(row, file);
                match self.piece_at(from) {
                    Some((c, piece)) if c == color => match piece {
                        Piece::Pawn => self.pawn_moves(from, color, &mut moves),
                        Piece::Knight => {
                            self.offset_moves(from, color, &KNIGHT_OFFSETS, &mut moves);
                        }
                        Piece::Bishop => {
                            self.sliding_moves(from, color, &BISHOP_DIRECTIONS, &mut moves);
                        }
                        Piece::Rook => {
                            self.sliding_moves(from, color, &ROOK_DIRECTIONS, &mut moves);
                        }
                        Piece::Queen => {
                            self.sliding_moves(from, color, &QUEEN_DIRECTIONS, &mut moves);
                        }
                        Piece::King => {
                            self.offset_moves(from, color, &KING_OFFSETS, &mut moves);
                            self.castle_moves(from, color, &mut moves);
                        }
                    },
                    _ => {}
                }
            }
        }
        moves
    }

    /// All legal moves for the side to move.
    ///
    /// Filters the pseudo-legal set through make-check-unmake: a move
    /// survives only if the mover's king is not attacked afterwards. Pins
    /// and discovered checks fall out of this with no extra logic.
    #[must_use]
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let color = self.side_to_move();
        let pseudo = self.pseudo_legal_moves(color);
        let mut legal = Vec::with_capacity(pseudo.len());
        for m in pseudo {
            self.make_move(&m);
            if !self.in_check(color) {
                legal.push(m);
            }
            self.unmake_move();
        }
        legal
    }

    /// Legal moves starting on `sq`; empty if no piece of the side to move
    /// stands there.
    #[must_use]
    pub fn legal_moves_from(&mut self, sq: Square) -> Vec<Move> {
        self.legal_moves().into_iter().filter(|m| m.from == sq).collect()
    }

    fn pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let dir = color.pawn_direction();

        // Single push, with the double push nested inside: both need the
        // square directly ahead to be empty.
        if let Some(ahead) = from.offset(dir, 0) {
            if self.is_empty(ahead) {
                self.push_pawn_move(from, ahead, color, moves);
                if from.0 == color.pawn_start_row() {
                    if let Some(two_ahead) = from.offset(2 * dir, 0) {
                        if self.is_empty(two_ahead) {
                            moves.push(Move::new(from, two_ahead));
                        }
                    }
                }
            }
        }

        // Diagonal captures.
        for d_file in [-1, 1] {
            if let Some(to) = from.offset(dir, d_file) {
                if let Some((target_color, _)) = self.piece_at(to) {
                    if target_color != color {
                        self.push_pawn_move(from, to, color, moves);
                    }
                }
            }
        }

        // En passant: the target square is empty, one row ahead, adjacent
        // file; the captured pawn sits beside the mover.
        if let Some(target) = self.en_passant_target {
            if target.0 as isize == from.0 as isize + dir
                && (target.1 as isize - from.1 as isize).abs() == 1
            {
                moves.push(Move::en_passant(from, target));
            }
        }
    }

    /// Push a pawn move, fanning out into the four promotion choices when it
    /// reaches the far row. A bare promotion-row move without a choice is
    /// never emitted.
    fn push_pawn_move(&self, from: Square, to: Square, color: Color, moves: &mut Vec<Move>) {
        if to.0 == color.promotion_row() {
            for promo in PROMOTION_PIECES {
                moves.push(Move::promotion(from, to, promo));
            }
        } else {
            moves.push(Move::new(from, to));
        }
    }

    fn offset_moves(
        &self,
        from: Square,
        color: Color,
        offsets: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        for &(d_row, d_file) in offsets {
            if let Some(to) = from.offset(d_row, d_file) {
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some((c, _)) if c != color => moves.push(Move::new(from, to)),
                    Some(_) => {}
                }
            }
        }
    }

    fn sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        for &(d_row, d_file) in directions {
            let mut current = from;
            while let Some(to) = current.offset(d_row, d_file) {
                match self.piece_at(to) {
                    None => {
                        moves.push(Move::new(from, to));
                        current = to;
                    }
                    Some((c, _)) => {
                        if c != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
            }
        }
    }

    fn castle_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let row = color.back_row();
        if from != Square(row, 4) {
            return;
        }
        let enemy = color.opponent();

        // King side: f and g files empty; e, f, g not attacked.
        if self.castling_rights.has(color, true)
            && self.is_empty(Square(row, 5))
            && self.is_empty(Square(row, 6))
            && !self.is_square_attacked(Square(row, 4), enemy)
            && !self.is_square_attacked(Square(row, 5), enemy)
            && !self.is_square_attacked(Square(row, 6), enemy)
        {
            moves.push(Move::castle(from, Square(row, 6)));
        }

        // Queen side: b, c, d files empty; e, d, c not attacked (the rook's
        // b-file transit square may be attacked).
        if self.castling_rights.has(color, false)
            && self.is_empty(Square(row, 1))
            && self.is_empty(Square(row, 2))
            && self.is_empty(Square(row, 3))
            && !self.is_square_attacked(Square(row, 4), enemy)
            && !self.is_square_attacked(Square(row, 3), enemy)
            && !self.is_square_attacked(Square(row, 2), enemy)
        {
            moves.push(Move::castle(from, Square(row, 2)));
        }
    }

    /// Count leaf nodes of the legal move tree to `depth`. Standard
    /// correctness harness for the generator and make/unmake.
    #[must_use]
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in &moves {
            self.make_move(m);
            nodes += self.perft(depth - 1);
            self.unmake_move();
        }
        nodes
    }
}
