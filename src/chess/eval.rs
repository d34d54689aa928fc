//! Static evaluation.

use super::state::Board;
use super::types::Square;

/// Tempo bonus for the side to move, in centipawns.
const TEMPO_BONUS: i32 = 10;

impl Board {
    /// Material balance plus a small side-to-move bonus, in centipawns.
    /// Positive favors White.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let mut score = 0;
        for row in 0..8 {
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(row, file)) {
                    score += color.sign() * piece.value();
                }
            }
        }
        score + self.side_to_move().sign() * TEMPO_BONUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::Board;

    #[test]
    fn test_initial_position_is_balanced_except_tempo() {
        let board = Board::new();
        assert_eq!(board.evaluate(), TEMPO_BONUS);
    }

    #[test]
    fn test_missing_knight_costs_320() {
        // Initial position without White's queenside knight, Black to move.
        let board = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/R1BQKBNR b KQkq - 0 1");
        assert_eq!(board.evaluate(), -320 - TEMPO_BONUS);
    }

    #[test]
    fn test_kings_are_worthless() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(board.evaluate(), TEMPO_BONUS);
    }

    #[test]
    fn test_sign_flips_with_color() {
        let white_up = Board::from_fen("4k3/8/8/8/8/8/8/Q3K3 b - - 0 1");
        let black_up = Board::from_fen("q3k3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(white_up.evaluate(), 900 - TEMPO_BONUS);
        assert_eq!(black_up.evaluate(), -900 + TEMPO_BONUS);
    }
}
