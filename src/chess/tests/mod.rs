//! Engine test suite, split by concern.

mod make_unmake;
mod perft;
mod search;

#[cfg(feature = "serde")]
mod serde_round_trip {
    use crate::chess::{Board, Move, Piece, Square};

    #[test]
    fn test_move_survives_json() {
        let m = Move::promotion(Square(1, 0), Square(0, 0), Piece::Queen);
        let json = serde_json::to_string(&m).expect("serialize");
        let back: Move = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(m, back);
    }

    #[test]
    fn test_legal_move_list_survives_json() {
        let mut board = Board::new();
        let moves = board.legal_moves();
        let json = serde_json::to_string(&moves).expect("serialize");
        let back: Vec<Move> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(moves, back);
    }
}
