//! Make/unmake round-trip tests.

use rand::prelude::*;

use crate::chess::{Board, Color, Move, Piece, Square};

fn find_move(board: &mut Board, from: Square, to: Square, promotion: Option<Piece>) -> Move {
    board
        .legal_moves()
        .into_iter()
        .find(|m| m.matches(from, to, promotion))
        .expect("expected move not found")
}

#[test]
fn test_every_initial_move_round_trips() {
    let mut board = Board::new();
    let initial_fen = board.to_fen();
    for m in board.legal_moves() {
        board.make_move(&m);
        board.unmake_move();
        assert_eq!(board.to_fen(), initial_fen, "round trip failed for {m}");
    }
}

#[test]
fn test_capture_make_unmake_restores_victim() {
    // White pawn e4 takes the d5 pawn.
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2");
    let original = board.to_fen();

    let mv = find_move(&mut board, Square(4, 4), Square(3, 3), None);
    let captured = board.make_move(&mv);
    assert_eq!(captured, Some((Color::Black, Piece::Pawn)));
    assert_eq!(board.piece_at(Square(3, 3)), Some((Color::White, Piece::Pawn)));

    board.unmake_move();
    assert_eq!(board.to_fen(), original);
}

#[test]
fn test_en_passant_make_unmake() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let original = board.to_fen();

    let mv = find_move(&mut board, Square(3, 4), Square(2, 5), None);
    assert!(mv.is_en_passant);
    board.make_move(&mv);

    // The f5 pawn is gone and the capturer stands on f6.
    assert_eq!(board.piece_at(Square(3, 5)), None);
    assert_eq!(board.piece_at(Square(2, 5)), Some((Color::White, Piece::Pawn)));

    board.unmake_move();
    assert_eq!(board.to_fen(), original);
    assert_eq!(board.en_passant_target(), Some(Square(2, 5)));
}

#[test]
fn test_promotion_make_unmake() {
    let mut board = Board::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1");
    let original = board.to_fen();

    let mv = find_move(&mut board, Square(1, 0), Square(0, 0), Some(Piece::Queen));
    board.make_move(&mv);
    assert_eq!(board.piece_at(Square(0, 0)), Some((Color::White, Piece::Queen)));

    board.unmake_move();
    assert_eq!(board.piece_at(Square(1, 0)), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.to_fen(), original);
}

#[test]
fn test_castle_make_unmake_both_wings() {
    for (to_file, rook_from, rook_to) in [(6, 7, 5), (2, 0, 3)] {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let original = board.to_fen();

        let mv = find_move(&mut board, Square(7, 4), Square(7, to_file), None);
        assert!(mv.is_castle);
        board.make_move(&mv);

        assert_eq!(
            board.piece_at(Square(7, to_file)),
            Some((Color::White, Piece::King))
        );
        assert_eq!(board.piece_at(Square(7, rook_from)), None);
        assert_eq!(
            board.piece_at(Square(7, rook_to)),
            Some((Color::White, Piece::Rook))
        );
        assert!(!board.castling_rights().has(Color::White, true));
        assert!(!board.castling_rights().has(Color::White, false));
        assert!(board.castling_rights().has(Color::Black, true));

        board.unmake_move();
        assert_eq!(board.to_fen(), original);
    }
}

#[test]
fn test_rook_move_clears_one_right() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let mv = find_move(&mut board, Square(7, 0), Square(6, 0), None);
    board.make_move(&mv);
    assert!(!board.castling_rights().has(Color::White, false));
    assert!(board.castling_rights().has(Color::White, true));
}

#[test]
fn test_rook_capture_clears_victims_right() {
    // Rh1xh8 removes Black's kingside right along with the rook.
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let mv = find_move(&mut board, Square(7, 7), Square(0, 7), None);
    board.make_move(&mv);
    assert!(!board.castling_rights().has(Color::Black, true));
    assert!(board.castling_rights().has(Color::Black, false));
    // The mover's own corner is vacated too.
    assert!(!board.castling_rights().has(Color::White, true));

    board.unmake_move();
    assert!(board.castling_rights().has(Color::Black, true));
    assert!(board.castling_rights().has(Color::White, true));
}

#[test]
fn test_king_move_clears_both_rights() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let mv = find_move(&mut board, Square(7, 4), Square(6, 4), None);
    board.make_move(&mv);
    assert!(!board.castling_rights().has(Color::White, true));
    assert!(!board.castling_rights().has(Color::White, false));
    assert!(board.castling_rights().has(Color::Black, true));
    assert!(board.castling_rights().has(Color::Black, false));
}

#[test]
fn test_clocks_advance_and_restore() {
    let mut board = Board::new();
    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(board.fullmove_number(), 1);

    board.play("e2e4").unwrap();
    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(board.fullmove_number(), 1);

    board.play("g8f6").unwrap();
    assert_eq!(board.halfmove_clock(), 1);
    assert_eq!(board.fullmove_number(), 2);

    board.play("b1c3").unwrap();
    assert_eq!(board.halfmove_clock(), 2);

    board.unmake_move();
    board.unmake_move();
    board.unmake_move();
    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(board.fullmove_number(), 1);
    assert_eq!(board.to_fen(), Board::new().to_fen());
}

#[test]
fn test_unmake_on_empty_stack_is_a_no_op() {
    let mut board = Board::new();
    let before = board.to_fen();
    board.unmake_move();
    assert_eq!(board.to_fen(), before);
}

#[test]
fn test_random_playout_round_trip_state() {
    let mut board = Board::new();
    let initial_fen = board.to_fen();
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut fens = Vec::new();

    for _ in 0..200 {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        fens.push(board.to_fen());
        let mv = moves[rng.gen_range(0..moves.len())];
        board.make_move(&mv);
    }

    while let Some(expected) = fens.pop() {
        board.unmake_move();
        assert_eq!(board.to_fen(), expected);
    }
    assert_eq!(board.to_fen(), initial_fen);
}

#[test]
fn test_legal_moves_stable_after_probing() {
    let mut board = Board::new();
    let initial_moves = board.legal_moves();
    let mut initial_list: Vec<String> = initial_moves.iter().map(|m| m.to_string()).collect();
    initial_list.sort();

    for mv in &initial_moves {
        board.make_move(mv);
        board.unmake_move();
    }

    let mut after_list: Vec<String> =
        board.legal_moves().iter().map(|m| m.to_string()).collect();
    after_list.sort();

    assert_eq!(initial_list, after_list);
}
