//! Search behavior tests.

use crate::chess::{find_best_move, Board, Move, Square, MATE_THRESHOLD};

#[test]
fn test_finds_mate_in_one_for_white_at_depth_one() {
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    let result = find_best_move(&mut board, 1);
    assert_eq!(result.best_move, Some(Move::new(Square(7, 0), Square(0, 0))));
    assert!(result.score >= MATE_THRESHOLD);
}

#[test]
fn test_finds_mate_in_one_for_black_at_depth_one() {
    let mut board = Board::from_fen("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1");
    let result = find_best_move(&mut board, 1);
    assert_eq!(result.best_move, Some(Move::new(Square(0, 0), Square(7, 0))));
    assert!(result.score <= -MATE_THRESHOLD);
}

#[test]
fn test_captures_hanging_queen() {
    let mut board = Board::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
    let result = find_best_move(&mut board, 2);
    assert_eq!(result.best_move, Some(Move::new(Square(4, 4), Square(3, 3))));
    assert!(result.score > 800);
}

#[test]
fn test_blocks_or_escapes_mate_threat() {
    // White threatens Ra8#; Black's reply must deal with the back rank.
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 b - - 0 1");
    let result = find_best_move(&mut board, 2);
    let mv = result.best_move.expect("a move exists");
    board.make_move(&mv);
    let reply = find_best_move(&mut board, 1);
    assert!(
        reply.score < MATE_THRESHOLD,
        "Black played {mv} and still gets mated"
    );
}

#[test]
fn test_no_moves_yields_none() {
    // Stalemate: no legal moves, score 0.
    let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    let result = find_best_move(&mut board, 3);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 0);
}

#[test]
fn test_stalemate_scores_zero_in_search() {
    // White to move, a queen up, but Qg6 would stalemate the h8 king.
    // The search must see the 0 and keep a mating path instead.
    let mut board = Board::from_fen("7k/8/5K2/8/8/8/8/6Q1 w - - 0 1");
    let result = find_best_move(&mut board, 3);
    assert!(result.score >= MATE_THRESHOLD, "missed the forced mate");
    let mv = result.best_move.expect("a move exists");
    board.make_move(&mv);
    assert!(!board.is_stalemate(), "search chose a stalemating move: {mv}");
}

#[test]
fn test_search_leaves_board_unchanged() {
    let mut board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let before = board.to_fen();
    find_best_move(&mut board, 2);
    assert_eq!(board.to_fen(), before);
}

#[test]
fn test_deeper_search_never_worsens_a_forced_mate() {
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    for depth in 1..=3 {
        let result = find_best_move(&mut board, depth);
        assert!(
            result.score >= MATE_THRESHOLD,
            "depth {depth} lost the mate"
        );
    }
}
