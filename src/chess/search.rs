//! Minimax search with alpha-beta pruning.
//!
//! White maximizes and Black minimizes the static evaluation. Moves are
//! tried in generation order; there is no ordering heuristic, so pruning is
//! weaker than it could be, but results are identical. Board mutation is
//! make/unmake with a bounded undo stack, so no position is ever copied and
//! sibling branches never see each other's mutations.

use super::state::Board;
use super::types::{Color, Move};

/// Score of a delivered checkmate, seen from White (a mated White returns
/// `-MATE_SCORE`).
pub const MATE_SCORE: i32 = 99_999;

/// Scores at or above this magnitude indicate a forced mate somewhere in
/// the searched line.
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 100;

/// Sentinel bound outside any reachable score.
const INFINITY: i32 = 1_000_000;

/// Outcome of a search: the move to play and its backed-up score.
///
/// `best_move` is `None` only when the side to move has no legal moves.
#[derive(Clone, Copy, Debug)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
}

/// Search to `depth` plies and return the best move for the side to move.
pub fn find_best_move(board: &mut Board, depth: u32) -> SearchResult {
    let legal = board.legal_moves();
    if legal.is_empty() {
        return SearchResult {
            best_move: None,
            score: 0,
        };
    }

    let maximizing = board.side_to_move() == Color::White;
    let mut alpha = -INFINITY;
    let mut beta = INFINITY;
    let mut best_move = legal[0];
    let mut best_score = if maximizing { -INFINITY } else { INFINITY };

    for m in &legal {
        board.make_move(m);
        let score = minimax(board, depth.saturating_sub(1), alpha, beta);
        board.unmake_move();

        #[cfg(feature = "logging")]
        log::debug!("root move {m} scores {score}");

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = *m;
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = *m;
            }
            beta = beta.min(score);
        }
        if alpha >= beta {
            break;
        }
    }

    #[cfg(feature = "logging")]
    log::debug!("depth {depth}: best {best_move} score {best_score}");

    SearchResult {
        best_move: Some(best_move),
        score: best_score,
    }
}

fn minimax(board: &mut Board, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
    // Mate and stalemate are decided before the depth cutoff so that a
    // mating move found at the horizon still scores as mate.
    let moves = board.legal_moves();
    if moves.is_empty() {
        let side = board.side_to_move();
        if board.in_check(side) {
            // The sign favors the side that delivered the mate.
            return match side {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            };
        }
        return 0;
    }

    if depth == 0 {
        return board.evaluate();
    }

    if board.side_to_move() == Color::White {
        let mut value = -INFINITY;
        for m in &moves {
            board.make_move(m);
            value = value.max(minimax(board, depth - 1, alpha, beta));
            board.unmake_move();
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        value
    } else {
        let mut value = INFINITY;
        for m in &moves {
            board.make_move(m);
            value = value.min(minimax(board, depth - 1, alpha, beta));
            board.unmake_move();
            beta = beta.min(value);
            if alpha >= beta {
                break;
            }
        }
        value
    }
}
