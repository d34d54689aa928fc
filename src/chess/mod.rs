//! Chess rules engine and search.
//!
//! The board is an 8x8 mailbox indexed `(row, file)` with row 0 at the top
//! (rank 8), so White pawns advance toward row 0. Legality is decided by the
//! make-check-unmake pattern: a pseudo-legal move is kept only if the
//! mover's king is not attacked after it, which catches pins and discovered
//! checks without any dedicated pin logic.
//!
//! # Example
//! ```
//! use board_games::chess::{search, Board};
//!
//! let mut board = Board::new();
//! let result = search::find_best_move(&mut board, 2);
//! assert!(result.best_move.is_some());
//! ```

mod attacks;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod notation;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{
    FenError, IllegalMoveError, MissingKingError, MoveParseError, PlayError, SquareError,
};
pub use state::{Board, Outcome};
pub use types::{CastlingRights, Color, Move, Piece, Square};

pub use search::{find_best_move, SearchResult, MATE_SCORE, MATE_THRESHOLD};
