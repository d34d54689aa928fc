//! Rules engines and minimax opponents for two-player board games.
//!
//! The heavy lifting lives in the [`chess`] module: full legality (castling,
//! en passant, promotion, check detection) via make/unmake probing, plus an
//! alpha-beta search over a material evaluation. [`connect_four`] is the
//! same search pattern over a 6x7 drop grid with window-based threat
//! scoring.
//!
//! Front ends (graphical or console) are consumers of this crate: they ask
//! for legal moves, commit one, and query the outcome.
//!
//! # Example
//! ```
//! use board_games::chess::{Board, Outcome};
//!
//! let mut board = Board::new();
//! assert_eq!(board.legal_moves().len(), 20);
//! board.play("e2e4").unwrap();
//! assert_eq!(board.outcome(), Outcome::Ongoing);
//! ```

pub mod chess;
pub mod connect_four;

pub use chess::{Board, Color, Move, Outcome, Piece, Square};
