//! Connect-four rules engine and search.
//!
//! Structurally a small sibling of the chess module: a grid type with
//! make/unmake mutation (`drop`/`lift`), a heuristic evaluator over all
//! length-4 windows, and an alpha-beta minimax that picks a column.
//!
//! # Example
//! ```
//! use board_games::connect_four::{best_column, Grid, Player};
//!
//! let mut grid = Grid::new();
//! grid.drop(3, Player::One).unwrap();
//! let reply = best_column(&mut grid, 4, Player::Two);
//! assert!(reply.is_some());
//! ```

mod eval;
mod grid;
pub mod search;

pub use eval::score_position;
pub use grid::{ColumnFullError, Grid, Player, COLUMNS, CONNECT, ROWS};
pub use search::{best_column, WIN_SCORE};
