//! Minimax column search with alpha-beta pruning.
//!
//! The searching player maximizes its own `score_position`; the opponent's
//! replies minimize it. Columns are tried center-out, which tends to find
//! the strong move early and sharpens pruning. Mutation is drop/lift on
//! the live grid.

use super::eval::score_position;
use super::grid::{Grid, Player, CENTER_COLUMN};

/// Score of a completed connect four, far outside the heuristic range.
pub const WIN_SCORE: i32 = 10_000_000;

const INFINITY: i32 = 1_000_000_000;

/// Pick the best column for `player`, searching `depth` plies ahead.
///
/// Returns `None` when the game is already decided or the grid is full.
#[must_use]
pub fn best_column(grid: &mut Grid, depth: u32, player: Player) -> Option<usize> {
    if grid.is_terminal() {
        return None;
    }
    let (column, _score) = minimax(grid, depth, -INFINITY, INFINITY, true, player);

    #[cfg(feature = "logging")]
    log::debug!("depth {depth}: best column {column:?} for {player}");

    column
}

fn minimax(
    grid: &mut Grid,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    player: Player,
) -> (Option<usize>, i32) {
    let opponent = player.opponent();

    if depth == 0 || grid.is_terminal() {
        if grid.has_connect_four(player) {
            return (None, WIN_SCORE);
        }
        if grid.has_connect_four(opponent) {
            return (None, -WIN_SCORE);
        }
        return (None, score_position(grid, player));
    }

    let mut columns = grid.valid_columns();
    if columns.is_empty() {
        return (None, 0);
    }
    columns.sort_by_key(|c| c.abs_diff(CENTER_COLUMN));

    let mut best_column = columns[0];
    if maximizing {
        let mut value = -INFINITY;
        for &column in &columns {
            if grid.drop(column, player).is_err() {
                continue;
            }
            let (_, score) = minimax(grid, depth - 1, alpha, beta, false, player);
            grid.lift(column);
            if score > value {
                value = score;
                best_column = column;
            }
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        (Some(best_column), value)
    } else {
        let mut value = INFINITY;
        for &column in &columns {
            if grid.drop(column, opponent).is_err() {
                continue;
            }
            let (_, score) = minimax(grid, depth - 1, alpha, beta, true, player);
            grid.lift(column);
            if score < value {
                value = score;
                best_column = column;
            }
            beta = beta.min(value);
            if alpha >= beta {
                break;
            }
        }
        (Some(best_column), value)
    }
}
