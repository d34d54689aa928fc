//! Heuristic threat scoring.
//!
//! Every length-4 window on the grid is scored for the given player:
//! completed lines dominate, three-with-a-gap counts as a strong threat,
//! two-with-room as a weak one, and an opponent three-with-a-gap is
//! penalized almost as much as the own threat is rewarded. Center-column
//! discs get a flat bonus since they sit in the most windows.

use super::grid::{Grid, Player, CENTER_COLUMN, COLUMNS, CONNECT, ROWS};

const CONNECTED_FOUR: i32 = 10_000;
const OPEN_THREE: i32 = 100;
const OPEN_TWO: i32 = 10;
const OPPONENT_OPEN_THREE: i32 = 90;
const CENTER_DISC: i32 = 6;

fn score_window(window: &[Option<Player>; CONNECT], player: Player) -> i32 {
    let opponent = player.opponent();
    let own = window.iter().filter(|&&c| c == Some(player)).count();
    let theirs = window.iter().filter(|&&c| c == Some(opponent)).count();
    let empty = window.iter().filter(|c| c.is_none()).count();

    let mut score = 0;
    if own == 4 {
        score += CONNECTED_FOUR;
    } else if own == 3 && empty == 1 {
        score += OPEN_THREE;
    } else if own == 2 && empty == 2 {
        score += OPEN_TWO;
    }
    if theirs == 3 && empty == 1 {
        score -= OPPONENT_OPEN_THREE;
    }
    score
}

/// Score the whole position for `player`. Positive favors `player`.
#[must_use]
pub fn score_position(grid: &Grid, player: Player) -> i32 {
    let mut score = 0;

    let center_discs = (0..ROWS)
        .filter(|&r| grid.cell(r, CENTER_COLUMN) == Some(player))
        .count();
    score += center_discs as i32 * CENTER_DISC;

    for r in 0..ROWS {
        for c in 0..=COLUMNS - CONNECT {
            let window = [
                grid.cell(r, c),
                grid.cell(r, c + 1),
                grid.cell(r, c + 2),
                grid.cell(r, c + 3),
            ];
            score += score_window(&window, player);
        }
    }

    for c in 0..COLUMNS {
        for r in 0..=ROWS - CONNECT {
            let window = [
                grid.cell(r, c),
                grid.cell(r + 1, c),
                grid.cell(r + 2, c),
                grid.cell(r + 3, c),
            ];
            score += score_window(&window, player);
        }
    }

    for r in 0..=ROWS - CONNECT {
        for c in 0..=COLUMNS - CONNECT {
            let window = [
                grid.cell(r, c),
                grid.cell(r + 1, c + 1),
                grid.cell(r + 2, c + 2),
                grid.cell(r + 3, c + 3),
            ];
            score += score_window(&window, player);
        }
    }

    for r in CONNECT - 1..ROWS {
        for c in 0..=COLUMNS - CONNECT {
            let window = [
                grid.cell(r, c),
                grid.cell(r - 1, c + 1),
                grid.cell(r - 2, c + 2),
                grid.cell(r - 3, c + 3),
            ];
            score += score_window(&window, player);
        }
    }

    score
}
