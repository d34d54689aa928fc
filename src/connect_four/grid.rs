//! The 6x7 grid and its drop/lift mutation primitives.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Grid height.
pub const ROWS: usize = 6;
/// Grid width.
pub const COLUMNS: usize = 7;
/// Discs in a row needed to win.
pub const CONNECT: usize = 4;

pub(crate) const CENTER_COLUMN: usize = COLUMNS / 2;

/// The two players. Player one conventionally moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other player.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    #[inline]
    #[must_use]
    const fn to_char(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// A drop into a column that has no room left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnFullError {
    pub column: usize,
}

impl fmt::Display for ColumnFullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Column {} is full", self.column)
    }
}

impl std::error::Error for ColumnFullError {}

/// A connect-four position.
///
/// Indexed `(row, column)` with row 0 at the top; gravity pulls discs
/// toward row 5. Search mutates the grid through `drop`/`lift` pairs, the
/// same make/unmake discipline the chess engine uses.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    cells: [[Option<Player>; COLUMNS]; ROWS],
}

impl Grid {
    /// An empty grid.
    #[must_use]
    pub fn new() -> Self {
        Grid::default()
    }

    /// The disc at `(row, column)`, if any.
    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<Player> {
        self.cells[row][column]
    }

    /// Whether `column` can still take a disc.
    #[inline]
    #[must_use]
    pub fn is_open(&self, column: usize) -> bool {
        self.cells[0][column].is_none()
    }

    /// Columns that can still take a disc, left to right.
    #[must_use]
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..COLUMNS).filter(|&c| self.is_open(c)).collect()
    }

    /// Drop a disc into `column`; it settles on the lowest empty row,
    /// which is returned.
    pub fn drop(&mut self, column: usize, player: Player) -> Result<usize, ColumnFullError> {
        for row in (0..ROWS).rev() {
            if self.cells[row][column].is_none() {
                self.cells[row][column] = Some(player);
                return Ok(row);
            }
        }
        Err(ColumnFullError { column })
    }

    /// Remove the topmost disc of `column`, undoing the matching `drop`.
    /// Returns the removed disc, or `None` if the column is empty.
    pub fn lift(&mut self, column: usize) -> Option<Player> {
        for row in 0..ROWS {
            if let Some(player) = self.cells[row][column] {
                self.cells[row][column] = None;
                return Some(player);
            }
        }
        None
    }

    /// Whether `player` has four discs in a line (horizontal, vertical or
    /// either diagonal).
    #[must_use]
    pub fn has_connect_four(&self, player: Player) -> bool {
        let owned = |row: usize, col: usize| self.cells[row][col] == Some(player);

        for r in 0..ROWS {
            for c in 0..=COLUMNS - CONNECT {
                if (0..CONNECT).all(|i| owned(r, c + i)) {
                    return true;
                }
            }
        }
        for c in 0..COLUMNS {
            for r in 0..=ROWS - CONNECT {
                if (0..CONNECT).all(|i| owned(r + i, c)) {
                    return true;
                }
            }
        }
        for r in 0..=ROWS - CONNECT {
            for c in 0..=COLUMNS - CONNECT {
                if (0..CONNECT).all(|i| owned(r + i, c + i)) {
                    return true;
                }
            }
        }
        for r in CONNECT - 1..ROWS {
            for c in 0..=COLUMNS - CONNECT {
                if (0..CONNECT).all(|i| owned(r - i, c + i)) {
                    return true;
                }
            }
        }
        false
    }

    /// Whether the grid has no open columns left.
    #[must_use]
    pub fn is_full(&self) -> bool {
        (0..COLUMNS).all(|c| self.cells[0][c].is_some())
    }

    /// Whether the game is over: somebody connected four, or the grid
    /// filled up.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.has_connect_four(Player::One) || self.has_connect_four(Player::Two) || self.is_full()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            write!(f, "|")?;
            for cell in row {
                match cell {
                    Some(player) => write!(f, " {}", player.to_char())?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f, " |")?;
        }
        write!(f, "  1 2 3 4 5 6 7")
    }
}
