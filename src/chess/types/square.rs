//! Square type and algebraic-notation parsing.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::chess::error::SquareError;

pub(crate) fn file_to_index(file: char) -> usize {
    file as usize - ('a' as usize)
}

/// Map a rank digit to a board row. Rank 8 is row 0: rows count down from
/// the top of the board.
pub(crate) fn rank_to_index(rank: char) -> usize {
    8 - ((rank as usize) - ('0' as usize))
}

/// A board square as `(row, file)`, both in `0..8`. Row 0 is rank 8.
///
/// The fields are crate-private so every square built outside the crate
/// goes through a bounds check (`new`, `try_from` or notation parsing) and
/// board indexing stays in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub(crate) usize, pub(crate) usize);

impl Square {
    /// Create a new square with bounds checking.
    #[must_use]
    pub fn new(row: usize, file: usize) -> Option<Self> {
        if row < 8 && file < 8 {
            Some(Square(row, file))
        } else {
            None
        }
    }

    /// Board row (0 = rank 8, 7 = rank 1).
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Board file (0 = file a).
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// The square offset by `(d_row, d_file)`, or `None` if off the board.
    #[must_use]
    pub fn offset(self, d_row: isize, d_file: isize) -> Option<Self> {
        let row = self.0 as isize + d_row;
        let file = self.1 as isize + d_file;
        if (0..8).contains(&row) && (0..8).contains(&file) {
            Some(Square(row as usize, file as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, 8 - self.0)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, file): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(row, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let file = match chars[0] {
            'a'..='h' => file_to_index(chars[0]),
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let row = match chars[1] {
            '1'..='8' => rank_to_index(chars[1]),
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Square(row, file))
    }
}
