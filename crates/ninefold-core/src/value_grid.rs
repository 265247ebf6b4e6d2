//! The canonical 9×9 grid of optional digit values.
//!
//! [`ValueGrid`] is the external representation of board state: values only,
//! with no pencil marks or lock flags. It parses from and prints to the
//! common 81-character form used by Sudoku tooling, where `.` (or `0`)
//! denotes an empty cell:
//!
//! ```
//! use ninefold_core::{Digit, Position, ValueGrid};
//!
//! let grid: ValueGrid = format!("5{}", ".".repeat(80)).parse().unwrap();
//! assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
//! assert_eq!(grid.to_string().len(), 81);
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Digit, Position};

/// A 9×9 grid of optional digits, row-major.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueGrid {
    values: [[Option<Digit>; 9]; 9],
}

impl ValueGrid {
    /// Creates an all-empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: [[None; 9]; 9],
        }
    }

    /// Returns the value at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.values[usize::from(pos.row())][usize::from(pos.column())]
    }

    /// Sets or clears the value at `pos`.
    pub fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.values[usize::from(pos.row())][usize::from(pos.column())] = value;
    }

    /// Returns the underlying row-major array of rows.
    #[must_use]
    pub const fn rows(&self) -> &[[Option<Digit>; 9]; 9] {
        &self.values
    }

    /// Returns `true` if every cell holds a value.
    #[must_use]
    pub fn is_full(&self) -> bool {
        Position::ALL.iter().all(|pos| self.get(*pos).is_some())
    }
}

impl From<[[Option<Digit>; 9]; 9]> for ValueGrid {
    fn from(values: [[Option<Digit>; 9]; 9]) -> Self {
        Self { values }
    }
}

/// Error returned when parsing a [`ValueGrid`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseValueGridError {
    /// The input was not exactly 81 characters long.
    #[display("expected 81 characters, got {len}")]
    WrongLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// The input contained a character other than `1`-`9`, `.`, or `0`.
    #[display("invalid character {character:?} at offset {offset}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based offset of the character in the input.
        offset: usize,
    },
}

impl FromStr for ValueGrid {
    type Err = ParseValueGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseValueGridError::WrongLength { len });
        }
        let mut grid = Self::new();
        for (offset, (pos, character)) in Position::ALL.iter().zip(s.chars()).enumerate() {
            let value = match character {
                '.' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = character.to_digit(10).unwrap_or_default() as u8;
                    Digit::try_from(value).ok()
                }
                _ => return Err(ParseValueGridError::InvalidCharacter { character, offset }),
            };
            grid.set(*pos, value);
        }
        Ok(grid)
    }
}

impl Display for ValueGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in Position::ALL {
            match self.get(pos) {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_prints_dots() {
        let grid = ValueGrid::new();
        assert_eq!(grid.to_string(), ".".repeat(81));
        assert!(!grid.is_full());
    }

    #[test]
    fn parse_display_round_trip() {
        let input =
            "185362947793148526246795183564239871931874265827516394318427659672951438459683712";
        let grid: ValueGrid = input.parse().unwrap();
        assert_eq!(grid.to_string(), input);
        assert!(grid.is_full());
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D1));
        assert_eq!(grid.get(Position::new(8, 8)), Some(Digit::D2));
    }

    #[test]
    fn zero_parses_as_empty() {
        let grid: ValueGrid = "0".repeat(81).parse().unwrap();
        assert_eq!(grid, ValueGrid::new());
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            "123".parse::<ValueGrid>(),
            Err(ParseValueGridError::WrongLength { len: 3 })
        );
    }

    #[test]
    fn rejects_invalid_character() {
        let input = format!("x{}", ".".repeat(80));
        assert_eq!(
            input.parse::<ValueGrid>(),
            Err(ParseValueGridError::InvalidCharacter {
                character: 'x',
                offset: 0
            })
        );
    }

    #[test]
    fn set_and_get() {
        let mut grid = ValueGrid::new();
        let pos = Position::new(4, 4);
        grid.set(pos, Some(Digit::D7));
        assert_eq!(grid.get(pos), Some(Digit::D7));
        grid.set(pos, None);
        assert_eq!(grid.get(pos), None);
    }
}
