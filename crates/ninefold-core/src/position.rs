//! Board coordinates and the fixed 3×3 box geometry.
//!
//! All coordinates are zero-based, row-major. The row, column, and box
//! membership tables are built once as `const` data, so region construction
//! and peer scans never recompute geometry.

use std::fmt::{self, Display};

/// A cell coordinate on the 9×9 board.
///
/// Both components are guaranteed to be in `[0, 9)`; the permissive
/// [`Position::try_new`] is the conversion point for untrusted indices.
///
/// # Examples
///
/// ```
/// use ninefold_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.column(), 7);
/// assert_eq!(pos.box_index(), 5);
///
/// assert!(Position::try_new(234, 10).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, column: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                column: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// `ROW_POSITIONS[r]` lists the 9 positions of row `r`, left to right.
    pub const ROW_POSITIONS: [[Self; 9]; 9] = {
        let mut rows = [[Self { row: 0, column: 0 }; 9]; 9];
        let mut r = 0;
        #[expect(clippy::cast_possible_truncation)]
        while r < 9 {
            let mut c = 0;
            while c < 9 {
                rows[r][c] = Self {
                    row: r as u8,
                    column: c as u8,
                };
                c += 1;
            }
            r += 1;
        }
        rows
    };

    /// `COLUMN_POSITIONS[c]` lists the 9 positions of column `c`, top to
    /// bottom.
    pub const COLUMN_POSITIONS: [[Self; 9]; 9] = {
        let mut columns = [[Self { row: 0, column: 0 }; 9]; 9];
        let mut c = 0;
        #[expect(clippy::cast_possible_truncation)]
        while c < 9 {
            let mut r = 0;
            while r < 9 {
                columns[c][r] = Self {
                    row: r as u8,
                    column: c as u8,
                };
                r += 1;
            }
            c += 1;
        }
        columns
    };

    /// `BOX_POSITIONS[b]` lists the 9 positions of box `b` in row-major
    /// order. Boxes are numbered left to right, top to bottom.
    pub const BOX_POSITIONS: [[Self; 9]; 9] = {
        let mut boxes = [[Self { row: 0, column: 0 }; 9]; 9];
        let mut b = 0;
        #[expect(clippy::cast_possible_truncation)]
        while b < 9 {
            let mut i = 0;
            while i < 9 {
                boxes[b][i] = Self {
                    row: ((b / 3) * 3 + i / 3) as u8,
                    column: ((b % 3) * 3 + i % 3) as u8,
                };
                i += 1;
            }
            b += 1;
        }
        boxes
    };

    /// Creates a position from trusted coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, column: u8) -> Self {
        assert!(row < 9 && column < 9);
        Self { row, column }
    }

    /// Creates a position from untrusted coordinates, returning `None` when
    /// either is out of range.
    #[must_use]
    pub fn try_new(row: usize, column: usize) -> Option<Self> {
        let row = u8::try_from(row).ok().filter(|r| *r < 9)?;
        let column = u8::try_from(column).ok().filter(|c| *c < 9)?;
        Some(Self { row, column })
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Returns the index of the 3×3 box containing this position (0-8).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.column / 3
    }

    /// Returns the row-major cell index (0-80), used for arena addressing.
    #[must_use]
    pub fn cell_index(self) -> usize {
        usize::from(self.row) * 9 + usize::from(self.column)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn all_covers_the_board_in_row_major_order() {
        assert_eq!(Position::ALL.len(), 81);
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[10], Position::new(1, 1));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.cell_index(), i);
        }
    }

    #[test]
    fn box_index_follows_block_layout() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(1, 1).box_index(), 0);
        assert_eq!(Position::new(0, 8).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 0).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn lookup_tables_agree_with_coordinates() {
        for r in 0..9 {
            for pos in Position::ROW_POSITIONS[r] {
                assert_eq!(usize::from(pos.row()), r);
            }
        }
        for c in 0..9 {
            for pos in Position::COLUMN_POSITIONS[c] {
                assert_eq!(usize::from(pos.column()), c);
            }
        }
        for b in 0..9 {
            for pos in Position::BOX_POSITIONS[b] {
                assert_eq!(usize::from(pos.box_index()), b);
            }
        }
    }

    #[test]
    fn first_box_contains_top_left_block() {
        let expected: Vec<Position> = (0..3)
            .flat_map(|r| (0..3).map(move |c| Position::new(r, c)))
            .collect();
        assert_eq!(Position::BOX_POSITIONS[0].to_vec(), expected);
    }

    proptest! {
        #[test]
        fn try_new_agrees_with_range_check(row in 0usize..300, column in 0usize..300) {
            let pos = Position::try_new(row, column);
            prop_assert_eq!(pos.is_some(), row < 9 && column < 9);
            if let Some(pos) = pos {
                prop_assert_eq!(usize::from(pos.row()), row);
                prop_assert_eq!(usize::from(pos.column()), column);
            }
        }
    }
}
