//! Region views over the cell arena.
//!
//! A region is one of the 27 fixed groups of 9 cells (a row, a column, or a
//! 3×3 box) within which non-empty values must be unique. Regions never own
//! cells; they hold positions into the [`CellGrid`] arena, so a cell
//! mutation through the grid is immediately visible to every region listing
//! that position, and restoring a history snapshot cannot leave a region
//! pointing at stale cells.

use ninefold_core::{Digit, DigitSet, Position};

use crate::{CellGrid, error::RegionError};

/// An invariant-checked group of 9 cell positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    positions: [Position; 9],
}

impl Region {
    /// Creates a region over `positions`, validating against the current
    /// contents of `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::WrongCellCount`] if `positions` does not name
    /// exactly 9 cells, and [`RegionError::DuplicateValues`] if two member
    /// cells already hold the same value.
    pub fn new(grid: &CellGrid, positions: &[Position]) -> Result<Self, RegionError> {
        let positions: [Position; 9] = positions
            .try_into()
            .map_err(|_| RegionError::WrongCellCount {
                count: positions.len(),
            })?;

        let mut seen = DigitSet::EMPTY;
        for pos in positions {
            if let Some(value) = grid[pos].value() {
                if seen.contains(value) {
                    return Err(RegionError::DuplicateValues);
                }
                seen.insert(value);
            }
        }

        Ok(Self { positions })
    }

    /// Returns the member positions in region order.
    #[must_use]
    pub const fn positions(&self) -> &[Position; 9] {
        &self.positions
    }

    /// Returns `true` if `pos` is a member of this region.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Returns `true` if no member cell currently holds `digit`.
    ///
    /// Pure query; reads the live grid and mutates nothing.
    #[must_use]
    pub fn can_place(&self, grid: &CellGrid, digit: Digit) -> bool {
        self.positions
            .iter()
            .all(|pos| grid[*pos].value() != Some(digit))
    }

    /// Like [`Region::can_place`], but ignores the cell at `target` — used
    /// when that cell is about to be overwritten.
    #[must_use]
    pub fn can_place_excluding(&self, grid: &CellGrid, digit: Digit, target: Position) -> bool {
        self.positions
            .iter()
            .filter(|pos| **pos != target)
            .all(|pos| grid[*pos].value() != Some(digit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_exactly_nine_positions() {
        let grid = CellGrid::empty();
        let short = &Position::ROW_POSITIONS[0][..5];
        assert_eq!(
            Region::new(&grid, short),
            Err(RegionError::WrongCellCount { count: 5 })
        );

        let mut ten = Position::ROW_POSITIONS[0].to_vec();
        ten.push(Position::new(1, 0));
        assert_eq!(
            Region::new(&grid, &ten),
            Err(RegionError::WrongCellCount { count: 10 })
        );
    }

    #[test]
    fn rejects_duplicate_values() {
        let mut grid = CellGrid::empty();
        grid[Position::new(0, 0)].set_value(Some(Digit::D4));
        grid[Position::new(0, 7)].set_value(Some(Digit::D4));
        assert_eq!(
            Region::new(&grid, &Position::ROW_POSITIONS[0]),
            Err(RegionError::DuplicateValues)
        );
    }

    #[test]
    fn accepts_distinct_values() {
        let mut grid = CellGrid::empty();
        grid[Position::new(0, 0)].set_value(Some(Digit::D1));
        grid[Position::new(0, 1)].set_value(Some(Digit::D2));
        let region = Region::new(&grid, &Position::ROW_POSITIONS[0]).unwrap();
        assert!(region.contains(Position::new(0, 5)));
        assert!(!region.contains(Position::new(1, 0)));
    }

    #[test]
    fn can_place_reads_live_cells() {
        let mut grid = CellGrid::empty();
        let region = Region::new(&grid, &Position::COLUMN_POSITIONS[3]).unwrap();
        assert!(region.can_place(&grid, Digit::D6));

        // Region built before the mutation still sees it.
        grid[Position::new(5, 3)].set_value(Some(Digit::D6));
        assert!(!region.can_place(&grid, Digit::D6));
        assert!(region.can_place(&grid, Digit::D7));
    }

    #[test]
    fn can_place_excluding_skips_target() {
        let mut grid = CellGrid::empty();
        let target = Position::new(2, 0);
        grid[target].set_value(Some(Digit::D9));
        let region = Region::new(&grid, &Position::COLUMN_POSITIONS[0]).unwrap();

        assert!(!region.can_place(&grid, Digit::D9));
        assert!(region.can_place_excluding(&grid, Digit::D9, target));
    }
}
