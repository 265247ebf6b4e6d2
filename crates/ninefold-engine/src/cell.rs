//! Cells and the owning cell arena.
//!
//! [`CellGrid`] is the single owner of all 81 [`Cell`]s; every other
//! structure in the engine addresses cells by [`Position`] rather than
//! holding references. This keeps region views and history snapshots free
//! of aliasing: cloning the grid clones every cell, and a mutation through
//! the grid is visible to every region that lists the position.

use std::ops::{Index, IndexMut};

use ninefold_core::{Digit, DigitSet, Position, ValueGrid};

/// A single board cell: an optional value plus candidate pencil marks.
///
/// Mutations are defensive no-ops when their preconditions do not hold
/// (locked cell, filled cell); cells never report errors. Rule checking is
/// the puzzle's job, not the cell's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    value: Option<Digit>,
    pencil_marks: DigitSet,
    locked: bool,
}

impl Cell {
    /// Creates a cell at `position`.
    ///
    /// `locked` is only honored when the cell starts with a value: an empty
    /// cell cannot be a given.
    #[must_use]
    pub fn new(position: Position, value: Option<Digit>, locked: bool) -> Self {
        Self {
            position,
            value,
            pencil_marks: DigitSet::EMPTY,
            locked: locked && value.is_some(),
        }
    }

    /// Returns this cell's board position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the cell's value, or `None` when empty.
    #[must_use]
    pub const fn value(&self) -> Option<Digit> {
        self.value
    }

    /// Returns the cell's pencil marks. Always empty while the cell holds a
    /// value.
    #[must_use]
    pub const fn pencil_marks(&self) -> DigitSet {
        self.pencil_marks
    }

    /// Returns `true` if this cell is a protected starting given.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns `true` if the cell holds no value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Sets or clears the value. No-op when locked.
    ///
    /// Giving the cell a value clears its pencil marks.
    pub fn set_value(&mut self, value: Option<Digit>) {
        if self.locked {
            return;
        }
        self.value = value;
        if value.is_some() {
            self.pencil_marks.clear();
        }
    }

    /// Adds a pencil mark. No-op when the cell is locked or filled.
    pub fn add_pencil_mark(&mut self, digit: Digit) {
        if self.locked || self.value.is_some() {
            return;
        }
        self.pencil_marks.insert(digit);
    }

    /// Removes a pencil mark. No-op when the cell is locked or filled
    /// (a filled cell's mark set is empty by invariant).
    pub fn remove_pencil_mark(&mut self, digit: Digit) {
        if self.locked || self.value.is_some() {
            return;
        }
        self.pencil_marks.remove(digit);
    }

    /// Removes the mark if present, adds it otherwise. No-op when the cell
    /// is locked or filled.
    pub fn toggle_pencil_mark(&mut self, digit: Digit) {
        if self.locked || self.value.is_some() {
            return;
        }
        self.pencil_marks.toggle(digit);
    }
}

/// The owning arena of all 81 cells, addressed by [`Position`].
///
/// `Clone` produces a fully independent deep copy, which is exactly what
/// history snapshots require.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    cells: [Cell; 81],
}

impl CellGrid {
    /// Builds a grid from optional starting values.
    ///
    /// When `lock_starting_values` is set, every pre-filled cell becomes a
    /// locked given.
    #[must_use]
    pub fn from_values(starting: Option<&ValueGrid>, lock_starting_values: bool) -> Self {
        let cells = Position::ALL.map(|pos| {
            let value = starting.and_then(|grid| grid.get(pos));
            Cell::new(pos, value, lock_starting_values)
        });
        Self { cells }
    }

    /// Builds an all-empty grid.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_values(None, false)
    }

    /// Extracts the value-only view of the grid.
    #[must_use]
    pub fn values(&self) -> ValueGrid {
        let mut values = ValueGrid::new();
        for cell in &self.cells {
            values.set(cell.position(), cell.value());
        }
        values
    }

    /// Returns `true` if every cell holds a value.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Iterates over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

impl Index<Position> for CellGrid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.cell_index()]
    }
}

impl IndexMut<Position> for CellGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.cell_index()]
    }
}
