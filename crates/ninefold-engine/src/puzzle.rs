//! The puzzle orchestrator.

use std::fmt::{self, Display};

use log::{debug, trace};
use ninefold_core::{Digit, Position, ValueGrid};

use crate::{
    CellGrid, History, Region,
    cell::Cell,
    error::{PlacementError, RegionError},
};

/// A Sudoku puzzle session: the cell grid, its 27 region views, and the
/// undo/redo history.
///
/// All mutating operations take raw `usize` coordinates and silently ignore
/// out-of-range targets; the only error a caller can observe during play is
/// [`PlacementError`] from a rule-violating [`Puzzle::place_number`]. Every
/// successful mutation records a deep-copy snapshot into history.
///
/// # Examples
///
/// ```
/// use ninefold_core::Digit;
/// use ninefold_engine::Puzzle;
///
/// let mut puzzle = Puzzle::empty();
/// puzzle.place_number(0, 0, Digit::D5).unwrap();
/// assert_eq!(puzzle.history_len(), 2);
///
/// puzzle.undo();
/// assert!(puzzle.cell(0, 0).unwrap().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: CellGrid,
    rows: [Region; 9],
    columns: [Region; 9],
    boxes: [Region; 9],
    history: History,
}

impl Puzzle {
    /// Creates a puzzle, optionally pre-filled with starting values.
    ///
    /// When `lock_starting_values` is set, pre-filled cells become
    /// protected givens that no later operation can change.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::DuplicateValues`] if the starting values
    /// repeat a digit within a row, column, or box. With well-formed input
    /// this construction cannot fail.
    pub fn new(
        starting: Option<&ValueGrid>,
        lock_starting_values: bool,
    ) -> Result<Self, RegionError> {
        let grid = CellGrid::from_values(starting, lock_starting_values);
        let rows = Self::build_regions(&grid, &Position::ROW_POSITIONS)?;
        let columns = Self::build_regions(&grid, &Position::COLUMN_POSITIONS)?;
        let boxes = Self::build_regions(&grid, &Position::BOX_POSITIONS)?;
        let history = History::new(&grid);
        Ok(Self {
            grid,
            rows,
            columns,
            boxes,
            history,
        })
    }

    /// Creates an all-empty, unlocked puzzle.
    #[must_use]
    #[expect(clippy::missing_panics_doc)]
    pub fn empty() -> Self {
        Self::new(None, false).expect("an empty grid has no region conflicts")
    }

    fn build_regions(
        grid: &CellGrid,
        families: &[[Position; 9]; 9],
    ) -> Result<[Region; 9], RegionError> {
        let mut regions = [Region::new(grid, &families[0])?; 9];
        for (region, positions) in regions.iter_mut().zip(families) {
            *region = Region::new(grid, positions)?;
        }
        Ok(regions)
    }

    /// Returns the cell at `(row, column)`, or `None` when out of range.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        let pos = Position::try_new(row, column)?;
        Some(&self.grid[pos])
    }

    /// Returns the row regions, top to bottom.
    #[must_use]
    pub const fn rows(&self) -> &[Region; 9] {
        &self.rows
    }

    /// Returns the column regions, left to right.
    #[must_use]
    pub const fn columns(&self) -> &[Region; 9] {
        &self.columns
    }

    /// Returns the box regions, left to right, top to bottom.
    #[must_use]
    pub const fn boxes(&self) -> &[Region; 9] {
        &self.boxes
    }

    /// Number of snapshots currently held in history.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Returns `true` if an undo would move the board to an earlier state.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns `true` if a redo would move the board to a later state.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Places `digit` at `(row, column)` after validating legality.
    ///
    /// Silent no-ops: target out of range, target locked, or target already
    /// holding `digit` (no history entry in any of those cases). Otherwise
    /// the placement is checked against the target's row, column, and box;
    /// on success the value is set, the target's pencil marks are cleared,
    /// `digit` is stripped from the pencil marks of every cell sharing a
    /// region with the target, and a snapshot is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError`] when `digit` already appears in the
    /// target's row, column, or box. All three flags are computed
    /// independently, and the board is left untouched.
    pub fn place_number(
        &mut self,
        row: usize,
        column: usize,
        digit: Digit,
    ) -> Result<(), PlacementError> {
        let Some(pos) = Position::try_new(row, column) else {
            trace!("place {digit} at ({row}, {column}): out of range, ignored");
            return Ok(());
        };
        let target = &self.grid[pos];
        if target.value() == Some(digit) || target.is_locked() {
            trace!("place {digit} at {pos}: unchanged, ignored");
            return Ok(());
        }

        let conflict = self.check_placement(pos, digit);
        if conflict.any() {
            debug!("place {digit} at {pos}: rejected ({conflict})");
            return Err(conflict);
        }

        self.grid[pos].set_value(Some(digit));
        self.remove_pencil_marks_seen_from(pos, digit);
        self.history.record(&self.grid);
        debug!("place {digit} at {pos}: ok, history len {}", self.history.len());
        Ok(())
    }

    /// Checks `digit` against every region of each family, accumulating one
    /// conflict flag per family.
    ///
    /// Regions are resolved by membership search rather than coordinate
    /// arithmetic, and the target's own value is excluded since it is about
    /// to be overwritten.
    fn check_placement(&self, pos: Position, digit: Digit) -> PlacementError {
        let mut conflict = PlacementError::default();
        for region in &self.rows {
            if region.contains(pos) && !region.can_place_excluding(&self.grid, digit, pos) {
                conflict.already_in_row = true;
            }
        }
        for region in &self.columns {
            if region.contains(pos) && !region.can_place_excluding(&self.grid, digit, pos) {
                conflict.already_in_column = true;
            }
        }
        for region in &self.boxes {
            if region.contains(pos) && !region.can_place_excluding(&self.grid, digit, pos) {
                conflict.already_in_box = true;
            }
        }
        conflict
    }

    /// Removes `digit` from the pencil marks of every cell sharing a row,
    /// column, or box with `pos` — it is no longer a legal candidate there.
    fn remove_pencil_marks_seen_from(&mut self, pos: Position, digit: Digit) {
        let families = [&self.rows, &self.columns, &self.boxes];
        for family in families {
            let Some(region) = family.iter().find(|region| region.contains(pos)) else {
                continue;
            };
            for member in region.positions() {
                self.grid[*member].remove_pencil_mark(digit);
            }
        }
    }

    /// Clears the value at `(row, column)` and records a snapshot.
    ///
    /// No-op when the target is out of range or locked. Clearing an
    /// already-empty cell still records a snapshot. Pencil marks removed
    /// from sibling cells by the earlier placement are not restored; that
    /// information is gone.
    pub fn clear_number(&mut self, row: usize, column: usize) {
        let Some(pos) = Position::try_new(row, column) else {
            return;
        };
        if self.grid[pos].is_locked() {
            trace!("clear {pos}: locked, ignored");
            return;
        }
        self.grid[pos].set_value(None);
        self.history.record(&self.grid);
        debug!("clear {pos}: ok, history len {}", self.history.len());
    }

    /// Adds pencil mark `digit` at `(row, column)`.
    ///
    /// No-op when out of range; otherwise delegates to the cell (which
    /// ignores the call when locked or filled) and records a snapshot
    /// whether or not the cell changed.
    pub fn add_pencil_mark(&mut self, row: usize, column: usize, digit: Digit) {
        self.with_cell_recorded(row, column, |cell| cell.add_pencil_mark(digit));
    }

    /// Removes pencil mark `digit` at `(row, column)`.
    ///
    /// Same no-op and unconditional-snapshot behavior as
    /// [`Puzzle::add_pencil_mark`].
    pub fn remove_pencil_mark(&mut self, row: usize, column: usize, digit: Digit) {
        self.with_cell_recorded(row, column, |cell| cell.remove_pencil_mark(digit));
    }

    /// Toggles pencil mark `digit` at `(row, column)`.
    ///
    /// Same no-op and unconditional-snapshot behavior as
    /// [`Puzzle::add_pencil_mark`]: even a toggle that the cell ignores
    /// (locked or filled target) records a snapshot.
    pub fn toggle_pencil_mark(&mut self, row: usize, column: usize, digit: Digit) {
        self.with_cell_recorded(row, column, |cell| cell.toggle_pencil_mark(digit));
    }

    /// Runs a cell-level pencil-mark operation, then records a snapshot
    /// unconditionally. History length counts attempts, not effects.
    fn with_cell_recorded(&mut self, row: usize, column: usize, op: impl FnOnce(&mut Cell)) {
        let Some(pos) = Position::try_new(row, column) else {
            return;
        };
        op(&mut self.grid[pos]);
        self.history.record(&self.grid);
    }

    /// Moves one step back in history and restores that snapshot.
    ///
    /// At the oldest state this is a no-op (the initial snapshot stays
    /// active). The live grid is replaced wholesale by a fresh deep clone.
    pub fn undo(&mut self) {
        self.grid = self.history.previous();
        trace!("undo: cursor {}", self.history.cursor());
    }

    /// Moves one step forward in history and restores that snapshot.
    ///
    /// At the newest state this is a no-op.
    pub fn redo(&mut self) {
        self.grid = self.history.next();
        trace!("redo: cursor {}", self.history.cursor());
    }

    /// Discards all history except the starting snapshot and restores it.
    ///
    /// This is irrevocable: reset is not itself undoable.
    pub fn reset(&mut self) {
        self.history.reset();
        self.grid = self.history.current();
        debug!("reset: history len {}", self.history.len());
    }

    /// Returns `true` if every cell holds a value.
    ///
    /// This does not check rule correctness; a full board with conflicts
    /// (reachable through unlocked starting values and `clear`/`place`
    /// sequences on other cells) still counts as solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grid.is_full()
    }

    /// Returns the value-only view of the board — the canonical external
    /// representation. Pencil marks and lock flags are omitted.
    #[must_use]
    pub fn values(&self) -> ValueGrid {
        self.grid.values()
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::empty()
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.values(), f)
    }
}
