//! Linear undo/redo history of board snapshots.
//!
//! The history is a sequence of deep-cloned [`CellGrid`]s with a cursor.
//! Recording while the cursor sits before the end discards the redo tail
//! (classic branch truncation); moving the cursor never mutates the stored
//! sequence. Snapshots returned to callers are always fresh clones, so
//! nothing outside this module can mutate stored history.
//!
//! History grows by one snapshot per recorded mutation and is only released
//! by [`History::reset`].

use crate::CellGrid;

/// Append-and-truncate snapshot sequence with a cursor.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<CellGrid>,
    cursor: usize,
}

impl History {
    /// Creates a history seeded with the starting grid.
    ///
    /// The cursor starts on that initial snapshot, so `len()` is 1 and
    /// [`History::current`] reproduces `starting`.
    #[must_use]
    pub fn new(starting: &CellGrid) -> Self {
        Self {
            snapshots: vec![starting.clone()],
            cursor: 0,
        }
    }

    /// Number of stored snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`: the initial snapshot is never discarded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Current cursor index.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns a fresh deep clone of the snapshot at the cursor.
    #[must_use]
    pub fn current(&self) -> CellGrid {
        self.snapshots[self.cursor].clone()
    }

    /// Records a new snapshot of `state`.
    ///
    /// Advances the cursor and drops every snapshot past it, so any redo
    /// entries from earlier undos are lost.
    pub fn record(&mut self, state: &CellGrid) {
        self.cursor += 1;
        self.snapshots.truncate(self.cursor);
        self.snapshots.push(state.clone());
    }

    /// Returns `true` if the cursor can move backwards.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Moves the cursor back one snapshot when possible, then returns the
    /// snapshot at the cursor. At the beginning the cursor stays put.
    pub fn previous(&mut self) -> CellGrid {
        if self.can_undo() {
            self.cursor -= 1;
        }
        self.current()
    }

    /// Returns `true` if the cursor can move forwards.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Moves the cursor forward one snapshot when possible, then returns
    /// the snapshot at the cursor. At the end the cursor stays put.
    pub fn next(&mut self) -> CellGrid {
        if self.can_redo() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Drops everything except the initial snapshot and rewinds the cursor.
    pub fn reset(&mut self) {
        self.snapshots.truncate(1);
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use ninefold_core::{Digit, Position};

    use super::*;

    fn grid_with(pos: Position, digit: Digit) -> CellGrid {
        let mut grid = CellGrid::empty();
        grid[pos].set_value(Some(digit));
        grid
    }

    #[test]
    fn starts_with_one_snapshot() {
        let history = History::new(&CellGrid::empty());
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_then_undo_redo_round_trip() {
        let start = CellGrid::empty();
        let edited = grid_with(Position::new(1, 1), Digit::D1);

        let mut history = History::new(&start);
        history.record(&edited);
        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), edited);

        assert_eq!(history.previous(), start);
        assert!(history.can_redo());
        assert_eq!(history.next(), edited);
        assert!(!history.can_redo());
    }

    #[test]
    fn previous_saturates_at_start() {
        let start = CellGrid::empty();
        let mut history = History::new(&start);
        history.record(&grid_with(Position::new(0, 0), Digit::D2));

        assert_eq!(history.previous(), start);
        assert_eq!(history.previous(), start);
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn next_saturates_at_end() {
        let edited = grid_with(Position::new(0, 0), Digit::D2);
        let mut history = History::new(&CellGrid::empty());
        history.record(&edited);

        assert_eq!(history.next(), edited);
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn record_after_undo_truncates_redo_tail() {
        let mut history = History::new(&CellGrid::empty());
        history.record(&grid_with(Position::new(0, 0), Digit::D1));
        history.record(&grid_with(Position::new(0, 1), Digit::D2));
        assert_eq!(history.len(), 3);

        history.previous();
        history.previous();
        let branch = grid_with(Position::new(8, 8), Digit::D9);
        history.record(&branch);

        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), branch);
        assert!(!history.can_redo());
    }

    #[test]
    fn reset_keeps_only_the_initial_snapshot() {
        let start = grid_with(Position::new(4, 4), Digit::D5);
        let mut history = History::new(&start);
        history.record(&grid_with(Position::new(0, 0), Digit::D1));
        history.record(&grid_with(Position::new(0, 1), Digit::D2));

        history.reset();
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.current(), start);
    }

    #[test]
    fn current_returns_independent_clones() {
        let mut history = History::new(&CellGrid::empty());
        let mut leaked = history.current();
        leaked[Position::new(0, 0)].set_value(Some(Digit::D7));

        // Mutating a returned snapshot must not touch the stored one.
        assert!(history.current()[Position::new(0, 0)].is_empty());
    }
}
