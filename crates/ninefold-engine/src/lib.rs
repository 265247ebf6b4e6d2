//! The ninefold Sudoku puzzle engine.
//!
//! This crate models a 9×9 Sudoku board as a mutable, in-memory session:
//! placement legality is enforced across rows, columns, and 3×3 boxes,
//! empty cells carry candidate pencil marks, and every successful mutation
//! is snapshotted into a linear undo/redo history.
//!
//! The entry point is [`Puzzle`]. It is consumed by a UI layer issuing one
//! command at a time; the engine performs no I/O and knows nothing about
//! rendering or input. Invalid addressing (out-of-range coordinates) and
//! redundant mutations are deliberately silent no-ops, while rule-violating
//! placements surface a structured [`PlacementError`] naming the offending
//! region kinds.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::Digit;
//! use ninefold_engine::Puzzle;
//!
//! let mut puzzle = Puzzle::empty();
//! puzzle.place_number(0, 0, Digit::D5).unwrap();
//!
//! // 5 is now illegal elsewhere in row 0, column 0, and box 0.
//! let err = puzzle.place_number(1, 1, Digit::D5).unwrap_err();
//! assert!(err.already_in_box);
//! assert!(!err.already_in_row);
//!
//! puzzle.undo();
//! assert_eq!(puzzle.values().to_string(), ".".repeat(81));
//! ```
//!
//! # Memory
//!
//! History snapshots are full deep copies of the board and accumulate for
//! the lifetime of the session; only [`Puzzle::reset`] releases them. This
//! is an accepted characteristic of the design, not an eviction-less cache.

pub mod cell;
pub mod error;
pub mod history;
pub mod puzzle;
pub mod region;

pub use self::{
    cell::{Cell, CellGrid},
    error::{PlacementError, RegionError},
    history::History,
    puzzle::Puzzle,
    region::Region,
};
