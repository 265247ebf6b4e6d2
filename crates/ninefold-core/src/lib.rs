//! Core value types for the ninefold Sudoku engine.
//!
//! This crate holds the small, copyable building blocks shared by the engine
//! and its consumers:
//!
//! - [`digit`]: type-safe digits 1-9
//! - [`digit_set`]: compact sets of digits, used for pencil marks
//! - [`position`]: board coordinates and the fixed 3×3 box geometry
//! - [`value_grid`]: the canonical 9×9 grid of optional digits
//!
//! Nothing here is stateful or fallible beyond construction-time range
//! checks; all mutation and history concerns live in `ninefold-engine`.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Digit, DigitSet, Position};
//!
//! let pos = Position::new(4, 7);
//! assert_eq!(pos.box_index(), 5);
//!
//! let mut marks = DigitSet::EMPTY;
//! marks.insert(Digit::D3);
//! marks.insert(Digit::D7);
//! assert_eq!(marks.len(), 2);
//! ```

pub mod digit;
pub mod digit_set;
pub mod position;
pub mod value_grid;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    position::Position,
    value_grid::{ParseValueGridError, ValueGrid},
};
