//! A compact set of Sudoku digits.
//!
//! [`DigitSet`] backs per-cell pencil marks and duplicate detection. It is a
//! 9-bit set stored in a `u16`, where bit `n` represents digit `n + 1`.

use std::{fmt, iter::FusedIterator};

use crate::Digit;

/// A set of [`Digit`]s backed by a 9-bit mask.
///
/// Cheap to copy and compare; iteration yields digits in ascending order.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::EMPTY;
/// set.insert(Digit::D2);
/// set.insert(Digit::D8);
/// assert!(set.contains(Digit::D2));
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![Digit::D2, Digit::D8]);
///
/// set.toggle(Digit::D2);
/// assert!(!set.contains(Digit::D2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

const FULL_BITS: u16 = 0b1_1111_1111;

impl DigitSet {
    /// The set containing no digits.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: FULL_BITS };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & (1 << digit.index()) != 0
    }

    /// Adds `digit` to the set. Adding a digit already present is a no-op.
    pub const fn insert(&mut self, digit: Digit) {
        self.bits |= 1 << digit.index();
    }

    /// Removes `digit` from the set. Removing an absent digit is a no-op.
    pub const fn remove(&mut self, digit: Digit) {
        self.bits &= !(1 << digit.index());
    }

    /// Removes `digit` if present, inserts it otherwise.
    pub const fn toggle(&mut self, digit: Digit) {
        self.bits ^= 1 << digit.index();
    }

    /// Removes all digits from the set.
    pub const fn clear(&mut self) {
        self.bits = 0;
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, digit) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{digit}")?;
        }
        write!(f, "}}")
    }
}

/// Iterator over the digits of a [`DigitSet`], ascending.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Digit::ALL[usize::from(index)])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}
