//! Sudoku digit representation.

use std::fmt::{self, Display};

/// Error returned when converting an out-of-range value into a [`Digit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("digit out of range 1-9: {_0}")]
pub struct DigitOutOfRange(#[error(not(source))] pub u8);

/// A Sudoku digit in the range 1-9.
///
/// The enum representation makes out-of-range digits unrepresentable, so
/// range checks happen once at the boundary and never again inside the
/// engine.
///
/// # Examples
///
/// ```
/// use ninefold_core::Digit;
///
/// let digit = Digit::try_from(5).unwrap();
/// assert_eq!(digit, Digit::D5);
/// assert_eq!(digit.value(), 5);
/// assert!(Digit::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All nine digits in ascending order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the zero-based index of this digit (0-8), used for bitset and
    /// array addressing.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8 - 1
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::D1),
            2 => Ok(Self::D2),
            3 => Ok(Self::D3),
            4 => Ok(Self::D4),
            5 => Ok(Self::D5),
            6 => Ok(Self::D6),
            7 => Ok(Self::D7),
            8 => Ok(Self::D8),
            9 => Ok(Self::D9),
            _ => Err(DigitOutOfRange(value)),
        }
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_rejects_out_of_range() {
        assert_eq!(Digit::try_from(0), Err(DigitOutOfRange(0)));
        assert_eq!(Digit::try_from(10), Err(DigitOutOfRange(10)));
        assert_eq!(Digit::try_from(1), Ok(Digit::D1));
        assert_eq!(Digit::try_from(9), Ok(Digit::D9));
    }

    #[test]
    fn value_round_trip() {
        for digit in Digit::ALL {
            assert_eq!(Digit::try_from(digit.value()), Ok(digit));
        }
        assert_eq!(Digit::ALL.len(), 9);
        assert_eq!(Digit::D1.index(), 0);
        assert_eq!(Digit::D9.index(), 8);
    }

    #[test]
    fn display_matches_value() {
        assert_eq!(Digit::D4.to_string(), "4");
        assert_eq!(
            DigitOutOfRange(12).to_string(),
            "digit out of range 1-9: 12"
        );
    }
}
