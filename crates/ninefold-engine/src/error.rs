//! Engine error types.

/// Rule violation reported by [`Puzzle::place_number`](crate::Puzzle::place_number).
///
/// Each flag is computed independently; a single bad placement can conflict
/// in several region kinds at once, and no flag suppresses another. The
/// consuming UI uses the flags to highlight the offending regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display(
    "number already placed in region (row: {already_in_row}, column: {already_in_column}, box: {already_in_box})"
)]
pub struct PlacementError {
    /// The digit is already present elsewhere in the target's row.
    pub already_in_row: bool,
    /// The digit is already present elsewhere in the target's column.
    pub already_in_column: bool,
    /// The digit is already present elsewhere in the target's 3×3 box.
    pub already_in_box: bool,
}

impl PlacementError {
    /// Returns `true` if any region kind reported a conflict.
    #[must_use]
    pub const fn any(self) -> bool {
        self.already_in_row || self.already_in_column || self.already_in_box
    }
}

/// Invariant violation raised while constructing a [`Region`](crate::Region).
///
/// Regions are only built by the [`Puzzle`](crate::Puzzle) constructor, so
/// outside of a malformed starting grid these are programming errors rather
/// than runtime user errors.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum RegionError {
    /// A region must reference exactly 9 cells.
    #[display("regions must contain 9 cells, got {count}")]
    WrongCellCount {
        /// Number of cells supplied.
        count: usize,
    },
    /// Two or more cells in the region hold the same non-empty value.
    #[display("regions cannot contain multiple cells with the same value")]
    DuplicateValues,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_error_any() {
        assert!(!PlacementError::default().any());
        let err = PlacementError {
            already_in_column: true,
            ..PlacementError::default()
        };
        assert!(err.any());
    }

    #[test]
    fn display_messages() {
        let err = PlacementError {
            already_in_row: true,
            already_in_column: false,
            already_in_box: true,
        };
        assert_eq!(
            err.to_string(),
            "number already placed in region (row: true, column: false, box: true)"
        );
        assert_eq!(
            RegionError::WrongCellCount { count: 3 }.to_string(),
            "regions must contain 9 cells, got 3"
        );
        assert!(RegionError::DuplicateValues.is_duplicate_values());
    }
}
