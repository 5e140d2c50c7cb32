//! Grids shared by unit tests.

use crate::Grid;

/// Rows as strings, `-` marking unwritten cells.
pub fn grid_of(rows: &[&str]) -> Grid {
    Grid::from_strs(rows, Some('-')).expect("fixture rows must be rectangular")
}

/// The 4x3 sample whose spiral reads `HAVEANICEDAY`.
pub fn have_a_nice_day() -> Grid {
    grid_of(&["HAV", "DAE", "EYA", "CIN"])
}
