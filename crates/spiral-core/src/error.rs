//! Grid errors with structured context.
//!
//! Every variant carries the numbers that made the call invalid, a semantic
//! code and category, and a suggestion for fixing the input.

use serde_json::{Value, json};
use spiral_common::error_codes::{self, ErrorCategory};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid dimensions: {rows} rows x {cols} cols")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Sequence of length {len} exceeds grid capacity {capacity}")]
    CapacityExceeded { len: usize, capacity: usize },

    #[error("Cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;

impl GridError {
    pub fn code(&self) -> i32 {
        match self {
            GridError::InvalidDimensions { .. } => error_codes::INVALID_DIMENSIONS,
            GridError::CapacityExceeded { .. } => error_codes::CAPACITY_EXCEEDED,
            GridError::OutOfBounds { .. } => error_codes::OUT_OF_BOUNDS,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        error_codes::category_for_code(self.code())
    }

    pub fn context(&self) -> Value {
        match self {
            GridError::InvalidDimensions { rows, cols } => json!({
                "rows": rows,
                "cols": cols
            }),
            GridError::CapacityExceeded { len, capacity } => json!({
                "len": len,
                "capacity": capacity
            }),
            GridError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => json!({
                "row": row,
                "col": col,
                "rows": rows,
                "cols": cols
            }),
        }
    }

    pub fn suggestion(&self) -> String {
        match self {
            GridError::InvalidDimensions { rows, cols } if *rows == 0 || *cols == 0 => {
                "Rows and columns must both be at least 1.".to_string()
            }
            GridError::InvalidDimensions { .. } => {
                "Every row must have the same number of columns.".to_string()
            }
            GridError::CapacityExceeded { len, .. } => format!(
                "Use a grid with at least {} cells, or shorten the input.",
                len
            ),
            GridError::OutOfBounds { rows, cols, .. } => format!(
                "Use a row below {} and a column below {}.",
                rows, cols
            ),
        }
    }

    /// Fixing the input is the only remedy; retrying the same call fails again.
    pub fn is_retryable(&self) -> bool {
        error_codes::is_retryable(self.code())
    }
}
