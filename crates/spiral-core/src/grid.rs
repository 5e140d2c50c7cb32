use crate::Cell;
use crate::error::{GridError, Result};
use crate::scheduler::Tick;

/// Read access the decoder needs from a grid.
///
/// `target_count` is the number of cells a traversal should visit before it
/// stops; it defaults to the full capacity.
pub trait SpiralGrid {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn cell(&self, row: usize, col: usize) -> Option<Cell>;

    fn target_count(&self) -> usize {
        self.rows() * self.cols()
    }
}

/// A fixed-shape grid plus the progress of the traversal that populated it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
    progress: usize,
    target_count: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize, fill: Cell) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![vec![fill; cols]; rows],
            progress: 0,
            target_count: rows * cols,
        })
    }

    pub fn empty(rows: usize, cols: usize) -> Result<Self> {
        Self::new(rows, cols, Cell::Empty)
    }

    /// Build a grid from literal rows. Every row must have the same, non-zero width.
    pub fn from_rows(cells: Vec<Vec<Cell>>) -> Result<Self> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        if let Some(ragged) = cells.iter().find(|row| row.len() != cols) {
            return Err(GridError::InvalidDimensions {
                rows,
                cols: ragged.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            cells,
            progress: 0,
            target_count: rows * cols,
        })
    }

    /// One string per row; characters equal to `placeholder` become [`Cell::Empty`].
    pub fn from_strs<S: AsRef<str>>(rows: &[S], placeholder: Option<char>) -> Result<Self> {
        Self::from_rows(
            rows.iter()
                .map(|row| {
                    row.as_ref()
                        .chars()
                        .map(|c| Cell::parse(c, placeholder))
                        .collect()
                })
                .collect(),
        )
    }

    /// Stop traversals after `target_count` cells instead of the full capacity.
    pub fn with_target_count(mut self, target_count: usize) -> Result<Self> {
        if target_count > self.capacity() {
            return Err(GridError::CapacityExceeded {
                len: target_count,
                capacity: self.capacity(),
            });
        }
        if target_count < self.progress {
            return Err(GridError::CapacityExceeded {
                len: self.progress,
                capacity: target_count,
            });
        }
        self.target_count = target_count;
        Ok(self)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    pub fn progress(&self) -> usize {
        self.progress
    }

    pub fn target_count(&self) -> usize {
        self.target_count
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> Result<()> {
        self.check_bounds(row, col)?;
        self.cells[row][col] = value;
        Ok(())
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    /// The structural center of an odd square grid.
    pub fn center(&self) -> Option<(usize, usize)> {
        (self.rows == self.cols && self.rows % 2 == 1)
            .then(|| ((self.rows - 1) / 2, (self.cols - 1) / 2))
    }

    /// Each row drawn as a string, empty cells shown as `placeholder`.
    pub fn render_rows(&self, placeholder: char) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.display(placeholder)).collect())
            .collect()
    }

    /// Record the emission that `tick` stands for.
    pub(crate) fn record(&mut self, tick: Tick) {
        debug_assert_eq!(tick.index(), self.progress, "ticks must be gap-free");
        debug_assert!(self.progress < self.target_count);
        self.progress = tick.index() + 1;
    }

    pub(crate) fn reset_target(&mut self, target_count: usize) {
        debug_assert!(target_count <= self.capacity());
        self.progress = 0;
        self.target_count = target_count;
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl SpiralGrid for Grid {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    fn target_count(&self) -> usize {
        self.target_count
    }
}
