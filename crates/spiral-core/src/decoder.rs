use tracing::{debug, trace};

use crate::Cell;
use crate::error::{GridError, Result};
use crate::grid::SpiralGrid;
use crate::ring::RingState;
use crate::scheduler::{EmissionScheduler, Tick};

/// A cell value read by the decoder, with the tick it was read at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmittedElement {
    pub value: Cell,
    pub tick: Tick,
    pub row: usize,
    pub col: usize,
}

/// Walks a grid in spiral order, one element per scheduler tick.
#[derive(Debug)]
pub struct SpiralDecoder<'a, G: SpiralGrid + ?Sized> {
    grid: &'a G,
    ring: RingState,
    scheduler: EmissionScheduler,
    elements: Vec<EmittedElement>,
}

impl<'a, G: SpiralGrid + ?Sized> SpiralDecoder<'a, G> {
    pub fn new(grid: &'a G) -> Result<Self> {
        Self::with_target(grid, grid.target_count())
    }

    /// Decode only the first `target` cells of the spiral.
    pub fn with_target(grid: &'a G, target: usize) -> Result<Self> {
        let (rows, cols) = (grid.rows(), grid.cols());
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        if target > rows * cols {
            return Err(GridError::CapacityExceeded {
                len: target,
                capacity: rows * cols,
            });
        }
        Ok(Self {
            grid,
            ring: RingState::new(rows, cols),
            scheduler: EmissionScheduler::new(target),
            elements: Vec::with_capacity(target),
        })
    }

    pub fn run(mut self) -> Result<Vec<EmittedElement>> {
        'rings: while !self.scheduler.is_complete() && !self.ring.is_exhausted() {
            let ring = self.ring;
            debug!(
                offset = ring.offset(),
                rows = ring.remaining_rows(),
                cols = ring.remaining_cols(),
                progress = self.scheduler.progress(),
                "Decoding ring"
            );

            if ring.is_center() {
                let (row, col) = ring.origin();
                self.emit(row, col)?;
                break;
            }

            for edge in ring.edges() {
                for (row, col) in edge.cells() {
                    if !self.emit(row, col)? {
                        break 'rings;
                    }
                }
            }
            self.ring.shrink();
        }

        debug!(emitted = self.elements.len(), "Spiral decode finished");
        Ok(self.elements)
    }

    /// Read one cell. Returns `false` without reading once the target is met.
    fn emit(&mut self, row: usize, col: usize) -> Result<bool> {
        let Some(tick) = self.scheduler.next_tick() else {
            return Ok(false);
        };
        let value = self
            .grid
            .cell(row, col)
            .ok_or(GridError::OutOfBounds {
                row,
                col,
                rows: self.grid.rows(),
                cols: self.grid.cols(),
            })?;
        trace!(%tick, row, col, ?value, "emit");
        self.elements.push(EmittedElement {
            value,
            tick,
            row,
            col,
        });
        Ok(true)
    }
}

/// Read `grid` in spiral order, stopping after its target count.
#[tracing::instrument(skip(grid), fields(rows = grid.rows(), cols = grid.cols(), target = grid.target_count()))]
pub fn decode<G: SpiralGrid + ?Sized>(grid: &G) -> Result<Vec<EmittedElement>> {
    SpiralDecoder::new(grid)?.run()
}

/// The decoded sequence as a string. Unwritten cells contribute nothing.
pub fn decode_string<G: SpiralGrid + ?Sized>(grid: &G) -> Result<String> {
    Ok(decode(grid)?
        .iter()
        .filter_map(|e| e.value.as_char())
        .collect())
}
