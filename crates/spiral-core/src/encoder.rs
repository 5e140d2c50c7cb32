//! Inverse of the spiral decoder.
//!
//! The input is cut ring by ring into one segment per edge, with each
//! segment as long as the edge the decoder would walk. Bottom and left
//! segments are reversed before they are written, since the decoder reads
//! those edges against index order. A short final segment fills the cells
//! the decoder reaches first and leaves the rest of its edge empty.

use tracing::debug;

use crate::Cell;
use crate::error::{GridError, Result};
use crate::grid::Grid;
use crate::ring::{Edge, RingState};
use crate::scheduler::{EmissionScheduler, Tick};

/// One character written by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub value: char,
    pub tick: Tick,
}

/// A populated grid plus the order its cells were written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    pub grid: Grid,
    pub placements: Vec<Placement>,
}

#[derive(Debug)]
pub struct SpiralEncoder<'t> {
    text: &'t [char],
    consumed: usize,
    grid: Grid,
    ring: RingState,
    scheduler: EmissionScheduler,
    placements: Vec<Placement>,
}

impl<'t> SpiralEncoder<'t> {
    pub fn new(text: &'t [char], rows: usize, cols: usize) -> Result<Self> {
        let mut grid = Grid::empty(rows, cols)?;
        if text.len() > grid.capacity() {
            return Err(GridError::CapacityExceeded {
                len: text.len(),
                capacity: grid.capacity(),
            });
        }
        grid.reset_target(text.len());
        Ok(Self {
            text,
            consumed: 0,
            grid,
            ring: RingState::new(rows, cols),
            scheduler: EmissionScheduler::new(text.len()),
            placements: Vec::with_capacity(text.len()),
        })
    }

    pub fn run(mut self) -> Result<Encoding> {
        while self.consumed < self.text.len() && !self.ring.is_exhausted() {
            let ring = self.ring;
            debug!(
                offset = ring.offset(),
                rows = ring.remaining_rows(),
                cols = ring.remaining_cols(),
                consumed = self.consumed,
                "Encoding ring"
            );

            if ring.is_center() {
                self.place_center()?;
                break;
            }

            for edge in ring.edges() {
                self.place_segment(&edge)?;
                if self.consumed == self.text.len() {
                    break;
                }
            }
            self.ring.shrink();
        }

        debug_assert!(self.scheduler.is_complete());
        debug!(placed = self.placements.len(), "Spiral encode finished");
        Ok(Encoding {
            grid: self.grid,
            placements: self.placements,
        })
    }

    /// Cut the next segment off the unconsumed text and write it onto `edge`.
    fn place_segment(&mut self, edge: &Edge) -> Result<()> {
        let take = edge.len().min(self.text.len() - self.consumed);
        let mut segment: Vec<char> = self.text[self.consumed..self.consumed + take].to_vec();
        self.consumed += take;

        if edge.side().is_reversed() {
            segment.reverse();
        }

        let mut cells: Vec<(usize, usize, char)> = edge
            .leading(take)
            .zip(segment)
            .map(|((row, col), value)| (row, col, value))
            .collect();
        // decode meets a reversed edge at its high end
        if edge.side().is_reversed() {
            cells.reverse();
        }

        for (row, col, value) in cells {
            let tick = self.next_tick()?;
            self.write(row, col, value, tick)?;
        }
        Ok(())
    }

    /// The last character of an odd square lands on the structural center.
    fn place_center(&mut self) -> Result<()> {
        let (row, col) = self.grid.center().unwrap_or(self.ring.origin());
        debug_assert_eq!((row, col), self.ring.origin());
        let value = self.text[self.consumed];
        self.consumed += 1;
        let tick = self.next_tick()?;
        self.write(row, col, value, tick)
    }

    fn next_tick(&mut self) -> Result<Tick> {
        self.scheduler
            .next_tick()
            .ok_or(GridError::CapacityExceeded {
                len: self.scheduler.progress() + 1,
                capacity: self.scheduler.target(),
            })
    }

    fn write(&mut self, row: usize, col: usize, value: char, tick: Tick) -> Result<()> {
        self.grid.set(row, col, Cell::Filled(value))?;
        self.grid.record(tick);
        self.placements.push(Placement {
            row,
            col,
            value,
            tick,
        });
        Ok(())
    }
}

/// Lay `text` into a `rows` x `cols` grid so that decoding it reads `text` back.
pub fn encode(text: &str, rows: usize, cols: usize) -> Result<Grid> {
    encode_with_placements(text, rows, cols).map(|encoding| encoding.grid)
}

/// Like [`encode`], also returning each write in tick order.
#[tracing::instrument(skip(text), fields(len = text.chars().count()))]
pub fn encode_with_placements(text: &str, rows: usize, cols: usize) -> Result<Encoding> {
    let chars: Vec<char> = text.chars().collect();
    SpiralEncoder::new(&chars, rows, cols)?.run()
}
