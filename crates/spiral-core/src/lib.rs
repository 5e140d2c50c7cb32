//! Spiral traversal engine.
//!
//! Reads a rectangular grid ring by ring (outermost first, clockwise from
//! the top-left corner) and lays a character sequence back into the cells
//! that traversal would visit. Both directions hand out logical ticks from
//! an [`EmissionScheduler`] so a caller can animate them.

#![deny(clippy::all)]

mod cell;
pub mod decoder;
pub mod encoder;
mod error;
pub mod grid;
pub mod ring;
pub mod scheduler;

#[cfg(test)]
pub mod test_fixtures;

pub use cell::Cell;
pub use decoder::EmittedElement;
pub use decoder::SpiralDecoder;
pub use decoder::decode;
pub use decoder::decode_string;
pub use encoder::Encoding;
pub use encoder::Placement;
pub use encoder::SpiralEncoder;
pub use encoder::encode;
pub use encoder::encode_with_placements;
pub use error::GridError;
pub use error::Result;
pub use grid::Grid;
pub use grid::SpiralGrid;
pub use ring::Edge;
pub use ring::RingState;
pub use ring::Side;
pub use scheduler::EmissionScheduler;
pub use scheduler::Tick;
