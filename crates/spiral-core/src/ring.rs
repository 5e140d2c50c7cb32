//! Geometry of one concentric ring of a grid.
//!
//! A ring is walked clockwise from its top-left corner: the top row left to
//! right, the right column downwards, the bottom row right to left, and the
//! left column upwards. Corners belong to the first edge that reaches them.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Bottom and left edges are walked against index order.
    pub fn is_reversed(self) -> bool {
        matches!(self, Side::Bottom | Side::Left)
    }

    /// Whether the edge runs along a row (varying column) or a column.
    pub fn is_row(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

/// One edge of a ring: a fixed row or column plus an ascending index span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    side: Side,
    fixed: usize,
    span: Range<usize>,
}

impl Edge {
    fn new(side: Side, fixed: usize, start: usize, len: usize) -> Self {
        Self {
            side,
            fixed,
            span: start..start + len,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Grid coordinate of position `index` in the edge's span.
    pub fn coord(&self, index: usize) -> (usize, usize) {
        if self.side.is_row() {
            (self.fixed, index)
        } else {
            (index, self.fixed)
        }
    }

    /// Coordinates in the order a spiral walk visits them.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let forward = (!self.side.is_reversed()).then(|| self.span.clone());
        let backward = self.side.is_reversed().then(|| self.span.clone().rev());
        forward
            .into_iter()
            .flatten()
            .chain(backward.into_iter().flatten())
            .map(|i| self.coord(i))
    }

    /// Ascending coordinates of the `count` cells a walk reaches first.
    ///
    /// For forward edges that is the low end of the span; for reversed edges
    /// the high end, since the walk starts there.
    pub fn leading(&self, count: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let count = count.min(self.len());
        let start = if self.side.is_reversed() {
            self.span.end - count
        } else {
            self.span.start
        };
        (start..start + count).map(|i| self.coord(i))
    }
}

/// Remaining bounds of a traversal and how many rings it has consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingState {
    remaining_rows: usize,
    remaining_cols: usize,
    offset: usize,
}

impl RingState {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            remaining_rows: rows,
            remaining_cols: cols,
            offset: 0,
        }
    }

    pub fn remaining_rows(&self) -> usize {
        self.remaining_rows
    }

    pub fn remaining_cols(&self) -> usize {
        self.remaining_cols
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining_rows == 0 || self.remaining_cols == 0
    }

    /// A single cell left in the middle of an odd square.
    pub fn is_center(&self) -> bool {
        self.remaining_rows == 1 && self.remaining_cols == 1
    }

    pub fn origin(&self) -> (usize, usize) {
        (self.offset, self.offset)
    }

    /// Number of cells in this ring.
    pub fn len(&self) -> usize {
        self.edges().iter().map(Edge::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The ring's edges in walk order.
    ///
    /// Top spans `remaining_cols` cells, right `remaining_rows - 1`; bottom
    /// (`remaining_cols - 1`) only exists with more than one row, left
    /// (`remaining_rows - 2`) only with more than one column.
    pub fn edges(&self) -> Vec<Edge> {
        if self.is_exhausted() {
            return Vec::new();
        }
        let o = self.offset;
        let rows = self.remaining_rows;
        let cols = self.remaining_cols;
        let last_row = o + rows - 1;
        let last_col = o + cols - 1;

        let mut edges = Vec::with_capacity(4);
        edges.push(Edge::new(Side::Top, o, o, cols));
        edges.push(Edge::new(Side::Right, last_col, o + 1, rows - 1));
        if rows > 1 {
            edges.push(Edge::new(Side::Bottom, last_row, o, cols - 1));
        }
        if cols > 1 {
            edges.push(Edge::new(Side::Left, o, o + 1, rows.saturating_sub(2)));
        }
        edges
    }

    /// Step inward to the next ring.
    pub fn shrink(&mut self) {
        self.remaining_rows = self.remaining_rows.saturating_sub(2);
        self.remaining_cols = self.remaining_cols.saturating_sub(2);
        self.offset += 1;
    }
}
