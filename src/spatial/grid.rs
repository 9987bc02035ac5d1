//! Grid cell container and coordinate types
//!
//! Provides the bounded 2-D cell container the placement loop mutates.
//! Every in-bounds point always carries a state, so a missing entry can
//! never be confused with an empty cell; positions outside the declared
//! bounds are a distinct probe result and are never stored.

use ndarray::Array2;

use crate::io::error::{Result, invalid_parameter};
use crate::tiles::TileIndex;

/// Integer grid coordinate with structural equality
///
/// Two points with equal `(x, y)` are the same cell regardless of where
/// the values came from, so `Point` is usable as a container key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate, increasing rightward
    pub x: i32,
    /// Vertical coordinate, increasing upward
    pub y: i32,
}

impl Point {
    /// Construct a point from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point displaced by `(dx, dy)`
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Grid dimensions defining the bounds `0 <= x < width`, `0 <= y < height`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl Size {
    /// Construct a size from width and height
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of cells within the bounds
    pub const fn capacity(&self) -> usize {
        self.width * self.height
    }

    /// Check whether a point falls within the bounds
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }
}

/// State of one grid position as seen by a bounds-aware probe
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Position lies outside the declared bounds
    Outside,
    /// In-bounds position with no tile committed yet
    Unfilled,
    /// In-bounds position holding the tile with this index
    Filled(TileIndex),
}

impl Cell {
    /// Whether this probe result holds a committed tile
    pub const fn is_filled(&self) -> bool {
        matches!(self, Self::Filled(_))
    }
}

/// Dense bounded 2-D container of cell states
///
/// Constructed empty for a generation session and mutated in place by
/// successful placements. There is no removal operation, so the filled
/// count only ever rises.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Option<TileIndex>>,
    size: Size,
    filled: usize,
}

impl Grid {
    /// Create a grid with every in-bounds cell unfilled
    pub fn empty(size: Size) -> Self {
        Self {
            cells: Array2::from_elem((size.height, size.width), None),
            size,
            filled: 0,
        }
    }

    /// Probe the state of a position
    ///
    /// Returns [`Cell::Outside`] for any point beyond the declared bounds.
    pub fn get(&self, point: Point) -> Cell {
        if !self.size.contains(point) {
            return Cell::Outside;
        }

        match self.cells.get((point.y as usize, point.x as usize)) {
            Some(Some(index)) => Cell::Filled(*index),
            Some(None) => Cell::Unfilled,
            None => Cell::Outside,
        }
    }

    /// Commit a tile to an in-bounds cell
    ///
    /// The filled count rises by at most one; re-setting an already filled
    /// cell overwrites its index without touching the count. Callers are
    /// expected to target unfilled cells only, which the placement path
    /// enforces before committing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GenerationError::InvalidParameter`] when the point
    /// lies outside the grid bounds.
    pub fn set(&mut self, point: Point, index: TileIndex) -> Result<()> {
        if !self.size.contains(point) {
            return Err(invalid_parameter(
                "point",
                &format!("({}, {})", point.x, point.y),
                &format!(
                    "outside the {}x{} grid bounds",
                    self.size.width, self.size.height
                ),
            ));
        }

        if let Some(cell) = self.cells.get_mut((point.y as usize, point.x as usize)) {
            if cell.is_none() {
                self.filled += 1;
            }
            *cell = Some(index);
        }

        Ok(())
    }

    /// The declared grid bounds
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Total number of cells within the bounds
    pub const fn capacity(&self) -> usize {
        self.size.capacity()
    }

    /// Number of cells currently holding a tile
    pub const fn filled_count(&self) -> usize {
        self.filled
    }

    /// Whether every in-bounds cell holds a tile
    pub const fn is_full(&self) -> bool {
        self.filled == self.size.capacity()
    }

    /// Iterate over every in-bounds point in row order
    ///
    /// Renderers consume this together with [`Grid::get`].
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let width = self.size.width;
        (0..self.size.height)
            .flat_map(move |y| (0..width).map(move |x| Point::new(x as i32, y as i32)))
    }
}
