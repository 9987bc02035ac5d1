//! Adjacency validation for candidate placements
//!
//! A candidate tile may occupy a cell only if every filled neighbour agrees
//! with it along the shared boundary: the candidate's edge facing that
//! neighbour must carry the same color as the neighbour's opposite-facing
//! edge. Outside or unfilled neighbours impose no constraint. Each
//! directional probe reads the actual neighbour cell, and the "below" check
//! compares the candidate's `bot` edge against the neighbour's `top` edge;
//! an earlier formulation of this rule probed the candidate's own cell and
//! compared like edges below, which produced visually broken boundaries.

use crate::spatial::{Cell, Grid, Point};
use crate::tiles::{EdgeColor, TileIndex, Tileset};

/// A tile index paired with the cell it is proposed for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Index of the proposed tile within the tileset
    pub index: TileIndex,
    /// Cell the tile would occupy
    pub point: Point,
}

impl Candidate {
    /// Construct a candidate pairing
    pub const fn new(index: TileIndex, point: Point) -> Self {
        Self { index, point }
    }
}

/// Cardinal direction from a candidate cell to one of its neighbours
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Neighbour at `y + 1`
    Above,
    /// Neighbour at `x + 1`
    Right,
    /// Neighbour at `y - 1`
    Below,
    /// Neighbour at `x - 1`
    Left,
}

impl Direction {
    /// All four directions in checking order
    pub const ALL: [Self; 4] = [Self::Above, Self::Right, Self::Below, Self::Left];

    /// Coordinate step from a cell to its neighbour in this direction
    pub const fn step(self) -> (i32, i32) {
        match self {
            Self::Above => (0, 1),
            Self::Right => (1, 0),
            Self::Below => (0, -1),
            Self::Left => (-1, 0),
        }
    }
}

/// Why a candidate placement was refused
///
/// Rejections are the retry loop's normal fuel; they are domain values,
/// never surfaced as errors by the generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementRejection {
    /// Candidate cell lies outside the grid bounds
    OutsideGrid,
    /// Candidate cell already holds a tile
    Occupied,
    /// Tile index is not present in the tileset
    UnknownTile,
    /// A filled neighbour disagrees along the shared boundary
    EdgeMismatch {
        /// Direction of the offending neighbour
        direction: Direction,
        /// Color the candidate presents on the shared boundary
        candidate_color: EdgeColor,
        /// Color the neighbour presents on the shared boundary
        neighbour_color: EdgeColor,
    },
}

/// Check whether a candidate may legally occupy its cell
///
/// Returns the candidate unchanged on success so callers can thread it
/// onward, or an explicit rejection describing the first failed check.
///
/// # Errors
///
/// Returns a [`PlacementRejection`] when the cell is out of bounds,
/// occupied, the tile index is unknown, or a filled neighbour's opposite
/// edge carries a different color.
pub fn validate(
    candidate: Candidate,
    grid: &Grid,
    tileset: &Tileset,
) -> Result<Candidate, PlacementRejection> {
    match grid.get(candidate.point) {
        Cell::Outside => return Err(PlacementRejection::OutsideGrid),
        Cell::Filled(_) => return Err(PlacementRejection::Occupied),
        Cell::Unfilled => {}
    }

    let tile = tileset
        .get(candidate.index)
        .ok_or(PlacementRejection::UnknownTile)?;

    for direction in Direction::ALL {
        let (dx, dy) = direction.step();
        let Cell::Filled(neighbour_index) = grid.get(candidate.point.offset(dx, dy)) else {
            continue;
        };
        // Committed indices always come from this tileset
        let Some(neighbour) = tileset.get(neighbour_index) else {
            continue;
        };

        let (candidate_color, neighbour_color) = match direction {
            Direction::Above => (tile.top, neighbour.bot),
            Direction::Right => (tile.right, neighbour.left),
            Direction::Below => (tile.bot, neighbour.top),
            Direction::Left => (tile.left, neighbour.right),
        };

        if candidate_color != neighbour_color {
            return Err(PlacementRejection::EdgeMismatch {
                direction,
                candidate_color,
                neighbour_color,
            });
        }
    }

    Ok(candidate)
}

/// Validate a candidate and commit it to the grid in one step
///
/// All required inputs are mandatory parameters, so there is no partially
/// constructed placement to mishandle.
///
/// # Errors
///
/// Returns the same rejections as [`validate`]; on success the grid cell
/// is filled and the candidate is returned unchanged.
pub fn try_place(
    candidate: Candidate,
    grid: &mut Grid,
    tileset: &Tileset,
) -> Result<Candidate, PlacementRejection> {
    let validated = validate(candidate, grid, tileset)?;

    // validate guarantees the point is in bounds
    match grid.set(validated.point, validated.index) {
        Ok(()) => Ok(validated),
        Err(_) => Err(PlacementRejection::OutsideGrid),
    }
}
