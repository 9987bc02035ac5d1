//! Spatial data structures for the tile grid
//!
//! This module contains spatial-related functionality including:
//! - Integer coordinates and grid bounds
//! - The dense bounded cell container mutated by placement

/// Grid cell container and coordinate types
pub mod grid;

pub use grid::{Cell, Grid, Point, Size};
