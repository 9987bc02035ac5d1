//! Tile data structures and the complete tileset catalogue
//!
//! This module contains tile-related functionality including:
//! - The edge-color value types
//! - Bijective encoding between tiles and compact indices
//! - The read-only catalogue of every tile for a color count

/// Complete tileset catalogue construction and lookup
pub mod catalogue;
/// Bijective mapping between tile indices and edge colors
pub mod codec;

pub use catalogue::Tileset;
pub use codec::{EdgeColor, Tile, TileIndex};
