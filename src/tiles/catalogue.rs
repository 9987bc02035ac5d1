//! Complete tileset catalogue construction and lookup
//!
//! Enumerates every edge-color combination for a color count and exposes
//! the result as a read-only table keyed by tile index. Built once per run
//! and shared by reference from then on.

use crate::io::error::{GenerationError, Result};
use crate::tiles::codec::{self, Tile, TileIndex};

/// The color count the bit-flag codec supports
pub const SUPPORTED_COLOR_COUNT: usize = 2;

/// Read-only catalogue of every tile for a given color count
///
/// Contains exactly `4^q` entries with tile indices `0..4^q`; bijectivity
/// of the codec guarantees no duplicates.
#[derive(Clone, Debug)]
pub struct Tileset {
    tiles: Vec<Tile>,
    color_count: usize,
}

impl Tileset {
    /// Build the complete tileset for a color count
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::UnsupportedColorCount`] for any color
    /// count the bit-per-edge encoding cannot represent (currently
    /// everything except 2).
    pub fn build(color_count: usize) -> Result<Self> {
        if color_count != SUPPORTED_COLOR_COUNT {
            return Err(GenerationError::UnsupportedColorCount {
                color_count,
                supported: SUPPORTED_COLOR_COUNT,
            });
        }

        let combinations = 4usize.pow(color_count as u32);
        let tiles = (0..combinations).map(codec::decode).collect();

        Ok(Self {
            tiles,
            color_count,
        })
    }

    /// Look up the tile for an index, `None` when out of range
    pub fn get(&self, index: TileIndex) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    /// Number of tiles in the catalogue
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalogue is empty (never true for a built set)
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The color count this catalogue was built for
    pub const fn color_count(&self) -> usize {
        self.color_count
    }

    /// Iterate over `(index, tile)` pairs in index order
    pub fn iter(&self) -> std::iter::Enumerate<std::iter::Copied<std::slice::Iter<'_, Tile>>> {
        self.tiles.iter().copied().enumerate()
    }
}

impl<'a> IntoIterator for &'a Tileset {
    type Item = (TileIndex, Tile);
    type IntoIter = std::iter::Enumerate<std::iter::Copied<std::slice::Iter<'a, Tile>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
