//! Bijective mapping between tile indices and edge colors
//!
//! A tile index packs the four binary edge colors into one bit each, so the
//! sixteen tiles of the two-color set occupy exactly the indices `0..16`.
//! `decode` and `encode` are exact inverses over that domain.

/// Discrete label carried by one side of a tile
pub type EdgeColor = u8;

/// Compact integer encoding of a tile's four edge colors
pub type TileIndex = usize;

/// Flag bit for the top edge
pub const TOP_FLAG: TileIndex = 0b0001;
/// Flag bit for the right edge
pub const RIGHT_FLAG: TileIndex = 0b0010;
/// Flag bit for the bottom edge
pub const BOT_FLAG: TileIndex = 0b0100;
/// Flag bit for the left edge
pub const LEFT_FLAG: TileIndex = 0b1000;

/// A Wang tile: four edges, each carrying a discrete color
///
/// Immutable once constructed. Two tiles compare equal exactly when all
/// four edge colors agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Color of the edge facing `y + 1`
    pub top: EdgeColor,
    /// Color of the edge facing `x + 1`
    pub right: EdgeColor,
    /// Color of the edge facing `y - 1`
    pub bot: EdgeColor,
    /// Color of the edge facing `x - 1`
    pub left: EdgeColor,
}

impl Tile {
    /// Construct a tile from its four edge colors
    pub const fn new(top: EdgeColor, right: EdgeColor, bot: EdgeColor, left: EdgeColor) -> Self {
        Self {
            top,
            right,
            bot,
            left,
        }
    }
}

/// Decode a tile index into its edge colors
///
/// Each set flag bit yields edge color 1, each clear bit color 0. Total
/// over `0..16`; bits above the four flags are ignored.
pub const fn decode(index: TileIndex) -> Tile {
    Tile {
        top: if index & TOP_FLAG != 0 { 1 } else { 0 },
        right: if index & RIGHT_FLAG != 0 { 1 } else { 0 },
        bot: if index & BOT_FLAG != 0 { 1 } else { 0 },
        left: if index & LEFT_FLAG != 0 { 1 } else { 0 },
    }
}

/// Encode a tile's edge colors into its index
///
/// ORs together the flag for every non-zero edge; exact inverse of
/// [`decode`] for binary edge colors.
pub const fn encode(tile: Tile) -> TileIndex {
    let mut index = 0;

    if tile.top != 0 {
        index |= TOP_FLAG;
    }
    if tile.right != 0 {
        index |= RIGHT_FLAG;
    }
    if tile.bot != 0 {
        index |= BOT_FLAG;
    }
    if tile.left != 0 {
        index |= LEFT_FLAG;
    }

    index
}
