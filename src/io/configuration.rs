//! Default constants and runtime configuration values

// Grid defaults used by the CLI; the library takes explicit parameters
/// Default grid width in cells
pub const DEFAULT_GRID_WIDTH: usize = 16;
/// Default grid height in cells
pub const DEFAULT_GRID_HEIGHT: usize = 12;

/// Default number of edge colors
pub const DEFAULT_COLOR_COUNT: usize = 2;

// Safety bound on the blind retry loop; generous for the 16-tile set
/// Default maximum placement attempts before giving up
pub const DEFAULT_ATTEMPT_CAP: usize = 1000;

// Rendering settings
/// Default side length of one rendered tile in pixels
pub const DEFAULT_TILE_PIXELS: usize = 16;
/// Default output path for the rendered grid
pub const DEFAULT_OUTPUT: &str = "tiling.png";

/// RGBA fill for each edge color, indexed by color value
pub const EDGE_PALETTE: [[u8; 4]; 2] = [[38, 70, 83, 255], [233, 196, 106, 255]];

// Progress display settings
/// How many attempts pass between progress bar refreshes
pub const PROGRESS_UPDATE_INTERVAL: usize = 32;
