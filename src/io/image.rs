//! PNG rendering of a finished grid
//!
//! Draws every filled cell as a square of four edge-colored triangular
//! quadrants, the classic way of visualizing a Wang tiling: each quadrant
//! takes the color of the nearest edge, so matching boundaries read as
//! unbroken bands across cells. Unfilled cells stay transparent.

use image::{ImageBuffer, Rgba};

use crate::io::configuration::EDGE_PALETTE;
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::{Cell, Grid};
use crate::tiles::{EdgeColor, Tile, Tileset};

fn palette_color(edge_color: EdgeColor) -> Rgba<u8> {
    let rgba = EDGE_PALETTE
        .get(edge_color as usize)
        .copied()
        .unwrap_or([0, 0, 0, 255]);
    Rgba(rgba)
}

// Nearest-edge color for a pixel within one tile block
const fn quadrant_color(tile: Tile, px: usize, py: usize, tile_pixels: usize) -> EdgeColor {
    let to_top = py;
    let to_bot = tile_pixels - 1 - py;
    let to_left = px;
    let to_right = tile_pixels - 1 - px;

    if to_top <= to_bot && to_top <= to_left && to_top <= to_right {
        tile.top
    } else if to_bot <= to_left && to_bot <= to_right {
        tile.bot
    } else if to_left <= to_right {
        tile.left
    } else {
        tile.right
    }
}

/// Export a grid as a PNG image with transparent unfilled cells
///
/// Grid `y` grows upward, so row zero of the grid lands at the bottom of
/// the image.
///
/// # Errors
///
/// Returns an error if:
/// - `tile_pixels` is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    grid: &Grid,
    tileset: &Tileset,
    tile_pixels: usize,
    output_path: &str,
) -> Result<()> {
    if tile_pixels == 0 {
        return Err(invalid_parameter(
            "tile_pixels",
            &0,
            &"each tile needs at least one pixel",
        ));
    }

    let size = grid.size();
    let width = (size.width * tile_pixels) as u32;
    let height = (size.height * tile_pixels) as u32;

    let mut img = ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0]));

    for point in grid.points() {
        let Cell::Filled(index) = grid.get(point) else {
            continue;
        };
        let Some(tile) = tileset.get(index) else {
            continue;
        };

        let base_x = point.x as usize * tile_pixels;
        let base_y = (size.height - 1 - point.y as usize) * tile_pixels;

        for py in 0..tile_pixels {
            for px in 0..tile_pixels {
                let color = palette_color(quadrant_color(tile, px, py, tile_pixels));
                img.put_pixel((base_x + px) as u32, (base_y + py) as u32, color);
            }
        }
    }

    if let Some(parent) = std::path::Path::new(output_path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
