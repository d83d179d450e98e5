//! Sprite inspection for tiles that would place nothing visible

use crate::io::error::{PatchError, Result};
use crate::spatial::GridSpec;
use image::RgbaImage;
use std::path::Path;

/// Load a sprite sheet and list offsets of fully transparent tiles
///
/// The sheet must cover the grid exactly, one `tile_size` square per cell.
///
/// # Errors
///
/// Returns an error if:
/// - The PNG file cannot be loaded
/// - The image dimensions differ from the grid size in pixels
pub fn transparent_offsets(
    path: &Path,
    grid: &GridSpec,
    tile_size: u32,
) -> Result<Vec<[u32; 2]>> {
    let img = image::open(path).map_err(|e| PatchError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    transparent_tiles(&img.to_rgba8(), grid, tile_size)
}

/// List offsets of fully transparent tiles in an already decoded sheet
///
/// # Errors
///
/// Returns an error if the image dimensions differ from the grid size in pixels
pub fn transparent_tiles(
    sheet: &RgbaImage,
    grid: &GridSpec,
    tile_size: u32,
) -> Result<Vec<[u32; 2]>> {
    let expected = (
        u64::from(grid.width()) * u64::from(tile_size),
        u64::from(grid.height()) * u64::from(tile_size),
    );
    let (width, height) = sheet.dimensions();

    if (u64::from(width), u64::from(height)) != expected {
        return Err(PatchError::InvalidSourceData {
            reason: format!(
                "sprite is {width}x{height} pixels but the {}x{} grid needs {}x{}",
                grid.width(),
                grid.height(),
                expected.0,
                expected.1
            ),
        });
    }

    let offsets = grid
        .cells()
        .filter(|cell| {
            let left = cell.offset[0] * tile_size;
            let top = cell.offset[1] * tile_size;
            (top..top + tile_size)
                .all(|y| (left..left + tile_size).all(|x| sheet.get_pixel(x, y)[3] == 0))
        })
        .map(|cell| cell.offset)
        .collect();

    Ok(offsets)
}
