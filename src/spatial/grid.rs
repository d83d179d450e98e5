//! Rectangular tile grid anchored at a world origin
//!
//! Cells are visited in row-major order (y outer, x inner). Every cell carries
//! its index within the full grid, so filtering cells out later never shifts
//! the index of the remaining ones.

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};

/// Grid placement and extent in tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    origin: [i32; 2],
    width: u32,
    height: u32,
}

/// Single grid cell visited during generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Offset `[x, y]` from the grid origin
    pub offset: [u32; 2],
    /// World tile coordinates `[x, y]`
    pub position: [i32; 2],
    /// Row-major index in the unfiltered grid (`y * width + x`)
    pub index: u32,
}

impl GridSpec {
    /// Create a grid with its top-left tile at `origin`
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension exceeds `MAX_GRID_DIMENSION`
    /// or the far corner does not fit in world coordinates
    pub fn new(origin: [i32; 2], width: u32, height: u32) -> Result<Self> {
        if width > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "width",
                &width,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        if height > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "height",
                &height,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }

        if !last_cell_fits(origin[0], width) {
            return Err(invalid_parameter(
                "origin_x",
                &origin[0],
                &"grid extends past the world coordinate range",
            ));
        }
        if !last_cell_fits(origin[1], height) {
            return Err(invalid_parameter(
                "origin_y",
                &origin[1],
                &"grid extends past the world coordinate range",
            ));
        }

        Ok(Self {
            origin,
            width,
            height,
        })
    }

    /// World coordinates of the top-left tile
    pub const fn origin(&self) -> [i32; 2] {
        self.origin
    }

    /// Number of columns
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells in the unfiltered grid
    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if an offset lies inside the grid
    pub const fn contains(&self, offset: [u32; 2]) -> bool {
        offset[0] < self.width && offset[1] < self.height
    }

    /// Row-major index of an in-grid offset
    pub const fn index_of(&self, offset: [u32; 2]) -> Option<u32> {
        if self.contains(offset) {
            Some(offset[1] * self.width + offset[0])
        } else {
            None
        }
    }

    /// World coordinates of an offset
    pub const fn world_position(&self, offset: [u32; 2]) -> [i32; 2] {
        [
            self.origin[0] + offset[0] as i32,
            self.origin[1] + offset[1] as i32,
        ]
    }

    /// Iterate every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| {
                let offset = [x, y];
                GridCell {
                    offset,
                    position: self.world_position(offset),
                    index: y * self.width + x,
                }
            })
        })
    }
}

// Dimensions are bounded by MAX_GRID_DIMENSION, so the cast is lossless
const fn last_cell_fits(origin: i32, extent: u32) -> bool {
    extent == 0 || origin.checked_add(extent as i32 - 1).is_some()
}
