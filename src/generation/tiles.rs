//! Tile placement records and the grid walk that produces them
//!
//! A single pass over the grid fills both outputs, so the tile list and the
//! companion listing always agree on coordinates and order.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::generation::snippet::CompanionSnippet;
use crate::io::configuration::{TILE_LAYER, TILESHEET_ID};
use crate::spatial::{ExclusionMask, GridCell, GridSpec};

/// World tile coordinates as written to the content patch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePosition {
    /// Column on the target map
    #[serde(rename = "X")]
    pub x: i32,
    /// Row on the target map
    #[serde(rename = "Y")]
    pub y: i32,
}

/// One `MapTiles` entry of the map edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TileRecord {
    /// Where the tile is placed
    pub position: TilePosition,
    /// Map layer receiving the tile
    pub layer: String,
    /// Tilesheet the index refers to
    pub set_tilesheet: String,
    /// Row-major index into the tilesheet
    pub set_index: u32,
}

impl TileRecord {
    /// Create a record for a grid cell on the altar tilesheet
    pub fn from_cell(cell: &GridCell) -> Self {
        Self {
            position: TilePosition {
                x: cell.position[0],
                y: cell.position[1],
            },
            layer: TILE_LAYER.to_string(),
            set_tilesheet: TILESHEET_ID.to_string(),
            set_index: cell.index,
        }
    }
}

/// Both outputs of one generation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// Tile records in row-major order
    pub tiles: Vec<TileRecord>,
    /// Companion listing in the same order
    pub snippet: CompanionSnippet,
    /// Number of grid cells skipped
    pub excluded: usize,
}

impl Generation {
    /// Number of generated tiles
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }
}

/// Walks a grid and emits tiles for every cell not excluded
#[derive(Debug, Clone)]
pub struct GridGenerator {
    grid: GridSpec,
    exclusions: ExclusionMask,
}

impl GridGenerator {
    /// Create a generator over `grid` skipping cells in `exclusions`
    pub const fn new(grid: GridSpec, exclusions: ExclusionMask) -> Self {
        Self { grid, exclusions }
    }

    /// Grid being walked
    pub const fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Cells that will be skipped
    pub const fn exclusions(&self) -> &ExclusionMask {
        &self.exclusions
    }

    /// Produce the tile list and companion listing
    ///
    /// Indices come from the full grid, so excluded cells leave gaps
    pub fn generate(&self) -> Generation {
        let mut tiles = Vec::with_capacity(
            self.grid
                .cell_count()
                .saturating_sub(self.exclusions.len()),
        );
        let mut snippet = CompanionSnippet::new();

        for cell in self.grid.cells() {
            if self.exclusions.contains(cell.offset) {
                debug!(offset = ?cell.offset, index = cell.index, "skipping excluded cell");
                continue;
            }

            tiles.push(TileRecord::from_cell(&cell));
            snippet.push_placement(cell.position);
        }

        if !self.exclusions.is_empty() {
            warn!(
                excluded = self.exclusions.len(),
                "tile indices are not contiguous; consumers keyed on index see gaps"
            );
        }

        Generation {
            tiles,
            snippet,
            excluded: self.exclusions.len(),
        }
    }
}
