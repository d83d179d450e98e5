//! Content Patcher document model and JSON file I/O
//!
//! Field order of every struct is the order keys appear in the written file.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::generation::TileRecord;
use crate::io::configuration::{
    CONFIG_ALLOW_VALUES, CONFIG_DEFAULT, CONFIG_GUARD_VALUE, CONFIG_OPTION, FORMAT_VERSION,
    JSON_INDENT, SPRITE_ASSET, SPRITE_FROM_FILE, TARGET_MAP, TILE_PIXEL_SIZE, TILESHEET_ID,
};
use crate::io::error::{PatchError, Result};

/// Root of the `content.json` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContentPatch {
    /// Content Patcher format version
    pub format: String,
    /// Player-facing config options keyed by name
    pub config_schema: BTreeMap<String, ConfigOption>,
    /// Patch actions applied in order
    pub changes: Vec<Change>,
}

/// Declaration of one config option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigOption {
    /// Comma-separated list of accepted values
    pub allow_values: String,
    /// Value used until the player changes it
    pub default: bool,
}

/// A single patch action, tagged by its `Action` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "Action")]
pub enum Change {
    /// Load a file from the pack as a game asset
    #[serde(rename_all = "PascalCase")]
    Load {
        /// Asset name to load into
        target: String,
        /// Pack-relative source file
        from_file: String,
    },
    /// Add tilesheets and tiles to a map
    #[serde(rename_all = "PascalCase")]
    EditMap {
        /// Map asset being edited
        target: String,
        /// Tilesheets added before tiles are placed
        add_tilesheets: Vec<Tilesheet>,
        /// Tiles to place
        map_tiles: Vec<TileRecord>,
        /// Condition guarding the edit
        when: BTreeMap<String, String>,
    },
}

/// Tilesheet added to the edited map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tilesheet {
    /// Id referenced by `SetTilesheet`
    pub id: String,
    /// Asset name of the sheet image
    pub image: String,
    /// Size of one tile in pixels
    pub tile_size: TileSize,
}

/// Pixel size of one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TileSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ContentPatch {
    /// Build the altar patch around a generated tile list
    pub fn with_tiles(tiles: Vec<TileRecord>) -> Self {
        let config_schema = BTreeMap::from([(
            CONFIG_OPTION.to_string(),
            ConfigOption {
                allow_values: CONFIG_ALLOW_VALUES.to_string(),
                default: CONFIG_DEFAULT,
            },
        )]);

        let load = Change::Load {
            target: SPRITE_ASSET.to_string(),
            from_file: SPRITE_FROM_FILE.to_string(),
        };

        let edit = Change::EditMap {
            target: TARGET_MAP.to_string(),
            add_tilesheets: vec![Tilesheet {
                id: TILESHEET_ID.to_string(),
                image: SPRITE_ASSET.to_string(),
                tile_size: TileSize {
                    width: TILE_PIXEL_SIZE,
                    height: TILE_PIXEL_SIZE,
                },
            }],
            map_tiles: tiles,
            when: BTreeMap::from([(CONFIG_OPTION.to_string(), CONFIG_GUARD_VALUE.to_string())]),
        };

        Self {
            format: FORMAT_VERSION.to_string(),
            config_schema,
            changes: vec![load, edit],
        }
    }

    /// Tiles of the first map edit, if any
    pub fn map_tiles(&self) -> Option<&[TileRecord]> {
        self.changes.iter().find_map(|change| match change {
            Change::EditMap { map_tiles, .. } => Some(map_tiles.as_slice()),
            Change::Load { .. } => None,
        })
    }

    /// Position of the first tile differing from `tiles`
    ///
    /// A length difference counts as a mismatch at the end of the shorter list.
    /// Returns `None` when the map edit holds exactly `tiles`.
    pub fn first_tile_mismatch(&self, tiles: &[TileRecord]) -> Option<usize> {
        let written = self.map_tiles().unwrap_or_default();

        written
            .iter()
            .zip(tiles)
            .position(|(left, right)| left != right)
            .or_else(|| (written.len() != tiles.len()).then_some(written.len().min(tiles.len())))
    }

    /// Encode as pretty JSON with four-space indentation
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;

        String::from_utf8(buffer).map_err(|e| PatchError::InvalidSourceData {
            reason: format!("serialized patch is not UTF-8: {e}"),
        })
    }

    /// Write the document, replacing any existing file
    ///
    /// Missing parent directories are not created.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self
            .to_pretty_json()
            .map_err(|e| with_document_path(e, path))?;

        std::fs::write(path, json).map_err(|e| PatchError::FileSystem {
            path: path.to_path_buf(),
            operation: "write content patch",
            source: e,
        })
    }

    /// Read a previously written document
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid patch
    pub fn read_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| PatchError::FileSystem {
            path: path.to_path_buf(),
            operation: "read content patch",
            source: e,
        })?;

        serde_json::from_str(&text).map_err(|e| PatchError::Serialization {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

// Serialization errors raised in memory only learn their file here
fn with_document_path(error: PatchError, path: &Path) -> PatchError {
    match error {
        PatchError::Serialization { source, .. } => PatchError::Serialization {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    }
}
