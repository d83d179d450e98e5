//! Generator constants and runtime configuration defaults

// Grid placement on the target map
/// World X coordinate of the grid's top-left tile
pub const DEFAULT_ORIGIN_X: i32 = 55;
/// World Y coordinate of the grid's top-left tile
pub const DEFAULT_ORIGIN_Y: i32 = 7;
/// Number of tile columns covered by the altar sprite
pub const DEFAULT_WIDTH: u32 = 8;
/// Number of tile rows covered by the altar sprite
pub const DEFAULT_HEIGHT: u32 = 8;

/// Grid offsets `[x, y]` never emitted, e.g. fully transparent sprite tiles
pub const DEFAULT_SKIP_TILES: &[[u32; 2]] = &[];

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: u32 = 1024;

// Content patch document
/// Content Patcher format version declared by the document
pub const FORMAT_VERSION: &str = "2.3.0";
/// Name of the boolean config option guarding the map edit
pub const CONFIG_OPTION: &str = "EnableAltar";
/// Allowed values for the config option
pub const CONFIG_ALLOW_VALUES: &str = "true, false";
/// Default value of the config option
pub const CONFIG_DEFAULT: bool = true;
/// Config value that activates the map edit
pub const CONFIG_GUARD_VALUE: &str = "true";

/// Asset name the sprite is loaded under
pub const SPRITE_ASSET: &str = "Mods/MineBustle/AltarSprite";
/// Sprite path relative to the content pack
pub const SPRITE_FROM_FILE: &str = "assets/altar.png";
/// Map receiving the tile edits
pub const TARGET_MAP: &str = "Maps/Mountain";
/// Tilesheet id added to the map
pub const TILESHEET_ID: &str = "z_MineBustle_Altar";
/// Map layer every tile is placed on
pub const TILE_LAYER: &str = "Buildings";
/// Edge length of one map tile in pixels
pub const TILE_PIXEL_SIZE: u32 = 16;

// Companion snippet
/// Class whose static constructor receives the tile list
pub const SNIPPET_CLASS: &str = "AltarInteractionHandler";
/// Static collection filled by the snippet
pub const SNIPPET_COLLECTION: &str = "AltarTiles";
/// Fixed lines before the first placement
pub const SNIPPET_HEADER_LINES: usize = 3;
/// Fixed lines after the last placement
pub const SNIPPET_FOOTER_LINES: usize = 1;

// Output settings
/// Where the content patch is written unless overridden
pub const DEFAULT_OUTPUT_PATH: &str = "[CP] MineBustle/content.json";
/// Indentation unit of the written JSON
pub const JSON_INDENT: &[u8] = b"    ";
