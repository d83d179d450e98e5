//! Tests for generator constants the content pack depends on

#[cfg(test)]
mod tests {
    use altarpatch::io::configuration::{
        CONFIG_ALLOW_VALUES, CONFIG_DEFAULT, CONFIG_GUARD_VALUE, CONFIG_OPTION, DEFAULT_HEIGHT,
        DEFAULT_ORIGIN_X, DEFAULT_ORIGIN_Y, DEFAULT_OUTPUT_PATH, DEFAULT_SKIP_TILES, DEFAULT_WIDTH,
        FORMAT_VERSION, JSON_INDENT, MAX_GRID_DIMENSION, SNIPPET_FOOTER_LINES,
        SNIPPET_HEADER_LINES, TILE_PIXEL_SIZE,
    };

    // Tests the altar sits where the companion script expects it
    // Verified by changing the origin constants
    #[test]
    fn test_default_grid_placement() {
        assert_eq!(DEFAULT_ORIGIN_X, 55);
        assert_eq!(DEFAULT_ORIGIN_Y, 7);
        assert_eq!(DEFAULT_WIDTH, 8);
        assert_eq!(DEFAULT_HEIGHT, 8);
    }

    // Tests no tiles are skipped by default
    // Verified by adding a default skip offset
    #[test]
    fn test_default_skip_tiles_empty() {
        assert!(DEFAULT_SKIP_TILES.is_empty());
    }

    // Tests default grid fits within the dimension limit
    // Verified by lowering the limit below the default width
    #[test]
    fn test_defaults_within_limit() {
        assert!(DEFAULT_WIDTH <= MAX_GRID_DIMENSION);
        assert!(DEFAULT_HEIGHT <= MAX_GRID_DIMENSION);
    }

    // Tests the config guard selects the default value
    // Verified by setting the guard to "false"
    #[test]
    fn test_guard_matches_default() {
        assert_eq!(CONFIG_OPTION, "EnableAltar");
        assert_eq!(CONFIG_GUARD_VALUE, CONFIG_DEFAULT.to_string());
        assert!(CONFIG_ALLOW_VALUES.split(", ").any(|v| v == CONFIG_GUARD_VALUE));
    }

    // Tests format version and tile size
    // Verified by changing the format version
    #[test]
    fn test_document_constants() {
        assert_eq!(FORMAT_VERSION, "2.3.0");
        assert_eq!(TILE_PIXEL_SIZE, 16);
    }

    // Tests output is a JSON file inside the content pack folder
    // Verified by removing the folder component
    #[test]
    fn test_output_path_shape() {
        assert!(DEFAULT_OUTPUT_PATH.ends_with("content.json"));
        assert!(DEFAULT_OUTPUT_PATH.starts_with("[CP] "));
    }

    // Tests indentation is four spaces
    // Verified by switching to two spaces
    #[test]
    fn test_json_indent() {
        assert_eq!(JSON_INDENT, b"    ");
    }

    // Tests the listing frame sizes
    // Verified by adding a blank header line
    #[test]
    fn test_snippet_frame() {
        assert_eq!(SNIPPET_HEADER_LINES, 3);
        assert_eq!(SNIPPET_FOOTER_LINES, 1);
    }
}
