//! Tests for the content patch document shape and file I/O

#[cfg(test)]
mod tests {
    use altarpatch::PatchError;
    use altarpatch::generation::{GridGenerator, TileRecord};
    use altarpatch::io::content::{Change, ContentPatch};
    use altarpatch::spatial::{ExclusionMask, GridSpec};
    use std::fs;
    use tempfile::TempDir;

    fn tiles(width: u32, height: u32) -> Vec<TileRecord> {
        let grid = GridSpec::new([55, 7], width, height).unwrap();
        let mask = ExclusionMask::new(&grid);
        GridGenerator::new(grid, mask).generate().tiles
    }

    // Tests the document holds a load then a guarded map edit
    // Verified by swapping the order of the changes
    #[test]
    fn test_document_structure() {
        let patch = ContentPatch::with_tiles(tiles(2, 1));

        assert_eq!(patch.format, "2.3.0");
        assert_eq!(patch.changes.len(), 2);

        match &patch.changes[0] {
            Change::Load { target, from_file } => {
                assert_eq!(target, "Mods/MineBustle/AltarSprite");
                assert_eq!(from_file, "assets/altar.png");
            }
            Change::EditMap { .. } => unreachable!("Expected Load first"),
        }

        match &patch.changes[1] {
            Change::EditMap {
                target,
                add_tilesheets,
                map_tiles,
                when,
            } => {
                assert_eq!(target, "Maps/Mountain");
                assert_eq!(add_tilesheets.len(), 1);
                assert_eq!(add_tilesheets[0].id, "z_MineBustle_Altar");
                assert_eq!(add_tilesheets[0].image, "Mods/MineBustle/AltarSprite");
                assert_eq!(add_tilesheets[0].tile_size.width, 16);
                assert_eq!(add_tilesheets[0].tile_size.height, 16);
                assert_eq!(map_tiles.len(), 2);
                assert_eq!(when.get("EnableAltar").map(String::as_str), Some("true"));
            }
            Change::Load { .. } => unreachable!("Expected EditMap second"),
        }
    }

    // Tests keys are written in document order with four-space indent
    // Verified by switching to serde_json::to_string_pretty
    #[test]
    fn test_pretty_json_layout() {
        let json = ContentPatch::with_tiles(tiles(1, 1)).to_pretty_json().unwrap();
        let lines: Vec<&str> = json.lines().collect();

        assert_eq!(lines[0], "{");
        assert_eq!(lines[1], "    \"Format\": \"2.3.0\",");
        assert_eq!(lines[2], "    \"ConfigSchema\": {");
        assert_eq!(lines[3], "        \"EnableAltar\": {");
        assert_eq!(lines[4], "            \"AllowValues\": \"true, false\",");
        assert_eq!(lines[5], "            \"Default\": true");

        let action = json.find("\"Action\": \"Load\"").unwrap();
        let target = json.find("\"Target\": \"Mods/MineBustle/AltarSprite\"").unwrap();
        assert!(action < target);

        let position = json.find("\"Position\"").unwrap();
        let layer = json.find("\"Layer\": \"Buildings\"").unwrap();
        let sheet = json.find("\"SetTilesheet\"").unwrap();
        let index = json.find("\"SetIndex\": 0").unwrap();
        assert!(position < layer && layer < sheet && sheet < index);

        let tiles_key = json.find("\"MapTiles\"").unwrap();
        let when_key = json.find("\"When\"").unwrap();
        assert!(tiles_key < when_key);
    }

    // Tests map_tiles returns the edit's tile list
    // Verified by returning the first change unconditionally
    #[test]
    fn test_map_tiles() {
        let generated = tiles(3, 2);
        let patch = ContentPatch::with_tiles(generated.clone());

        assert_eq!(patch.map_tiles(), Some(generated.as_slice()));
    }

    // Tests matching tile lists report no mismatch
    // Verified by always returning Some(0)
    #[test]
    fn test_first_tile_mismatch_none() {
        let generated = tiles(3, 3);
        let patch = ContentPatch::with_tiles(generated.clone());

        assert_eq!(patch.first_tile_mismatch(&generated), None);
    }

    // Tests a changed tile is located even when lengths agree
    // Verified by comparing lengths only
    #[test]
    fn test_first_tile_mismatch_same_length() {
        let generated = tiles(3, 3);
        let mut altered = generated.clone();
        altered[4].set_index = 40;
        let patch = ContentPatch::with_tiles(altered);

        assert_eq!(patch.first_tile_mismatch(&generated), Some(4));
    }

    // Tests truncated and extended lists mismatch at the shorter length
    // Verified by ignoring length differences after zipping
    #[test]
    fn test_first_tile_mismatch_length_difference() {
        let generated = tiles(3, 2);
        let patch = ContentPatch::with_tiles(generated[..4].to_vec());

        assert_eq!(patch.first_tile_mismatch(&generated), Some(4));
        assert_eq!(
            ContentPatch::with_tiles(generated.clone()).first_tile_mismatch(&generated[..2]),
            Some(2)
        );
    }

    // Tests a written patch reads back identically
    // Verified by dropping SetIndex from the serialized record
    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("content.json");
        let patch = ContentPatch::with_tiles(tiles(4, 4));

        patch.write_to(&path).unwrap();
        let read_back = ContentPatch::read_from(&path).unwrap();

        assert_eq!(read_back, patch);
    }

    // Tests existing files are replaced, not appended to
    // Verified by opening the file in append mode
    #[test]
    fn test_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("content.json");
        fs::write(&path, "x".repeat(100_000)).unwrap();

        let patch = ContentPatch::with_tiles(tiles(1, 1));
        patch.write_to(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, patch.to_pretty_json().unwrap());
    }

    // Tests missing directories are an error and are not created
    // Verified by calling create_dir_all before writing
    #[test]
    fn test_write_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        let path = missing.join("content.json");

        let err = ContentPatch::with_tiles(tiles(1, 1)).write_to(&path).unwrap_err();

        match err {
            PatchError::FileSystem {
                path: failed,
                operation,
                ..
            } => {
                assert_eq!(failed, path);
                assert_eq!(operation, "write content patch");
            }
            _ => unreachable!("Expected FileSystem error type"),
        }
        assert!(!missing.exists());
    }

    // Tests reading malformed documents reports the path
    // Verified by mapping parse errors to FileSystem
    #[test]
    fn test_read_invalid_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("content.json");
        fs::write(&path, "{\"Format\": 2}").unwrap();

        match ContentPatch::read_from(&path).unwrap_err() {
            PatchError::Serialization { path: failed, .. } => assert_eq!(failed, path),
            _ => unreachable!("Expected Serialization error type"),
        }
    }

    // Tests reading a missing file is a filesystem error
    // Verified by returning a default patch for missing files
    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");

        assert!(matches!(
            ContentPatch::read_from(&path),
            Err(PatchError::FileSystem { .. })
        ));
    }
}
