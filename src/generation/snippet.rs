//! C# listing mirroring the generated tile positions
//!
//! The listing is pasted by hand into the companion script's static
//! constructor, so its shape is fixed: a three-line header, one `Add` per
//! tile, and a closing brace.

use crate::io::configuration::{SNIPPET_CLASS, SNIPPET_COLLECTION};

/// Accumulated lines of the companion listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionSnippet {
    lines: Vec<String>,
    placements: usize,
}

impl Default for CompanionSnippet {
    fn default() -> Self {
        Self::new()
    }
}

impl CompanionSnippet {
    /// Start a listing with only the constructor header
    pub fn new() -> Self {
        let lines = vec![
            format!("    static {SNIPPET_CLASS}()"),
            "    {".to_string(),
            format!("        {SNIPPET_COLLECTION} = new List<Vector2>();"),
        ];

        Self {
            lines,
            placements: 0,
        }
    }

    /// Append one placement statement for world coordinates `[x, y]`
    pub fn push_placement(&mut self, position: [i32; 2]) {
        self.lines.push(format!(
            "        {SNIPPET_COLLECTION}.Add(new Vector2({}, {}));",
            position[0], position[1]
        ));
        self.placements += 1;
    }

    /// Number of placement statements
    pub const fn placement_count(&self) -> usize {
        self.placements
    }

    /// All lines including the closing brace
    pub fn lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .map(String::as_str)
            .chain(std::iter::once("    }"))
            .collect()
    }

    /// The full listing joined with newlines
    pub fn render(&self) -> String {
        self.lines().join("\n")
    }
}
