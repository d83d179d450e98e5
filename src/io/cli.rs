//! Command-line interface for writing the altar content patch

use crate::generation::{Generation, GridGenerator};
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_ORIGIN_X, DEFAULT_ORIGIN_Y, DEFAULT_OUTPUT_PATH, DEFAULT_SKIP_TILES,
    DEFAULT_WIDTH, SNIPPET_CLASS, TILE_PIXEL_SIZE,
};
use crate::io::content::ContentPatch;
use crate::io::error::{PatchError, Result};
use crate::io::sprite::transparent_offsets;
use crate::spatial::{ExclusionMask, GridSpec};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "altarpatch")]
#[command(
    author,
    version,
    about = "Generate the altar content patch and its companion C# listing"
)]
/// Command-line arguments for the patch generator
///
/// Every argument defaults to the values the content pack ships with, so a
/// bare invocation regenerates the committed `content.json`.
pub struct Cli {
    /// Path of the generated content patch
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// World X coordinate of the grid's top-left tile
    #[arg(short = 'x', long, default_value_t = DEFAULT_ORIGIN_X, allow_negative_numbers = true)]
    pub origin_x: i32,

    /// World Y coordinate of the grid's top-left tile
    #[arg(short = 'y', long, default_value_t = DEFAULT_ORIGIN_Y, allow_negative_numbers = true)]
    pub origin_y: i32,

    /// Grid width in tiles
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Grid height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Grid offset to leave out, may be repeated
    #[arg(short, long = "skip", value_name = "X,Y", value_parser = parse_offset)]
    pub skip: Vec<[u32; 2]>,

    /// Also skip tiles that are fully transparent in this sprite sheet
    #[arg(long, value_name = "PNG")]
    pub sprite: Option<PathBuf>,

    /// Read the written file back and compare it with the generated tiles
    #[arg(long)]
    pub verify: bool,

    /// Suppress the C# listing
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parse an `X,Y` grid offset
///
/// # Errors
///
/// Returns a message if the value is not two comma-separated unsigned integers
pub fn parse_offset(value: &str) -> std::result::Result<[u32; 2], String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;

    let x = x
        .trim()
        .parse()
        .map_err(|e| format!("invalid X in '{value}': {e}"))?;
    let y = y
        .trim()
        .parse()
        .map_err(|e| format!("invalid Y in '{value}': {e}"))?;

    Ok([x, y])
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Where the patch was written
    pub output: PathBuf,
    /// Number of tile definitions written
    pub tile_count: usize,
    /// Number of grid cells skipped
    pub excluded: usize,
}

/// Orchestrates generation, writing, and reporting for one run
pub struct PatchRunner {
    cli: Cli,
}

impl PatchRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Grid described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions or origin are out of range
    pub fn grid(&self) -> Result<GridSpec> {
        GridSpec::new(
            [self.cli.origin_x, self.cli.origin_y],
            self.cli.width,
            self.cli.height,
        )
    }

    /// Collect built-in, command-line, and sprite-derived exclusions
    ///
    /// # Errors
    ///
    /// Returns an error if the sprite sheet cannot be loaded or does not fit the grid
    pub fn exclusions(&self, grid: &GridSpec) -> Result<ExclusionMask> {
        let mut mask = ExclusionMask::from_offsets(grid, DEFAULT_SKIP_TILES);

        for &offset in &self.cli.skip {
            if !mask.insert(offset) {
                warn!(?offset, "skip offset lies outside the grid and is ignored");
            }
        }

        if let Some(sprite) = &self.cli.sprite {
            let transparent = transparent_offsets(sprite, grid, TILE_PIXEL_SIZE)?;
            info!(
                sprite = %sprite.display(),
                count = transparent.len(),
                "skipping fully transparent sprite tiles"
            );
            for offset in transparent {
                mask.insert(offset);
            }
        }

        Ok(mask)
    }

    /// Run the generator without touching the filesystem
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is invalid or the sprite sheet cannot be used
    pub fn generate(&self) -> Result<Generation> {
        let grid = self.grid()?;
        let exclusions = self.exclusions(&grid)?;
        Ok(GridGenerator::new(grid, exclusions).generate())
    }

    /// Generate, write the patch, and print the companion listing
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails, the patch cannot be written,
    /// or verification finds a mismatch
    pub fn process(&self) -> Result<RunSummary> {
        let generation = self.generate()?;

        let tile_count = generation.tile_count();
        let patch = ContentPatch::with_tiles(generation.tiles.clone());
        patch.write_to(&self.cli.output)?;

        if self.cli.verify {
            self.verify(&generation)?;
        }

        info!(
            output = %self.cli.output.display(),
            "generated content patch with {tile_count} tile definitions"
        );

        if !self.cli.quiet {
            Self::print_listing(&generation);
        }

        Ok(RunSummary {
            output: self.cli.output.clone(),
            tile_count,
            excluded: generation.excluded,
        })
    }

    fn verify(&self, generation: &Generation) -> Result<()> {
        let written = ContentPatch::read_from(&self.cli.output)?;

        match written.first_tile_mismatch(&generation.tiles) {
            None => {
                info!(output = %self.cli.output.display(), "verified written tiles");
                Ok(())
            }
            Some(first_mismatch) => Err(PatchError::VerificationFailed {
                path: self.cli.output.clone(),
                expected: generation.tile_count(),
                found: written.map_tiles().map_or(0, <[_]>::len),
                first_mismatch,
            }),
        }
    }

    // The listing is meant to be copied out of the terminal
    #[allow(clippy::print_stdout)]
    fn print_listing(generation: &Generation) {
        println!();
        println!("=== Make sure {SNIPPET_CLASS}.cs matches the following ===");
        println!("{}", generation.snippet.render());
    }
}
