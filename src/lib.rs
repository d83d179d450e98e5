//! Build-time generator for the MineBustle altar content patch
//!
//! Walks a rectangular tile grid and emits two views of it: the `MapTiles`
//! list of a Content Patcher `content.json`, and a C# listing that the
//! companion script pastes into its static constructor.

#![forbid(unsafe_code)]

/// Tile records and companion listing generation
pub mod generation;
/// Command-line handling, document I/O and error types
pub mod io;
/// Grid geometry and cell exclusion
pub mod spatial;

pub use io::error::{PatchError, Result};
