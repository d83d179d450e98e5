//! Tile list and companion listing generation

/// Companion C# listing
pub mod snippet;
/// Tile records and the grid walk
pub mod tiles;

pub use snippet::CompanionSnippet;
pub use tiles::{Generation, GridGenerator, TilePosition, TileRecord};
