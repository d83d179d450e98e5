//! Grid geometry and cell exclusion
//!
//! This module contains spatial-related functionality including:
//! - Grid placement and row-major cell iteration
//! - Exclusion masks for skipped cells

/// Cells skipped during generation
pub mod exclusion;
/// Grid placement and cell iteration
pub mod grid;

pub use exclusion::ExclusionMask;
pub use grid::{GridCell, GridSpec};
