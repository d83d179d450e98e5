use bitvec::prelude::*;
use std::fmt;

use crate::spatial::grid::GridSpec;

/// Fixed-size mask of grid cells skipped during generation
///
/// Bits are laid out in the grid's row-major index order. Offsets outside
/// the grid are never stored, so `len` always counts `E ∩ grid`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExclusionMask {
    bits: BitVec,
    width: u32,
    height: u32,
}

impl ExclusionMask {
    /// Create a mask with no cells excluded
    pub fn new(grid: &GridSpec) -> Self {
        Self {
            bits: bitvec![0; grid.cell_count()],
            width: grid.width(),
            height: grid.height(),
        }
    }

    /// Build a mask from `[x, y]` grid offsets
    pub fn from_offsets(grid: &GridSpec, offsets: &[[u32; 2]]) -> Self {
        let mut mask = Self::new(grid);
        for &offset in offsets {
            mask.insert(offset);
        }
        mask
    }

    /// Exclude an offset
    ///
    /// Returns false when the offset lies outside the grid and was ignored
    pub fn insert(&mut self, offset: [u32; 2]) -> bool {
        match self.bit_index(offset) {
            Some(index) => {
                self.bits.set(index, true);
                true
            }
            None => false,
        }
    }

    /// Test whether an offset is excluded
    pub fn contains(&self, offset: [u32; 2]) -> bool {
        self.bit_index(offset)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Number of excluded in-grid cells
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no cells are excluded
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Excluded offsets in row-major order
    pub fn offsets(&self) -> Vec<[u32; 2]> {
        self.bits
            .iter_ones()
            .map(|index| {
                let index = index as u32;
                [index % self.width, index / self.width]
            })
            .collect()
    }

    const fn bit_index(&self, offset: [u32; 2]) -> Option<usize> {
        if offset[0] < self.width && offset[1] < self.height {
            Some(offset[1] as usize * self.width as usize + offset[0] as usize)
        } else {
            None
        }
    }
}

impl fmt::Display for ExclusionMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExclusionMask({} cells: {:?})", self.len(), self.offsets())
    }
}
