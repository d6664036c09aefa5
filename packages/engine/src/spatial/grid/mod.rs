//! Grid - double-buffered Structure of Arrays for a toroidal Life board
//!
//! Each buffer holds two planes indexed row-major (`row * width + col`):
//!     alive[]   0/1 bytes, viewable from JS as a Uint8Array
//!     streak[]  i32 generation counters, -1 while dead
//!
//! `front` is the current generation. `step()` reads only `front`, writes
//! only `back`, then swaps the two, so no read of generation N can observe
//! a write of generation N+1.

use crate::cell::{Cell, Coord};
use crate::error::{LifeError, Result};

mod buffer;
pub(crate) use buffer::CellBuffer;

mod indexing;
pub use indexing::wrap;

mod accessors;
mod bulk;
mod generation;
pub use generation::Transition;

/// Bytes per cell in the widest per-cell buffer (`i32` streak, `u32` color).
const PLANE_CELL_BYTES: usize = std::mem::size_of::<i32>();

/// Boards with fewer rows than this step on a single thread.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_ROWS: u32 = 64;

#[derive(Debug, Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    front: CellBuffer,
    back: CellBuffer,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let size = Self::check_dimensions(width, height)?;
        let invalid = || LifeError::InvalidDimension { width, height };
        Ok(Self {
            width,
            height,
            size,
            front: CellBuffer::try_new(size).ok_or_else(invalid)?,
            back: CellBuffer::try_new(size).ok_or_else(invalid)?,
        })
    }

    /// Validate dimensions and return the cell count.
    ///
    /// The widest plane (`streak`, or the `u32` color buffer) must fit in
    /// `isize::MAX` bytes, which is the most a `Vec` can hold, and the
    /// population must fit in a `u32`.
    pub fn check_dimensions(width: u32, height: u32) -> Result<usize> {
        let invalid = LifeError::InvalidDimension { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        let size = (width as usize).checked_mul(height as usize).ok_or(invalid.clone())?;
        let plane_bytes = size.checked_mul(PLANE_CELL_BYTES).ok_or(invalid.clone())?;
        if plane_bytes > isize::MAX as usize || size > u32::MAX as usize {
            return Err(invalid);
        }
        Ok(size)
    }
}
