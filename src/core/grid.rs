//! Grid - packed RGBA cells, the only persistent simulation state
//!
//! One `Cell` is four bytes laid out exactly like the field texture a
//! renderer uploads: R = temperature, G = velocity x, B = velocity y,
//! A = density. The whole grid can be handed to JS as a byte slice.
//!
//! Every byte is produced by the codec, so reading a grid never needs
//! validation.

use bytemuck::{Pod, Zeroable};

use crate::core::codec::{self, ZERO};
use crate::error::{FireError, FireResult};

mod indexing;
mod accessors;

pub use accessors::CellState;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Cell {
    pub temperature: u8,
    pub velocity_x: u8,
    pub velocity_y: u8,
    pub density: u8,
}

impl Cell {
    /// All channels at the codec's zero encoding (no-flow boundary value).
    pub const EMPTY: Cell = Cell {
        temperature: ZERO,
        velocity_x: ZERO,
        velocity_y: ZERO,
        density: ZERO,
    };

    #[inline]
    pub fn decode(self) -> CellState {
        let (vx, vy) = codec::decode_velocity(self.velocity_x, self.velocity_y);
        CellState {
            temperature: codec::decode_unit(self.temperature),
            vx,
            vy,
            density: codec::decode_unit(self.density),
        }
    }
}

/// Fixed-size 2-D array of cells (row-major, row 0 first)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,
    pub cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a zeroed grid. Fails instead of aborting when the storage
    /// cannot be reserved.
    pub fn new(width: u32, height: u32) -> FireResult<Self> {
        let size = checked_size(width, height)?;
        Ok(Self {
            width,
            height,
            size,
            cells: try_alloc(size, Cell::EMPTY)?,
        })
    }

    /// Reset every cell to the zero encoding
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Overwrite this grid with `other`. Both must share a resolution.
    pub fn copy_from(&mut self, other: &Grid) {
        debug_assert_eq!(
            (self.width, self.height),
            (other.width, other.height),
            "copy_from: resolution mismatch"
        );
        self.cells.copy_from_slice(&other.cells);
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }

    pub fn cells_ptr(&self) -> *const u8 {
        self.as_bytes().as_ptr()
    }

    pub fn byte_len(&self) -> usize {
        self.size * std::mem::size_of::<Cell>()
    }
}

/// Validate a resolution and return its cell count.
pub(crate) fn checked_size(width: u32, height: u32) -> FireResult<usize> {
    if width == 0 || height == 0 {
        return Err(FireError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .filter(|size| size.checked_mul(std::mem::size_of::<Cell>()).is_some())
        .ok_or(FireError::InvalidDimensions { width, height })
}

/// Fallible `vec![value; len]`.
pub(crate) fn try_alloc<T: Clone>(len: usize, value: T) -> FireResult<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| FireError::Allocation {
        bytes: len.saturating_mul(std::mem::size_of::<T>()),
    })?;
    buf.resize(len, value);
    Ok(buf)
}
