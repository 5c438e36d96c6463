//! Source Field - caller-painted injection buffer
//!
//! Same shape and byte layout as the grid, different meaning per channel:
//! R = density added every tick, G/B = velocity added every tick, A unused.
//! The field persists across ticks until cleared or repainted.

use bytemuck::{Pod, Zeroable};

use crate::core::codec::{self, ZERO};
use crate::core::grid::{checked_size, try_alloc};
use crate::error::{FireError, FireResult};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct SourceCell {
    pub density: u8,
    pub velocity_x: u8,
    pub velocity_y: u8,
    pub reserved: u8,
}

impl SourceCell {
    pub const EMPTY: SourceCell = SourceCell {
        density: ZERO,
        velocity_x: ZERO,
        velocity_y: ZERO,
        reserved: ZERO,
    };

    #[inline]
    pub fn density(self) -> f32 {
        codec::decode_unit(self.density)
    }

    #[inline]
    pub fn velocity(self) -> (f32, f32) {
        codec::decode_velocity(self.velocity_x, self.velocity_y)
    }
}

/// Circular brush stroke. `None` channels are left untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Brush {
    pub u: f32,
    pub v: f32,
    pub radius: f32,
    pub density: Option<f32>,
    pub wind_x: Option<f32>,
    pub wind_y: Option<f32>,
}

impl Brush {
    pub fn density(u: f32, v: f32, radius: f32, density: f32) -> Self {
        Self { u, v, radius, density: Some(density), ..Self::default() }
    }

    /// A brush with no finite positive extent paints nothing
    fn is_degenerate(&self) -> bool {
        !(self.u.is_finite() && self.v.is_finite() && self.radius.is_finite()) || self.radius <= 0.0
    }
}

pub struct SourceField {
    width: u32,
    height: u32,
    cells: Vec<SourceCell>,
}

impl SourceField {
    pub fn new(width: u32, height: u32) -> FireResult<Self> {
        let size = checked_size(width, height)?;
        Ok(Self {
            width,
            height,
            cells: try_alloc(size, SourceCell::EMPTY)?,
        })
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn cells(&self) -> &[SourceCell] {
        &self.cells
    }

    #[inline]
    pub fn cell(&self, x: u32, y: u32) -> SourceCell {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }

    pub fn byte_len(&self) -> usize {
        self.cells.len() * std::mem::size_of::<SourceCell>()
    }

    /// Stop all sourcing
    pub fn clear(&mut self) -> &Self {
        self.cells.fill(SourceCell::EMPTY);
        self
    }

    /// Overwrite the channels the brush carries for every cell strictly
    /// inside the circle. Extents outside the field are clipped.
    pub fn paint(&mut self, brush: &Brush) {
        if brush.is_degenerate() {
            return;
        }
        let w = self.width as f32;
        let h = self.height as f32;
        let r = brush.radius;

        let start_x = ((brush.u - r) * w).floor().max(0.0) as u32;
        let start_y = ((brush.v - r) * h).floor().max(0.0) as u32;
        // Exclusive ends one past the last cell the circle can reach
        let end_x = (((brush.u + r) * w).floor() + 1.0).clamp(0.0, w) as u32;
        let end_y = (((brush.v + r) * h).floor() + 1.0).clamp(0.0, h) as u32;

        let density = brush.density.map(codec::encode_unit);
        let wind_x = brush.wind_x.map(codec::encode_signed);
        let wind_y = brush.wind_y.map(codec::encode_signed);
        let r2 = r * r;

        for y in start_y..end_y {
            let dy = y as f32 / h - brush.v;
            for x in start_x..end_x {
                let dx = x as f32 / w - brush.u;
                if dx * dx + dy * dy >= r2 {
                    continue;
                }
                let cell = &mut self.cells[y as usize * self.width as usize + x as usize];
                if let Some(d) = density { cell.density = d; }
                if let Some(gx) = wind_x { cell.velocity_x = gx; }
                if let Some(gy) = wind_y { cell.velocity_y = gy; }
            }
        }
    }

    /// Replace the whole field with caller-built cells (RGBA byte order).
    pub fn set_bytes(&mut self, bytes: &[u8]) -> FireResult<()> {
        let expected = self.byte_len();
        if bytes.len() != expected {
            return Err(FireError::SourceFieldShape { expected, actual: bytes.len() });
        }
        bytemuck::cast_slice_mut::<SourceCell, u8>(&mut self.cells).copy_from_slice(bytes);
        Ok(())
    }

    /// Replace the whole field with another of the same resolution.
    pub fn copy_from(&mut self, other: &SourceField) -> FireResult<()> {
        if (other.width, other.height) != (self.width, self.height) {
            return Err(FireError::SourceFieldShape {
                expected: self.byte_len(),
                actual: other.byte_len(),
            });
        }
        self.cells.copy_from_slice(&other.cells);
        Ok(())
    }
}
