//! Colorizer - committed grid -> displayable pixels
//!
//! Temperature picks a color on a two-segment gradient
//! (`color3 -> color2 -> color1`, split at `colorBias`); density is the alpha.
//! Pixels are packed ABGR (little-endian bytes read `R, G, B, A`) so the
//! buffer can be copied straight into canvas `ImageData`.

use crate::core::grid::{checked_size, try_alloc, CellState, Grid};
use crate::domain::params::SimulationParameters;
use crate::error::FireResult;

use super::passes::map_rows_into;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderMode {
    #[default]
    Normal,
    /// Velocity magnitude and direction over density
    Debug,
}

/// Row-major ABGR pixels, one per grid cell
#[derive(Clone, Debug)]
pub struct ColorBuffer {
    width: u32,
    height: u32,
    pub pixels: Vec<u32>,
}

impl ColorBuffer {
    pub fn new(width: u32, height: u32) -> FireResult<Self> {
        let size = checked_size(width, height)?;
        Ok(Self { width, height, pixels: try_alloc(size, 0u32)? })
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    pub fn as_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    pub fn len_bytes(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<u32>()
    }
}

/// Pack an RGBA color with components in `[0, 1]`.
#[inline]
pub fn pack_abgr(rgba: [f32; 4]) -> u32 {
    let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
    (q(rgba[3]) << 24) | (q(rgba[2]) << 16) | (q(rgba[1]) << 8) | q(rgba[0])
}

/// RGBA color of one decoded cell.
#[inline]
pub fn shade(cell: CellState, params: &SimulationParameters, mode: RenderMode) -> [f32; 4] {
    match mode {
        RenderMode::Normal => {
            let bias = params.color_bias.clamp(0.0001, 0.9999);
            let t = cell.temperature;
            let color = if t < bias {
                params.color3.mix(params.color2, t / bias)
            } else {
                params.color2.mix(params.color1, (t - bias) / (1.0 - bias))
            };
            [color.r, color.g, color.b, cell.density]
        }
        RenderMode::Debug => {
            let half = cell.density * 0.5;
            let (ax, ay) = (cell.vx.abs(), cell.vy.abs());
            [cell.density, ax.max(half), ay.max(half), half.max(ax.max(ay))]
        }
    }
}

/// Colorize the whole grid into `out`. Never touches the grid.
pub fn colorize(grid: &Grid, params: &SimulationParameters, mode: RenderMode, out: &mut ColorBuffer) {
    debug_assert_eq!((grid.width(), grid.height()), (out.width, out.height));
    let width = grid.width() as usize;

    map_rows_into(&mut out.pixels, width, |y, row| {
        for (px, cell) in row.iter_mut().zip(grid.row(y)) {
            *px = pack_abgr(shade(cell.decode(), params, mode));
        }
    });
}
