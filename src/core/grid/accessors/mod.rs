use super::*;

mod cells;
mod temperature;
mod velocity;
mod density;

/// A cell decoded to physical values: temperature and density in `[0, 1]`,
/// velocity components in `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellState {
    pub temperature: f32,
    pub vx: f32,
    pub vy: f32,
    pub density: f32,
}

impl CellState {
    #[inline]
    pub fn encode(self) -> Cell {
        let (velocity_x, velocity_y) = codec::encode_velocity(self.vx, self.vy);
        Cell {
            temperature: codec::encode_unit(self.temperature),
            velocity_x,
            velocity_y,
            density: codec::encode_unit(self.density),
        }
    }

    /// Channel-wise `self * (1 - t) + other * t`
    #[inline]
    pub fn mix(self, other: CellState, t: f32) -> CellState {
        let s = 1.0 - t;
        CellState {
            temperature: self.temperature * s + other.temperature * t,
            vx: self.vx * s + other.vx * t,
            vy: self.vy * s + other.vy * t,
            density: self.density * s + other.density * t,
        }
    }
}
