use crate::core::grid::{Cell, CellState, Grid};
use crate::domain::coefficients::{DiffuseCoefficients, DENSITY_LEAK};

use super::map_rows;

/// One 8-neighbour relaxation sweep plus expansion, swirl, drag and burn.
///
/// The outermost ring is written as `Cell::EMPTY` (no-flow boundary).
pub fn diffuse_pass(front: &Grid, coeffs: &DiffuseCoefficients, back: &mut Grid) {
    debug_assert_eq!((front.width(), front.height()), (back.width(), back.height()));

    map_rows(back, |y, row| {
        for (x, out) in row.iter_mut().enumerate() {
            let x = x as u32;
            *out = if front.is_boundary(x, y) {
                Cell::EMPTY
            } else {
                relax_cell(front, x, y, coeffs).encode()
            };
        }
    });
}

/// Interior cell update; all eight neighbours exist.
#[inline]
fn relax_cell(front: &Grid, x: u32, y: u32, k: &DiffuseCoefficients) -> CellState {
    let at = |dx: i32, dy: i32| front.cell((x as i32 + dx) as u32, (y as i32 + dy) as u32).decode();

    let center = at(0, 0);
    let left = at(-1, 0);
    let right = at(1, 0);
    let up = at(0, -1);
    let down = at(0, 1);

    let n = [left, right, up, down, at(-1, -1), at(1, -1), at(-1, 1), at(1, 1)]
        .iter()
        .fold(CellState::default(), |acc, c| CellState {
            temperature: acc.temperature + c.temperature,
            vx: acc.vx + c.vx,
            vy: acc.vy + c.vy,
            density: acc.density + c.density,
        });
    let relaxed = CellState {
        temperature: (center.temperature + k.diffuse * n.temperature) / (1.0 + 8.0 * k.diffuse),
        vx: (center.vx + k.viscosity * n.vx) / (1.0 + 8.0 * k.viscosity),
        vy: (center.vy + k.viscosity * n.vy) / (1.0 + 8.0 * k.viscosity),
        density: (center.density + k.diffuse * n.density) / (1.0 + 8.0 * k.diffuse) - DENSITY_LEAK,
    };

    let expand = 1.0 - k.expansion;
    let swirl = 1.0 - k.swirl;
    let mut vx = relaxed.vx
        + expand * (left.density - right.density)
        + swirl * (left.vy - right.vy) * 0.5;
    let mut vy = relaxed.vy
        + expand * (up.density - down.density)
        + swirl * (up.vx - down.vx) * 0.5;
    vx -= (1.0 - k.drag) * vx;
    vy -= (1.0 - k.drag) * vy;

    CellState {
        temperature: (relaxed.temperature - k.burn_rate).clamp(0.0, 1.0),
        vx,
        vy,
        // clamped by the encoder
        density: relaxed.density,
    }
}
