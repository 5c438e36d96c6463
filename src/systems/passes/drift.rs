use crate::core::grid::Grid;
use crate::domain::coefficients::DriftCoefficients;

use super::map_rows;

/// Semi-Lagrangian transport: every cell pulls its new value from the
/// point upstream of it along `velocity + wind`, resampled bilinearly.
///
/// The trace starts at the cell centre `(x + 0.5, y + 0.5)`. Sample offsets
/// from the floored upstream point are `(0,-1)`, `(+1,0)`, `(0,+1)` and
/// `(+1,+1)`; reads outside the grid clamp to the edge.
pub fn drift_pass(front: &Grid, coeffs: &DriftCoefficients, back: &mut Grid) {
    let (wind_x, wind_y) = coeffs.wind;
    let air = coeffs.air_speed;
    // Upstream points beyond this margin all clamp to the same edge cells
    let max_x = front.width() as f32 + 1.0;
    let max_y = front.height() as f32 + 1.0;

    map_rows(back, |y, row| {
        for (x, out) in row.iter_mut().enumerate() {
            let here = front.cell(x as u32, y).decode();
            let (cx, cy) = (x as f32 + 0.5, y as f32 + 0.5);

            let px = (cx - air * (here.vx + wind_x)).clamp(-2.0, max_x);
            let py = (cy - air * (here.vy + wind_y)).clamp(-2.0, max_y);
            // NaN upstream points trace from the cell centre
            let (px, py) = if px.is_nan() || py.is_nan() { (cx, cy) } else { (px, py) };

            let ix = px.floor();
            let iy = py.floor();
            let fx = px - ix;
            let fy = py - iy;
            let (ix, iy) = (ix as i64, iy as i64);

            let a = front.sample_clamped(ix, iy - 1);
            let b = front.sample_clamped(ix + 1, iy);
            let c = front.sample_clamped(ix, iy + 1);
            let e = front.sample_clamped(ix + 1, iy + 1);

            *out = a.mix(b, fx).mix(c.mix(e, fx), fy).encode();
        }
    });
}
