use crate::core::grid::{CellState, Grid};
use crate::systems::source_field::SourceField;

use super::map_rows;

/// Largest velocity magnitude per axis the source pass will produce.
const SOURCE_VELOCITY_LIMIT: f32 = 0.99;

/// Merge the source field into the grid. Injected density also heats the cell.
pub fn source_pass(front: &Grid, field: &SourceField, back: &mut Grid) {
    debug_assert_eq!((front.width(), front.height()), (field.width(), field.height()));

    map_rows(back, |y, row| {
        let current = front.row(y);
        let start = y as usize * front.width() as usize;
        let sources = &field.cells()[start..start + row.len()];

        for ((out, cell), src) in row.iter_mut().zip(current).zip(sources) {
            let cur = cell.decode();
            let injected = src.density();
            let (svx, svy) = src.velocity();

            *out = CellState {
                temperature: (injected + cur.temperature).clamp(0.0, 1.0),
                vx: (cur.vx + svx).clamp(-SOURCE_VELOCITY_LIMIT, SOURCE_VELOCITY_LIMIT),
                vy: (cur.vy + svy).clamp(-SOURCE_VELOCITY_LIMIT, SOURCE_VELOCITY_LIMIT),
                density: (injected + cur.density).clamp(0.0, 1.0),
            }
            .encode();
        }
    });
}
