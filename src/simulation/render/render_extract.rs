use crate::systems::colorize::{colorize, RenderMode};

use super::{FireCore, PassTimer};

/// Colorize the committed grid into the reusable color buffer.
pub(super) fn render(sim: &mut FireCore, mode: RenderMode) -> &[u32] {
    let t0 = sim.perf_enabled.then(PassTimer::start);
    colorize(sim.buffers.front(), &sim.params, mode, &mut sim.colors);
    if let Some(t0) = t0 {
        sim.perf_stats.render_ms = t0.elapsed_ms();
    }
    &sim.colors.pixels
}

pub(super) fn render_default(sim: &mut FireCore) -> &[u32] {
    let mode = sim.default_mode;
    render(sim, mode)
}
