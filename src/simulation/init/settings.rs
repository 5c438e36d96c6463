use crate::domain::params::{Color, SimulationParameters};
use crate::systems::colorize::RenderMode;

use super::perf_stats::PerfStats;
use super::FireCore;

pub(super) fn configure(sim: &mut FireCore, params: SimulationParameters) {
    sim.params = params;
}

pub(super) fn enable_perf_metrics(sim: &mut FireCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats = PerfStats::default();
    }
}

pub(super) fn get_perf_stats(sim: &FireCore) -> PerfStats {
    sim.perf_stats.clone()
}

pub(super) fn set_render_mode(sim: &mut FireCore, mode: RenderMode) {
    sim.default_mode = mode;
}

pub(super) fn set_wind(sim: &mut FireCore, x: f32, y: f32) {
    sim.params.wind_vector = (x, y);
}

pub(super) fn set_colors(sim: &mut FireCore, color1: Color, color2: Color, color3: Color, bias: f32) {
    sim.params.color1 = color1;
    sim.params.color2 = color2;
    sim.params.color3 = color3;
    sim.params.color_bias = bias;
}
