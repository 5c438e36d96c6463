use wasm_bindgen::prelude::*;

use crate::systems::passes::PassKind;

/// Timings of the last tick (and last render). Zeros while perf is disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) source_ms: f64,
    pub(super) diffuse_ms: f64,
    pub(super) drift_ms: f64,
    pub(super) render_ms: f64,
    pub(super) dt: f32,
    pub(super) diffuse_sweeps: u32,
    pub(super) ticks: u32,
    pub(super) grid_size: u32,
    pub(super) memory_bytes: u32,
}

impl PerfStats {
    /// Clear per-tick timings; the tick counter and last render time survive.
    pub(crate) fn reset(&mut self) {
        *self = PerfStats {
            ticks: self.ticks,
            render_ms: self.render_ms,
            ..PerfStats::default()
        };
    }

    pub(crate) fn record_pass(&mut self, kind: PassKind, ms: f64) {
        match kind {
            PassKind::Source => self.source_ms += ms,
            PassKind::Diffuse => {
                self.diffuse_ms += ms;
                self.diffuse_sweeps += 1;
            }
            PassKind::Drift => self.drift_ms += ms,
        }
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn source_ms(&self) -> f64 { self.source_ms }
    #[wasm_bindgen(getter)]
    pub fn diffuse_ms(&self) -> f64 { self.diffuse_ms }
    #[wasm_bindgen(getter)]
    pub fn drift_ms(&self) -> f64 { self.drift_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn dt(&self) -> f32 { self.dt }
    #[wasm_bindgen(getter)]
    pub fn diffuse_sweeps(&self) -> u32 { self.diffuse_sweeps }
    #[wasm_bindgen(getter)]
    pub fn ticks(&self) -> u32 { self.ticks }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}
