//! FireCore - owns the field buffers, the source field and the parameters,
//! and runs the tick pipeline over them.
//!
//! Work is split by concern into the submodules below; this file only
//! wires them together.
//!
//! A tick needs `&mut self`, so the borrow checker already rules out
//! painting or reconfiguring while a tick is in flight. Embedders sharing a
//! core across threads wrap it in a lock of their choice.

use crate::core::grid::Grid;
use crate::domain::params::{Color, SimulationOptions, SimulationParameters};
use crate::error::FireResult;
use crate::systems::colorize::{self, ColorBuffer, RenderMode};
use crate::systems::source_field::{Brush, SourceField};

#[path = "perf/pass_timer.rs"]
mod pass_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/buffers.rs"]
mod buffers;
#[path = "step/step.rs"]
mod step;
#[path = "render/host.rs"]
pub mod host;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::{AbiLayout, FireSim};
pub use host::{Headless, HostGuard, RenderHost};
pub use perf_stats::PerfStats;

use buffers::FieldBuffers;
use pass_timer::PassTimer;

pub(crate) struct AbiLayoutData {
    pub(crate) field_ptr: *const u8,
    pub(crate) field_len_bytes: usize,
    pub(crate) source_ptr: *const u8,
    pub(crate) source_len_bytes: usize,
    pub(crate) colors_ptr: *const u32,
    pub(crate) colors_len_elements: usize,
    pub(crate) colors_len_bytes: usize,
}

/// The fire simulation
pub struct FireCore {
    params: SimulationParameters,
    buffers: FieldBuffers,
    source: SourceField,
    colors: ColorBuffer,
    default_mode: RenderMode,

    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl FireCore {
    /// Zeroed field of the given resolution with default parameters
    pub fn new(width: u32, height: u32) -> FireResult<Self> {
        init::create_fire_core(width, height, SimulationParameters::default(), RenderMode::Normal)
    }

    pub fn with_params(width: u32, height: u32, params: SimulationParameters) -> FireResult<Self> {
        init::create_fire_core(width, height, params, RenderMode::Normal)
    }

    pub fn from_options(options: SimulationOptions) -> FireResult<Self> {
        init::create_from_options(options)
    }

    pub fn from_options_json(json: &str) -> FireResult<Self> {
        init::create_from_options_json(json)
    }

    pub fn width(&self) -> u32 { self.buffers.front().width() }

    pub fn height(&self) -> u32 { self.buffers.front().height() }

    /// Completed ticks
    pub fn frame(&self) -> u64 { self.frame }

    /// Both dimensions are powers of two. Informational for hosts that
    /// want mipmapped field textures.
    pub fn supports_mipmaps(&self) -> bool {
        self.width().is_power_of_two() && self.height().is_power_of_two()
    }

    // === Parameters ===

    /// Replace all parameters. Takes effect on the next tick.
    pub fn configure(&mut self, params: SimulationParameters) {
        settings::configure(self, params);
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn set_wind(&mut self, x: f32, y: f32) {
        settings::set_wind(self, x, y);
    }

    pub fn set_colors(&mut self, color1: Color, color2: Color, color3: Color, bias: f32) {
        settings::set_colors(self, color1, color2, color3, bias);
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        settings::set_render_mode(self, mode);
    }

    pub fn render_mode(&self) -> RenderMode {
        self.default_mode
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === Sources ===

    pub fn clear_sources(&mut self) {
        commands::clear_sources(self);
    }

    /// Circular brush in normalized coordinates. `None` channels are kept.
    pub fn paint_source(
        &mut self,
        u: f32,
        v: f32,
        radius: f32,
        density: Option<f32>,
        wind_x: Option<f32>,
        wind_y: Option<f32>,
    ) {
        commands::paint_source(self, &Brush { u, v, radius, density, wind_x, wind_y });
    }

    pub fn paint(&mut self, brush: &Brush) {
        commands::paint_source(self, brush);
    }

    /// Replace the source field wholesale with a caller-built one
    pub fn set_source_field(&mut self, field: &SourceField) -> FireResult<()> {
        commands::set_source_field(self, field)
    }

    /// Byte-level `set_source_field`: `width * height * 4` bytes, RGBA order
    pub fn set_source_data(&mut self, bytes: &[u8]) -> FireResult<()> {
        commands::set_source_data(self, bytes)
    }

    pub fn source_field(&self) -> &SourceField {
        &self.source
    }

    /// Zero the field and the frame counter; sources stay painted
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    // === Stepping ===

    /// Advance one tick of `elapsed` seconds without a render host
    pub fn tick(&mut self, elapsed: f32) {
        let result = step::tick_with_host(self, &mut Headless, elapsed);
        debug_assert!(result.is_ok(), "headless tick failed: {result:?}");
    }

    /// Advance one tick with `host` acquired for its whole duration. On
    /// error nothing observable has changed.
    pub fn tick_with_host<H: RenderHost>(&mut self, host: &mut H, elapsed: f32) -> FireResult<()> {
        step::tick_with_host(self, host, elapsed)
    }

    /// The committed grid
    pub fn current_field(&self) -> &Grid {
        self.buffers.front()
    }

    // === Rendering ===

    /// Colorize into a fresh buffer without touching any state
    pub fn colorize(&self, mode: RenderMode) -> FireResult<ColorBuffer> {
        let mut out = ColorBuffer::new(self.width(), self.height())?;
        colorize::colorize(self.buffers.front(), &self.params, mode, &mut out);
        Ok(out)
    }

    /// Colorize into the internal buffer exposed through `colors_ptr`
    pub fn render(&mut self, mode: RenderMode) -> &[u32] {
        render_extract::render(self, mode)
    }

    pub fn render_default(&mut self) -> &[u32] {
        render_extract::render_default(self)
    }

    // === Raw buffers (for JS) ===

    pub fn field_ptr(&self) -> *const u8 {
        self.buffers.front().cells_ptr()
    }

    pub fn field_len_bytes(&self) -> usize {
        self.buffers.front().byte_len()
    }

    pub fn source_ptr(&self) -> *const u8 {
        self.source.as_bytes().as_ptr()
    }

    pub fn source_len_bytes(&self) -> usize {
        self.source.byte_len()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.colors.as_ptr()
    }

    pub fn colors_len_elements(&self) -> usize {
        self.colors.pixels.len()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.colors.len_bytes()
    }

    pub(crate) fn abi_layout_data(&self) -> AbiLayoutData {
        AbiLayoutData {
            field_ptr: self.field_ptr(),
            field_len_bytes: self.field_len_bytes(),
            source_ptr: self.source_ptr(),
            source_len_bytes: self.source_len_bytes(),
            colors_ptr: self.colors_ptr(),
            colors_len_elements: self.colors_len_elements(),
            colors_len_bytes: self.colors_len_bytes(),
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
