use wasm_bindgen::prelude::*;

use crate::domain::params::{Color, SimulationParameters};
use crate::error::FireError;
use crate::systems::colorize::RenderMode;

use super::perf_stats::PerfStats;
use super::FireCore;

fn js_err(err: FireError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct AbiLayout {
    field_ptr: u32,
    field_len_bytes: u32,
    source_ptr: u32,
    source_len_bytes: u32,
    colors_ptr: u32,
    colors_len_elements: u32,
    colors_len_bytes: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn field_ptr(&self) -> u32 { self.field_ptr }
    #[wasm_bindgen(getter)]
    pub fn field_len_bytes(&self) -> u32 { self.field_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn source_ptr(&self) -> u32 { self.source_ptr }
    #[wasm_bindgen(getter)]
    pub fn source_len_bytes(&self) -> u32 { self.source_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn colors_ptr(&self) -> u32 { self.colors_ptr }
    #[wasm_bindgen(getter)]
    pub fn colors_len_elements(&self) -> u32 { self.colors_len_elements }
    #[wasm_bindgen(getter)]
    pub fn colors_len_bytes(&self) -> u32 { self.colors_len_bytes }
}

#[wasm_bindgen]
pub struct FireSim {
    core: FireCore,
}

#[wasm_bindgen]
impl FireSim {
    /// Create a zeroed field with default parameters
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<FireSim, JsValue> {
        Ok(Self {
            core: FireCore::new(width, height).map_err(js_err)?,
        })
    }

    /// Create from a JSON options object (`textureWidth`, `textureHeight`,
    /// `debug`, `params`)
    #[wasm_bindgen(js_name = fromOptions)]
    pub fn from_options(json: &str) -> Result<FireSim, JsValue> {
        Ok(Self {
            core: FireCore::from_options_json(json).map_err(js_err)?,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    pub fn supports_mipmaps(&self) -> bool {
        self.core.supports_mipmaps()
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === PARAMETERS ===

    /// Replace all parameters from JSON; missing fields take defaults
    pub fn configure(&mut self, json: &str) -> Result<(), JsValue> {
        let params = SimulationParameters::from_json(json).map_err(js_err)?;
        self.core.configure(params);
        Ok(())
    }

    pub fn params_json(&self) -> Result<String, JsValue> {
        self.core.params().to_json().map_err(js_err)
    }

    pub fn set_diffuse(&mut self, value: f32) {
        self.update(|p| p.diffuse = value);
    }

    pub fn set_viscosity(&mut self, value: f32) {
        self.update(|p| p.viscosity = value);
    }

    pub fn set_expansion(&mut self, value: f32) {
        self.update(|p| p.expansion = value);
    }

    pub fn set_swirl(&mut self, value: f32) {
        self.update(|p| p.swirl = value);
    }

    pub fn set_burn_rate(&mut self, value: f32) {
        self.update(|p| p.burn_rate = value);
    }

    pub fn set_drag(&mut self, value: f32) {
        self.update(|p| p.drag = value);
    }

    pub fn set_air_speed(&mut self, value: f32) {
        self.update(|p| p.air_speed = value);
    }

    pub fn set_speed(&mut self, value: f32) {
        self.update(|p| p.speed = value);
    }

    pub fn set_wind(&mut self, x: f32, y: f32) {
        self.core.set_wind(x, y);
    }

    pub fn set_mass_conservation(&mut self, enabled: bool) {
        self.update(|p| p.mass_conservation = enabled);
    }

    /// Gradient stops as `0xRRGGBB`
    pub fn set_colors(&mut self, color1: u32, color2: u32, color3: u32, bias: f32) {
        self.core.set_colors(
            Color::from_hex(color1),
            Color::from_hex(color2),
            Color::from_hex(color3),
            bias,
        );
    }

    pub fn set_debug(&mut self, enabled: bool) {
        let mode = if enabled { RenderMode::Debug } else { RenderMode::Normal };
        self.core.set_render_mode(mode);
    }

    // === SOURCES ===

    pub fn clear_sources(&mut self) {
        self.core.clear_sources();
    }

    /// Circular brush in normalized coordinates; omitted channels are kept
    pub fn paint_source(
        &mut self,
        u: f32,
        v: f32,
        radius: f32,
        density: Option<f32>,
        wind_x: Option<f32>,
        wind_y: Option<f32>,
    ) {
        self.core.paint_source(u, v, radius, density, wind_x, wind_y);
    }

    /// Replace the source field with `width * height * 4` RGBA bytes
    pub fn set_source_data(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.core.set_source_data(bytes).map_err(js_err)
    }

    /// Zero the field and frame counter
    pub fn reset(&mut self) {
        self.core.reset();
    }

    // === STEPPING / RENDERING ===

    pub fn tick(&mut self, elapsed_seconds: f32) {
        self.core.tick(elapsed_seconds);
    }

    /// Colorize with the configured mode; returns pointer to ABGR pixels
    pub fn render(&mut self) -> *const u32 {
        self.core.render_default().as_ptr()
    }

    pub fn render_debug(&mut self) -> *const u32 {
        self.core.render(RenderMode::Debug).as_ptr()
    }

    /// Pointer to the committed field (RGBA = temperature, vx, vy, density)
    pub fn field_ptr(&self) -> *const u8 {
        self.core.field_ptr()
    }

    pub fn field_len_bytes(&self) -> usize {
        self.core.field_len_bytes()
    }

    pub fn source_ptr(&self) -> *const u8 {
        self.core.source_ptr()
    }

    pub fn source_len_bytes(&self) -> usize {
        self.core.source_len_bytes()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len_elements(&self) -> usize {
        self.core.colors_len_elements()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.core.colors_len_bytes()
    }

    pub fn abi_layout(&self) -> AbiLayout {
        let data = self.core.abi_layout_data();
        AbiLayout {
            field_ptr: data.field_ptr as u32,
            field_len_bytes: data.field_len_bytes as u32,
            source_ptr: data.source_ptr as u32,
            source_len_bytes: data.source_len_bytes as u32,
            colors_ptr: data.colors_ptr as u32,
            colors_len_elements: data.colors_len_elements as u32,
            colors_len_bytes: data.colors_len_bytes as u32,
        }
    }
}

impl FireSim {
    fn update(&mut self, edit: impl FnOnce(&mut SimulationParameters)) {
        let mut params = self.core.params().clone();
        edit(&mut params);
        self.core.configure(params);
    }

    pub fn core(&self) -> &FireCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut FireCore {
        &mut self.core
    }
}
