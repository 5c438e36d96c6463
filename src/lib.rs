//! Ember Engine - stylized 2-D fire field simulation in WASM
//!
//! Architecture:
//! - core/        - channel codec, packed grid
//! - domain/      - parameters, per-tick coefficients
//! - systems/     - source field, passes, colorizer
//! - simulation/  - FireCore orchestration, host guard, wasm facade

pub mod core;
pub mod domain;
pub mod error;
pub mod logging;
pub mod simulation;
pub mod systems;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Thread pool for the row-parallel passes
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    logging::install();
    log::info!("ember engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::grid::{Cell, CellState, Grid};
pub use domain::params::{Color, SimulationOptions, SimulationParameters};
pub use error::{FireError, FireResult};
pub use simulation::{AbiLayout, FireCore, FireSim, Headless, HostGuard, PerfStats, RenderHost};
pub use systems::colorize::{ColorBuffer, RenderMode};
pub use systems::passes::PassKind;
pub use systems::source_field::{Brush, SourceCell, SourceField};
