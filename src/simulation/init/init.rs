use log::debug;

use crate::domain::params::{SimulationOptions, SimulationParameters};
use crate::error::FireResult;
use crate::systems::colorize::{ColorBuffer, RenderMode};
use crate::systems::source_field::SourceField;

use super::buffers::FieldBuffers;
use super::perf_stats::PerfStats;
use super::FireCore;

/// Allocate every buffer up front; any failure leaves nothing behind.
pub(super) fn create_fire_core(
    width: u32,
    height: u32,
    params: SimulationParameters,
    default_mode: RenderMode,
) -> FireResult<FireCore> {
    let sim = FireCore {
        params,
        buffers: FieldBuffers::new(width, height)?,
        source: SourceField::new(width, height)?,
        colors: ColorBuffer::new(width, height)?,
        default_mode,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };
    debug!("fire field {}x{} allocated", width, height);
    Ok(sim)
}

pub(super) fn create_from_options(options: SimulationOptions) -> FireResult<FireCore> {
    let mode = if options.debug { RenderMode::Debug } else { RenderMode::Normal };
    create_fire_core(options.texture_width, options.texture_height, options.params, mode)
}

pub(super) fn create_from_options_json(json: &str) -> FireResult<FireCore> {
    let options = SimulationOptions::from_json(json)?;
    debug!(
        "options loaded: {}x{} debug={}",
        options.texture_width, options.texture_height, options.debug
    );
    create_from_options(options)
}
