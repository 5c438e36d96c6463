use log::{trace, warn};

use crate::domain::coefficients::{TickCoefficients, RELAXATION_SWEEPS};
use crate::error::FireResult;
use crate::systems::passes::Pass;
use crate::systems::source_field::SourceField;

use super::host::{HostGuard, RenderHost};
use super::{FireCore, PassTimer};

/// Pass order of one tick: source, relaxation sweeps, one forcing sweep, drift.
pub(crate) fn tick_passes<'a>(
    source: &'a SourceField,
    coeffs: &TickCoefficients,
) -> impl Iterator<Item = Pass<'a>> {
    let relax = Pass::Diffuse(coeffs.diffuse.relaxation_only());
    std::iter::once(Pass::Source(source))
        .chain(std::iter::repeat(relax).take(RELAXATION_SWEEPS))
        .chain([Pass::Diffuse(coeffs.diffuse), Pass::Drift(coeffs.drift)])
}

/// Advance one tick. Either every pass commits, or the committed grid and
/// frame counter are left exactly as they were.
pub(super) fn tick_with_host<H: RenderHost>(
    sim: &mut FireCore,
    host: &mut H,
    elapsed: f32,
) -> FireResult<()> {
    let coeffs = TickCoefficients::from_params(&sim.params, elapsed, sim.height());
    let perf_on = sim.perf_enabled;
    // Staged until commit so a rolled-back tick leaves the last snapshot intact
    let mut stats = sim.perf_stats.clone();
    if perf_on {
        stats.reset();
    }
    let step_start = perf_on.then(PassTimer::start);

    let mut guard = HostGuard::acquire(host)?;
    sim.buffers.checkpoint();

    for pass in tick_passes(&sim.source, &coeffs) {
        if let Err(err) = guard.before_pass(pass.kind()) {
            sim.buffers.rollback();
            warn!("tick {} rolled back before {:?} pass: {}", sim.frame, pass.kind(), err);
            return Err(err);
        }

        let t0 = perf_on.then(PassTimer::start);
        sim.buffers.apply(|front, back| pass.apply(front, back));
        if let Some(t0) = t0 {
            stats.record_pass(pass.kind(), t0.elapsed_ms());
        }
    }
    drop(guard);

    sim.frame += 1;
    trace!("tick {} dt={:.4} air_speed={:.4}", sim.frame, coeffs.dt, coeffs.drift.air_speed);

    if let Some(t0) = step_start {
        stats.step_ms = t0.elapsed_ms();
        stats.dt = coeffs.dt;
        stats.ticks = stats.ticks.wrapping_add(1);
        stats.grid_size = sim.buffers.front().size() as u32;
        stats.memory_bytes = (sim.buffers.memory_bytes() + sim.source.byte_len() + sim.colors.len_bytes()) as u32;
        sim.perf_stats = stats;
    }
    Ok(())
}
