use crate::error::FireResult;
use crate::systems::source_field::{Brush, SourceField};

use super::FireCore;

pub(super) fn clear_sources(sim: &mut FireCore) {
    sim.source.clear();
}

pub(super) fn paint_source(sim: &mut FireCore, brush: &Brush) {
    sim.source.paint(brush);
}

pub(super) fn set_source_field(sim: &mut FireCore, field: &SourceField) -> FireResult<()> {
    sim.source.copy_from(field)
}

pub(super) fn set_source_data(sim: &mut FireCore, bytes: &[u8]) -> FireResult<()> {
    sim.source.set_bytes(bytes)
}

/// Drop the field state and start over at frame 0. Sources are kept.
pub(super) fn reset(sim: &mut FireCore) {
    sim.buffers.clear();
    sim.frame = 0;
}
