//! Grid passes. Each pass reads the committed front grid (and the source
//! field where relevant) and writes every cell of the back grid; cells
//! never observe the grid being written.

use crate::core::grid::{Cell, Grid};
use crate::domain::coefficients::{DiffuseCoefficients, DriftCoefficients};
use crate::systems::source_field::SourceField;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

mod diffuse;
mod drift;
mod source;

pub use diffuse::diffuse_pass;
pub use drift::drift_pass;
pub use source::source_pass;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PassKind {
    Source,
    Diffuse,
    Drift,
}

/// One enum-dispatched pass invocation with its coefficients
#[derive(Clone, Copy)]
pub enum Pass<'a> {
    Source(&'a SourceField),
    Diffuse(DiffuseCoefficients),
    Drift(DriftCoefficients),
}

impl Pass<'_> {
    pub fn kind(&self) -> PassKind {
        match self {
            Pass::Source(_) => PassKind::Source,
            Pass::Diffuse(_) => PassKind::Diffuse,
            Pass::Drift(_) => PassKind::Drift,
        }
    }

    pub fn apply(&self, front: &Grid, back: &mut Grid) {
        match *self {
            Pass::Source(field) => source_pass(front, field, back),
            Pass::Diffuse(coeffs) => diffuse_pass(front, &coeffs, back),
            Pass::Drift(coeffs) => drift_pass(front, &coeffs, back),
        }
    }
}

/// Fill `out` one row at a time. Rows run on the rayon pool when the
/// `parallel` feature is on; the result is identical either way.
pub(crate) fn map_rows<F>(out: &mut Grid, row_fn: F)
where
    F: Fn(u32, &mut [Cell]) + Send + Sync,
{
    let width = out.width() as usize;
    map_rows_into(&mut out.cells, width, row_fn);
}

pub(crate) fn map_rows_into<T, F>(buf: &mut [T], width: usize, row_fn: F)
where
    T: Send,
    F: Fn(u32, &mut [T]) + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        buf.par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| row_fn(y as u32, row));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (y, row) in buf.chunks_mut(width).enumerate() {
            row_fn(y as u32, row);
        }
    }
}
