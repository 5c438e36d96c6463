//! Core data: the channel codec and the packed grid it fills.

pub mod codec;
pub mod grid;

pub use grid::{Cell, CellState, Grid};
