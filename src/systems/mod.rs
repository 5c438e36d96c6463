pub mod colorize;
pub mod passes;
pub mod source_field;

pub use colorize::{colorize, ColorBuffer, RenderMode};
pub use passes::{Pass, PassKind};
pub use source_field::{Brush, SourceCell, SourceField};
