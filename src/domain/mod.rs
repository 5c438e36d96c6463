pub mod coefficients;
pub mod params;

pub use coefficients::{DiffuseCoefficients, DriftCoefficients, TickCoefficients};
pub use params::{Color, SimulationOptions, SimulationParameters};
