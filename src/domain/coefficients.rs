//! Per-tick pass coefficients derived from the parameters and elapsed time.

use super::params::SimulationParameters;

/// Longest frame time a single tick will integrate, in seconds.
pub const MAX_ELAPSED: f32 = 0.1;

/// Relaxation sweeps run before the forcing sweep in every tick.
pub const RELAXATION_SWEEPS: usize = 5;

/// Density removed by every diffusion sweep.
pub const DENSITY_LEAK: f32 = 0.001;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiffuseCoefficients {
    pub diffuse: f32,
    pub viscosity: f32,
    pub expansion: f32,
    pub swirl: f32,
    pub drag: f32,
    pub burn_rate: f32,
}

impl DiffuseCoefficients {
    /// Same stencil weights with expansion, swirl, drag and burn neutralized.
    pub fn relaxation_only(self) -> Self {
        Self {
            expansion: 1.0,
            swirl: 1.0,
            drag: 1.0,
            burn_rate: 0.0,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftCoefficients {
    pub air_speed: f32,
    pub wind: (f32, f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickCoefficients {
    pub dt: f32,
    pub diffuse: DiffuseCoefficients,
    pub drift: DriftCoefficients,
}

impl TickCoefficients {
    pub fn from_params(params: &SimulationParameters, elapsed: f32, height: u32) -> Self {
        let dt = clamp_elapsed(elapsed) * params.speed * 0.1;
        Self {
            dt,
            diffuse: DiffuseCoefficients {
                diffuse: dt * 0.05 * params.diffuse,
                viscosity: dt * 0.05 * params.viscosity,
                expansion: (-params.expansion).exp(),
                swirl: (-0.1 * params.swirl).exp(),
                drag: (-0.1 * params.drag).exp(),
                burn_rate: params.burn_rate * dt * 0.01,
            },
            drift: DriftCoefficients {
                air_speed: dt * params.air_speed * 0.001 * height as f32,
                wind: params.wind_vector,
            },
        }
    }
}

/// Frame hitches are capped; negative and NaN elapsed times count as zero.
#[inline]
pub fn clamp_elapsed(elapsed: f32) -> f32 {
    if elapsed.is_nan() {
        return 0.0;
    }
    elapsed.clamp(0.0, MAX_ELAPSED)
}
