//! Simulation parameters and construction options (JSON, camelCase).
//!
//! Parameters are never validated: every value is accepted as-is and
//! clamped where it is used. Missing JSON fields take the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::FireResult;

/// Linear RGB color with components in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }

    pub fn to_hex(self) -> u32 {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (q(self.r) << 16) | (q(self.g) << 8) | q(self.b)
    }

    /// Parse `#rrggbb` / `rrggbb`
    pub fn parse(s: &str) -> Option<Self> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_hex)
    }

    #[inline]
    pub fn mix(self, other: Color, t: f32) -> Color {
        let s = 1.0 - t;
        Color {
            r: self.r * s + other.r * t,
            g: self.g * s + other.g * t,
            b: self.b * s + other.b * t,
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value).ok_or_else(|| format!("invalid color {value:?}, expected #rrggbb"))
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        format!("#{:06x}", c.to_hex())
    }
}

/// Physical tunables, read fresh at every tick
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationParameters {
    pub diffuse: f32,
    pub viscosity: f32,
    pub expansion: f32,
    pub swirl: f32,
    pub burn_rate: f32,
    pub drag: f32,
    pub air_speed: f32,
    pub wind_vector: (f32, f32),
    pub speed: f32,
    pub color1: Color,
    pub color2: Color,
    pub color3: Color,
    pub color_bias: f32,
    /// Reserved; accepted and stored, no effect on the pipeline.
    pub mass_conservation: bool,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            diffuse: 1.33,
            viscosity: 0.25,
            expansion: -0.25,
            swirl: 50.0,
            burn_rate: 0.3,
            drag: 0.35,
            air_speed: 6.0,
            wind_vector: (0.0, 0.75),
            speed: 500.0,
            color1: Color::from_hex(0xFFFFFF),
            color2: Color::from_hex(0xFFA000),
            color3: Color::from_hex(0x000000),
            color_bias: 0.8,
            mass_conservation: false,
        }
    }
}

impl SimulationParameters {
    /// All physical tunables zeroed: no diffusion, no forcing, no transport.
    pub fn still() -> Self {
        Self {
            diffuse: 0.0,
            viscosity: 0.0,
            expansion: 0.0,
            swirl: 0.0,
            burn_rate: 0.0,
            drag: 0.0,
            air_speed: 0.0,
            wind_vector: (0.0, 0.0),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> FireResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> FireResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Construction-time settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationOptions {
    pub texture_width: u32,
    pub texture_height: u32,
    /// Selects the debug colorizer as the default render mode
    pub debug: bool,
    pub params: SimulationParameters,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            texture_width: 512,
            texture_height: 512,
            debug: false,
            params: SimulationParameters::default(),
        }
    }
}

impl SimulationOptions {
    pub fn from_json(json: &str) -> FireResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_takes_defaults() {
        let params = SimulationParameters::from_json("{}").unwrap();
        assert_eq!(params, SimulationParameters::default());
        let opts = SimulationOptions::from_json("{}").unwrap();
        assert_eq!(opts.texture_width, 512);
        assert_eq!(opts.texture_height, 512);
        assert!(!opts.debug);
    }

    #[test]
    fn camel_case_fields_and_hex_colors() {
        let params = SimulationParameters::from_json(
            r##"{"burnRate": 0.5, "windVector": [0.1, -0.2], "color2": "#ff0000", "massConservation": true}"##,
        )
        .unwrap();
        assert_eq!(params.burn_rate, 0.5);
        assert_eq!(params.wind_vector, (0.1, -0.2));
        assert_eq!(params.color2, Color::new(1.0, 0.0, 0.0));
        assert!(params.mass_conservation);
        assert_eq!(params.diffuse, 1.33);
    }

    #[test]
    fn colors_serialize_as_hex() {
        let json = SimulationParameters::default().to_json().unwrap();
        assert!(json.contains(r##""color2":"#ffa000""##));
        let back = SimulationParameters::from_json(&json).unwrap();
        assert_eq!(back.color2.to_hex(), 0xFFA000);
    }

    #[test]
    fn bad_color_is_a_config_error() {
        assert!(SimulationParameters::from_json(r#"{"color1": "orange"}"#).is_err());
        assert!(Color::parse("#12345").is_none());
    }
}
