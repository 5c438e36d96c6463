//! Error type shared by the core and the wasm facade.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FireError {
    #[error("invalid field resolution {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("failed to allocate {bytes} bytes of field storage")]
    Allocation { bytes: usize },

    #[error("source field has {actual} bytes, expected {expected}")]
    SourceFieldShape { expected: usize, actual: usize },

    #[error("invalid simulation options: {0}")]
    Config(#[from] serde_json::Error),

    #[error("render host failure: {0}")]
    Host(String),
}

pub type FireResult<T> = Result<T, FireError>;
