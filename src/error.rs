// src/error.rs
//
// Errors raised when the honeycomb is configured with values it cannot draw.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HoneycombError {
    #[error("hexagon radius must be finite and non-negative, got {0}")]
    InvalidRadius(f32),

    #[error("viewport must have a positive finite size, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("palette needs exactly 7 colors, got {0}")]
    InvalidPalette(usize),

    #[error("'{0}' is not a #RRGGBB color")]
    InvalidColor(String),

    #[error("slot ranks must be a permutation of 0..7, got {0:?}")]
    InvalidRanks([usize; 7]),

    #[error("tick interval must be at least 1 ms")]
    InvalidTickInterval,

    #[error("speed coefficient must be at least 1")]
    InvalidSpeed,
}

pub type Result<T> = std::result::Result<T, HoneycombError>;
