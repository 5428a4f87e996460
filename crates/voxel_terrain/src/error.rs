//! Error types for configuration and grid access.

use thiserror::Error;

/// Rejected generation configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
  #[error("chunk width must be at least 1")]
  ZeroWidth,

  #[error("chunk height must be at least 1")]
  ZeroHeight,

  #[error("octave count must be at least 1")]
  ZeroOctaves,

  #[error("noise scale must be finite and non-zero, got {0}")]
  InvalidScale(f32),

  #[error("{field} must be finite, got {value}")]
  NonFinite { field: &'static str, value: f32 },
}

/// Invalid access to a chunk scalar field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
  #[error("cube at {origin:?} lies outside a {width}x{height}x{width} grid")]
  CubeOutOfBounds {
    origin: [usize; 3],
    width: usize,
    height: usize,
  },
}
