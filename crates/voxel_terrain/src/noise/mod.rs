//! Scalar field sampling from layered coherent noise.
//!
//! [`NoiseField`] is a pure function of the generation config and a world
//! coordinate. Every mode is built from one primitive: 2D Perlin noise
//! remapped to `[0, 1]`.
//!
//! # Modes
//!
//! ```text
//! ┌───────────────┬──────────────────────────────┬───────────────────────┐
//! │ Mode          │ Column value                 │ Field value at y      │
//! ├───────────────┼──────────────────────────────┼───────────────────────┤
//! │ LayeredHeight │ fractal 2D height            │ height - y            │
//! │ Spline        │ C * base * erosion * (1+PV)  │ height - y            │
//! │ Field3d       │ (none)                       │ fractal "3D" value    │
//! └───────────────┴──────────────────────────────┴───────────────────────┘
//! ```
//!
//! Positive field values are solid. A sample is inside the terrain when it
//! exceeds the iso level.
//!
//! The world seed only shifts sample coordinates; the permutation table is
//! fixed, so two fields built from equal configs agree bit for bit.

mod layered;
mod maps;
mod spline;

#[cfg(test)]
#[path = "noise_test.rs"]
mod noise_test;

use noise::{NoiseFn, Perlin};

pub use maps::{NoiseChannel, NoiseMaps};
pub use spline::{smoothstep01, SplineSample};

use crate::config::{GenerationConfig, NoiseMode, NoiseParams, TerrainShape};

/// Permutation seed of the underlying gradient noise. World seeds never
/// reach the permutation table.
const PERMUTATION_SEED: u32 = 0;

/// Per-column result of a height mode, with debug channels.
///
/// Channels a mode does not produce are 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColumnSample {
  /// Terrain surface height at this column.
  pub height: f32,
  pub continentalness: f32,
  pub erosion: f32,
  pub peaks_valleys: f32,
  /// 1.0 where peaks and valleys are applied, else 0.0.
  pub gate: f32,
  /// Raw noise value of the second octave (layered mode).
  pub octave1: f32,
}

/// Deterministic terrain scalar field.
#[derive(Clone, Debug)]
pub struct NoiseField {
  perlin: Perlin,
  seed: f32,
  noise: NoiseParams,
  terrain: TerrainShape,
  mode: NoiseMode,
}

impl NoiseField {
  pub fn new(config: &GenerationConfig) -> Self {
    Self {
      perlin: Perlin::new(PERMUTATION_SEED),
      seed: config.seed() as f32,
      noise: *config.noise(),
      terrain: *config.terrain(),
      mode: config.mode(),
    }
  }

  #[inline]
  pub fn mode(&self) -> NoiseMode {
    self.mode
  }

  /// True when the field is a height field (one surface height per column).
  #[inline]
  pub fn is_height_mode(&self) -> bool {
    !matches!(self.mode, NoiseMode::Field3d)
  }

  /// 2D Perlin noise remapped from `[-1, 1]` to `[0, 1]`.
  ///
  /// Not clamped; callers clamp where they need a strict range.
  #[inline]
  pub fn perlin01(&self, x: f32, z: f32) -> f32 {
    let n = self.perlin.get([x as f64, z as f64]) as f32;
    n * 0.5 + 0.5
  }

  /// Evaluate the column at world `(x, z)` for the active height mode.
  ///
  /// In [`NoiseMode::Field3d`] there is no surface height and the returned
  /// sample is all zeros.
  pub fn column(&self, x: f32, z: f32) -> ColumnSample {
    match self.mode {
      NoiseMode::LayeredHeight => {
        let (height, octave1) = self.layered_height_with_octave(x, z);
        ColumnSample {
          height,
          octave1,
          ..Default::default()
        }
      }
      NoiseMode::Spline => {
        let s = self.spline(x, z);
        ColumnSample {
          height: s.height,
          continentalness: s.continentalness,
          erosion: s.erosion,
          peaks_valleys: s.peaks_valleys,
          gate: s.gate,
          octave1: 0.0,
        }
      }
      NoiseMode::Field3d => ColumnSample::default(),
    }
  }

  /// Field value at world `(x, y, z)`. Positive is solid.
  pub fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
    match self.mode {
      NoiseMode::Field3d => self.field_3d(x, y, z),
      _ => Self::height_to_field(self.column(x, z).height, y),
    }
  }

  /// Field value for a height-mode column at height `y`.
  #[inline(always)]
  pub fn height_to_field(height: f32, y: f32) -> f32 {
    height - y
  }
}
