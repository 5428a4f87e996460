//! Fractal (octave-summed) height and pseudo-3D field.
//!
//! Each octave samples at `coord / scale * frequency + seed`, starting at
//! [`INITIAL_FREQUENCY`]; amplitude decays by persistence and frequency grows
//! by lacunarity. The accumulated sum maps linearly to world height via
//! `height_range * sum + base_height`.

use super::NoiseField;

/// Frequency of the first octave.
pub const INITIAL_FREQUENCY: f32 = 1.5;

/// Octave whose raw value feeds the `octave1` debug channel.
const DEBUG_OCTAVE: u32 = 1;

impl NoiseField {
  /// Surface height of the layered 2D mode at world `(x, z)`.
  pub fn layered_height(&self, x: f32, z: f32) -> f32 {
    self.layered_height_with_octave(x, z).0
  }

  /// Layered height plus the raw sample of the second octave (0 if the
  /// field has a single octave).
  pub(super) fn layered_height_with_octave(&self, x: f32, z: f32) -> (f32, f32) {
    let mut amplitude = 1.0f32;
    let mut frequency = INITIAL_FREQUENCY;
    let mut sum = 0.0f32;
    let mut octave1 = 0.0f32;

    for octave in 0..self.noise.octaves {
      let sx = x / self.noise.scale * frequency + self.seed;
      let sz = z / self.noise.scale * frequency + self.seed;

      let n = self.perlin01(sx, sz).clamp(0.0, 1.0);
      sum += n * amplitude;

      if octave == DEBUG_OCTAVE {
        octave1 = n;
      }

      amplitude *= self.noise.persistence;
      frequency *= self.noise.lacunarity;
    }

    (self.map_to_height(sum), octave1)
  }

  /// Pseudo-3D fractal value at world `(x, y, z)`.
  ///
  /// Each octave averages 2D samples over the XY, XZ and YZ planes. The
  /// result is used directly as the field value.
  pub fn field_3d(&self, x: f32, y: f32, z: f32) -> f32 {
    let mut amplitude = 1.0f32;
    let mut frequency = INITIAL_FREQUENCY;
    let mut sum = 0.0f32;

    for _ in 0..self.noise.octaves {
      let sx = x / self.noise.scale * frequency + self.seed;
      let sy = y / self.noise.scale * frequency + self.seed;
      let sz = z / self.noise.scale * frequency + self.seed;

      let xy = self.perlin01(sx, sy);
      let xz = self.perlin01(sx, sz);
      let yz = self.perlin01(sy, sz);
      sum += (xy + xz + yz) / 3.0 * amplitude;

      amplitude *= self.noise.persistence;
      frequency *= self.noise.lacunarity;
    }

    self.map_to_height(sum)
  }

  #[inline(always)]
  fn map_to_height(&self, sum: f32) -> f32 {
    self.terrain.height_range * sum + self.terrain.base_height
  }
}
