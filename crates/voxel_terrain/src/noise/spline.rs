//! Continentalness / erosion / peaks-and-valleys composite height.
//!
//! ```text
//! C   = smoothstep(perlin(x * 0.01, z * 0.01))       landmass
//! E   = clamp01(perlin(x * 0.02, z * 0.02))          roughness
//! PV  = sin(perlin(warped * 0.05) * PI)              local relief
//! gate = C > 0.5 && E < 0.4
//!
//! height = C * base * lerp(1, 0.3, E) * (1 + (PV - 0.5) * gate)
//! ```

use std::f32::consts::PI;

use super::NoiseField;

pub const CONTINENTALNESS_SCALE: f32 = 0.01;
pub const EROSION_SCALE: f32 = 0.02;
pub const PEAKS_VALLEYS_SCALE: f32 = 0.05;
pub const WARP_FREQUENCY: f32 = 0.1;
pub const WARP_STRENGTH: f32 = 30.0;
/// Decorrelates the Z warp channel from the X warp channel.
pub const WARP_Z_OFFSET: f32 = 1000.0;

const GATE_CONTINENTALNESS: f32 = 0.5;
const GATE_EROSION: f32 = 0.4;
/// Erosion effect at full erosion.
const ERODED_SCALE: f32 = 0.3;

/// Spline mode intermediate values for one column.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SplineSample {
  pub continentalness: f32,
  pub erosion: f32,
  /// `lerp(1.0, 0.3, erosion)`.
  pub erosion_effect: f32,
  pub peaks_valleys: f32,
  /// Exactly 0.0 or 1.0.
  pub gate: f32,
  pub height: f32,
}

/// Hermite smoothstep on `[0, 1]`: `3t² - 2t³` with `t` clamped.
#[inline]
pub fn smoothstep01(t: f32) -> f32 {
  let t = t.clamp(0.0, 1.0);
  t * t * (3.0 - 2.0 * t)
}

#[inline(always)]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
  a + (b - a) * t
}

impl NoiseField {
  /// Evaluate the composite spline height at world `(x, z)`.
  pub fn spline(&self, x: f32, z: f32) -> SplineSample {
    let seed = self.seed;

    let continentalness =
      smoothstep01(self.perlin01(x * CONTINENTALNESS_SCALE + seed, z * CONTINENTALNESS_SCALE + seed));

    let erosion = self
      .perlin01(x * EROSION_SCALE + seed, z * EROSION_SCALE + seed)
      .clamp(0.0, 1.0);
    let erosion_effect = lerp(1.0, ERODED_SCALE, erosion);

    let warp_x = self.perlin01(x * WARP_FREQUENCY + seed, z * WARP_FREQUENCY + seed) * WARP_STRENGTH;
    let warp_z = self.perlin01(
      x * WARP_FREQUENCY + WARP_Z_OFFSET + seed,
      z * WARP_FREQUENCY + WARP_Z_OFFSET + seed,
    ) * WARP_STRENGTH;

    let pv = self.perlin01(
      (x + warp_x) * PEAKS_VALLEYS_SCALE + seed,
      (z + warp_z) * PEAKS_VALLEYS_SCALE + seed,
    );
    let peaks_valleys = (pv * PI).sin();

    let gate = if continentalness > GATE_CONTINENTALNESS && erosion < GATE_EROSION {
      1.0
    } else {
      0.0
    };

    let height = continentalness
      * self.terrain.base_height
      * erosion_effect
      * (1.0 + (peaks_valleys - 0.5) * gate);

    SplineSample {
      continentalness,
      erosion,
      erosion_effect,
      peaks_valleys,
      gate,
      height,
    }
  }
}
