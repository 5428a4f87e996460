use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::config::GenerationConfig;

fn field(mode: NoiseMode, seed: i32) -> NoiseField {
  let config = GenerationConfig::builder()
    .with_mode(mode)
    .with_seed(seed)
    .build()
    .unwrap();
  NoiseField::new(&config)
}

const MODES: [NoiseMode; 3] = [NoiseMode::LayeredHeight, NoiseMode::Field3d, NoiseMode::Spline];

#[test]
fn test_perlin01_is_half_on_lattice() {
  let f = field(NoiseMode::LayeredHeight, 0);
  for (x, z) in [(0.0, 0.0), (3.0, 7.0), (-12.0, 5.0)] {
    assert_eq!(f.perlin01(x, z), 0.5, "lattice point ({}, {})", x, z);
  }
}

#[test]
fn test_layered_height_at_origin() {
  // Every octave lands on the lattice, so each sample is exactly 0.5.
  let f = field(NoiseMode::LayeredHeight, 0);
  let sum = 0.5 * (1.0 + 0.3 + 0.09 + 0.027);
  let expected = 12.0 * sum + 16.0;
  let column = f.column(0.0, 0.0);
  assert!((column.height - expected).abs() < 1e-4, "got {}", column.height);
  assert_eq!(column.octave1, 0.5);
  assert_eq!(column.continentalness, 0.0);
  assert_eq!(column.gate, 0.0);
}

#[test]
fn test_field_3d_at_origin() {
  let f = field(NoiseMode::Field3d, 0);
  let expected = 12.0 * 0.5 * (1.0 + 0.3 + 0.09 + 0.027) + 16.0;
  assert!((f.sample(0.0, 0.0, 0.0) - expected).abs() < 1e-4);
  assert_eq!(f.column(0.0, 0.0), ColumnSample::default());
}

#[test]
fn test_spline_at_origin() {
  let f = field(NoiseMode::Spline, 0);
  let s = f.spline(0.0, 0.0);
  assert_eq!(s.continentalness, 0.5);
  assert_eq!(s.erosion, 0.5);
  assert!((s.erosion_effect - 0.65).abs() < 1e-6);
  // Continentalness must exceed 0.5 strictly to open the gate.
  assert_eq!(s.gate, 0.0);
  assert!((s.height - 0.5 * 16.0 * 0.65).abs() < 1e-5);
}

#[test]
fn test_smoothstep01() {
  assert_eq!(smoothstep01(0.0), 0.0);
  assert_eq!(smoothstep01(1.0), 1.0);
  assert_eq!(smoothstep01(0.5), 0.5);
  assert_eq!(smoothstep01(-3.0), 0.0);
  assert_eq!(smoothstep01(7.0), 1.0);
  assert!(smoothstep01(0.25) < 0.25);
}

#[test]
fn test_sampling_is_deterministic() {
  let mut rng = StdRng::seed_from_u64(0x7e44a1);
  for mode in MODES {
    for _ in 0..64 {
      let seed = rng.random_range(-1000..1000);
      let (a, b) = (field(mode, seed), field(mode, seed));
      let x = rng.random_range(-500.0..500.0f32);
      let y = rng.random_range(0.0..64.0f32);
      let z = rng.random_range(-500.0..500.0f32);
      assert_eq!(
        a.sample(x, y, z).to_bits(),
        b.sample(x, y, z).to_bits(),
        "{:?} seed {} at ({}, {}, {})",
        mode,
        seed,
        x,
        y,
        z
      );
      assert_eq!(a.column(x, z), b.column(x, z));
    }
  }
}

#[test]
fn test_height_modes_subtract_y() {
  let mut rng = StdRng::seed_from_u64(42);
  for mode in [NoiseMode::LayeredHeight, NoiseMode::Spline] {
    let f = field(mode, 3);
    assert!(f.is_height_mode());
    for _ in 0..32 {
      let x = rng.random_range(-100..100) as f32;
      let z = rng.random_range(-100..100) as f32;
      let y = rng.random_range(0..32) as f32;
      let height = f.column(x, z).height;
      assert_eq!(f.sample(x, y, z), height - y);
    }
  }
  assert!(!field(NoiseMode::Field3d, 3).is_height_mode());
}

#[test]
fn test_spline_gate_is_binary() {
  let f = field(NoiseMode::Spline, 11);
  let mut rng = StdRng::seed_from_u64(7);
  for _ in 0..256 {
    let x = rng.random_range(-2000..2000) as f32;
    let z = rng.random_range(-2000..2000) as f32;
    let s = f.spline(x, z);
    assert!(s.gate == 0.0 || s.gate == 1.0);
    assert_eq!(s.gate == 1.0, s.continentalness > 0.5 && s.erosion < 0.4);
    assert!((0.0..=1.0).contains(&s.erosion));
    assert!((0.0..=1.0).contains(&s.continentalness));
    if s.gate == 0.0 {
      // Closed gate leaves the base shape untouched.
      assert_eq!(s.height, s.continentalness * 16.0 * s.erosion_effect);
    }
  }
}

#[test]
fn test_single_octave_has_no_octave1() {
  let config = GenerationConfig::builder()
    .with_mode(NoiseMode::LayeredHeight)
    .with_octaves(1)
    .build()
    .unwrap();
  let f = NoiseField::new(&config);
  for x in 0..8 {
    assert_eq!(f.column(x as f32 * 1.7, 3.3).octave1, 0.0);
  }
}

#[test]
fn test_seed_changes_terrain() {
  let a = field(NoiseMode::LayeredHeight, 1);
  let b = field(NoiseMode::LayeredHeight, 2);
  let differs = (0..16).any(|i| {
    let x = i as f32 * 3.0 + 0.5;
    a.layered_height(x, 1.5) != b.layered_height(x, 1.5)
  });
  assert!(differs);
}

#[test]
fn test_maps_record_and_blit() {
  let mut chunk = NoiseMaps::for_chunk(2);
  assert_eq!(chunk.size(), 3);
  let column = ColumnSample {
    height: 9.0,
    continentalness: 0.75,
    erosion: 0.25,
    peaks_valleys: 0.5,
    gate: 1.0,
    octave1: 0.125,
  };
  chunk.record(2, 1, &column);
  assert_eq!(chunk.get(NoiseChannel::Continentalness, 2, 1), 0.75);
  assert_eq!(chunk.get(NoiseChannel::Gate, 2, 1), 1.0);
  assert_eq!(chunk.get(NoiseChannel::Octave1, 2, 1), 0.125);
  assert_eq!(chunk.get(NoiseChannel::Erosion, 0, 0), 0.0);

  let mut world = NoiseMaps::new(5);
  world.blit(&chunk, 2, 2);
  assert_eq!(world.get(NoiseChannel::Erosion, 4, 3), 0.25);

  // Out-of-range parts are dropped.
  world.blit(&chunk, 4, 4);
  assert_eq!(world.channel(NoiseChannel::Gate).len(), 25);
  assert_eq!(world.range(NoiseChannel::Gate), Some((0.0, 1.0)));

  world.clear();
  assert_eq!(world.range(NoiseChannel::Gate), Some((0.0, 0.0)));
  assert_eq!(NoiseMaps::new(0).range(NoiseChannel::Gate), None);
}
