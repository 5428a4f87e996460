use super::*;

#[test]
fn test_defaults_are_valid() {
  let config = GenerationConfig::builder().build().expect("defaults must validate");
  assert_eq!(config, GenerationConfig::default());
  assert_eq!(config.seed(), 1);
  assert_eq!(config.chunk(), ChunkDims::new(16, 32));
  assert_eq!(config.noise().octaves, 4);
  assert_eq!(config.iso_level(), 0.5);
  assert_eq!(config.world_size_in_chunks(), 2);
  assert_eq!(config.mode(), NoiseMode::Spline);
  assert_eq!(config.mesh().interpolation, Interpolation::Midpoint);
  assert_eq!(config.mesh().shading, Shading::Flat);
}

#[test]
fn test_zero_dimensions_rejected() {
  let err = GenerationConfig::builder()
    .with_chunk(ChunkDims::new(0, 32))
    .build()
    .unwrap_err();
  assert_eq!(err, ConfigError::ZeroWidth);

  let err = GenerationConfig::builder()
    .with_chunk(ChunkDims::new(16, 0))
    .build()
    .unwrap_err();
  assert_eq!(err, ConfigError::ZeroHeight);
}

#[test]
fn test_zero_octaves_rejected() {
  let err = GenerationConfig::builder().with_octaves(0).build().unwrap_err();
  assert_eq!(err, ConfigError::ZeroOctaves);
}

#[test]
fn test_bad_scale_rejected() {
  for scale in [0.0, f32::NAN, f32::INFINITY] {
    let noise = NoiseParams {
      scale,
      ..Default::default()
    };
    let err = GenerationConfig::builder().with_noise(noise).build().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidScale(_)), "scale {} accepted", scale);
  }
}

#[test]
fn test_non_finite_fields_rejected() {
  let err = GenerationConfig::builder()
    .with_iso_level(f32::NAN)
    .build()
    .unwrap_err();
  assert!(matches!(err, ConfigError::NonFinite { field: "iso_level", .. }));

  let terrain = TerrainShape {
    height_range: f32::NEG_INFINITY,
    ..Default::default()
  };
  let err = GenerationConfig::builder().with_terrain(terrain).build().unwrap_err();
  assert!(matches!(err, ConfigError::NonFinite { field: "height_range", .. }));
}

#[test]
fn test_zero_world_size_is_allowed() {
  let config = GenerationConfig::builder().with_world_size(0).build().unwrap();
  assert_eq!(config.world_size_in_chunks(), 0);
}

#[test]
fn test_to_builder_roundtrip() {
  let config = GenerationConfig::builder()
    .with_seed(-7)
    .with_mode(NoiseMode::Field3d)
    .with_shading(Shading::Shared)
    .with_interpolation(Interpolation::Linear)
    .build()
    .unwrap();
  assert_eq!(config.to_builder().build().unwrap(), config);
}

#[test]
fn test_chunk_output_ignores_world_size() {
  let a = GenerationConfig::default();
  let b = a.to_builder().with_world_size(5).build().unwrap();
  assert!(a.same_chunk_output(&b));
  assert!(a.same_footprint(&b));
  assert_ne!(a, b);

  let c = a.to_builder().with_seed(99).build().unwrap();
  assert!(!a.same_chunk_output(&c));
  assert!(a.same_footprint(&c));

  let d = a.to_builder().with_chunk(ChunkDims::new(8, 32)).build().unwrap();
  assert!(!a.same_footprint(&d));
}

#[test]
fn test_cube_count() {
  assert_eq!(ChunkDims::new(16, 32).cube_count(), 16 * 32 * 16);
}
