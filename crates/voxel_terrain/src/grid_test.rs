use glam::IVec3;

use super::*;
use crate::config::{GenerationConfig, NoiseMode};

fn config(mode: NoiseMode) -> GenerationConfig {
  GenerationConfig::builder()
    .with_mode(mode)
    .with_chunk(ChunkDims::new(4, 8))
    .build()
    .unwrap()
}

#[test]
fn test_new_grid_is_zeroed() {
  let grid = VoxelGrid::new(ChunkDims::new(4, 8));
  assert_eq!(grid.sample_extent(), [5, 9, 5]);
  assert_eq!(grid.samples().len(), 5 * 9 * 5);
  assert!(grid.samples().iter().all(|&v| v == 0.0));
}

#[test]
fn test_populate_matches_field() {
  for mode in [NoiseMode::LayeredHeight, NoiseMode::Field3d, NoiseMode::Spline] {
    let config = config(mode);
    let field = NoiseField::new(&config);
    let position = IVec3::new(8, 0, -4);
    let mut grid = VoxelGrid::new(config.chunk());
    grid.populate(position, &field, None);

    for (x, y, z) in [(0, 0, 0), (4, 8, 4), (2, 3, 1)] {
      let expected = field.sample((8 + x) as f32, y as f32, (z as i32 - 4) as f32);
      assert_eq!(grid.get(x, y, z), expected, "{:?} at ({}, {}, {})", mode, x, y, z);
    }
  }
}

#[test]
fn test_populate_is_idempotent() {
  let config = config(NoiseMode::Spline);
  let field = NoiseField::new(&config);
  let mut fresh = VoxelGrid::new(config.chunk());
  fresh.populate(IVec3::new(4, 0, 4), &field, None);

  let mut reused = VoxelGrid::new(config.chunk());
  reused.populate(IVec3::new(40, 0, 12), &field, None);
  reused.set_cube_corners([0, 0, 0], [9.0; 8]).unwrap();
  reused.populate(IVec3::new(4, 0, 4), &field, None);

  assert_eq!(fresh, reused);
}

#[test]
fn test_adjacent_chunks_share_faces() {
  let config = config(NoiseMode::LayeredHeight);
  let field = NoiseField::new(&config);
  let mut a = VoxelGrid::new(config.chunk());
  let mut b = VoxelGrid::new(config.chunk());
  a.populate(IVec3::ZERO, &field, None);
  b.populate(IVec3::new(4, 0, 0), &field, None);
  for y in 0..=8 {
    for z in 0..=4 {
      assert_eq!(a.get(4, y, z), b.get(0, y, z));
    }
  }
}

#[test]
fn test_populate_records_maps() {
  let config = config(NoiseMode::Spline);
  let field = NoiseField::new(&config);
  let mut grid = VoxelGrid::new(config.chunk());
  // Wrong size is replaced.
  let mut maps = NoiseMaps::new(2);
  grid.populate(IVec3::new(4, 0, 0), &field, Some(&mut maps));
  assert_eq!(maps.size(), 5);

  let spline = field.spline(7.0, 2.0);
  assert_eq!(maps.get(crate::noise::NoiseChannel::Continentalness, 3, 2), spline.continentalness);
  assert_eq!(maps.get(crate::noise::NoiseChannel::Gate, 3, 2), spline.gate);
  assert_eq!(maps.range(crate::noise::NoiseChannel::Octave1), Some((0.0, 0.0)));
}

#[test]
fn test_field_3d_leaves_maps_zero() {
  let config = config(NoiseMode::Field3d);
  let field = NoiseField::new(&config);
  let mut grid = VoxelGrid::new(config.chunk());
  let mut maps = NoiseMaps::for_chunk(4);
  grid.populate(IVec3::ZERO, &field, Some(&mut maps));
  for channel in crate::noise::NoiseChannel::ALL {
    assert_eq!(maps.range(channel), Some((0.0, 0.0)), "{:?}", channel);
  }
}

#[test]
fn test_set_cube_corners() {
  let mut grid = VoxelGrid::new(ChunkDims::new(2, 2));
  let values = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
  grid.set_cube_corners([1, 1, 1], values).unwrap();
  assert_eq!(grid.cube_corners([1, 1, 1]), values);
  // Corner 6 is (1,1,1) relative to the origin.
  assert_eq!(grid.get(2, 2, 2), 6.0);
  assert_eq!(grid.get(1, 1, 1), 0.0);
  assert_eq!(grid.get(2, 1, 1), 1.0);
}

#[test]
fn test_set_cube_corners_out_of_bounds() {
  let mut grid = VoxelGrid::new(ChunkDims::new(2, 3));
  let before = grid.clone();
  for origin in [[2, 0, 0], [0, 3, 0], [0, 0, 2]] {
    let err = grid.set_cube_corners(origin, [1.0; 8]).unwrap_err();
    assert_eq!(
      err,
      GridError::CubeOutOfBounds {
        origin,
        width: 2,
        height: 3
      }
    );
  }
  assert_eq!(grid, before, "failed override must not write");
}

#[test]
fn test_from_corner_values() {
  let values = [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0];
  let grid = VoxelGrid::from_corner_values(values);
  assert_eq!(grid.dims(), ChunkDims::new(1, 1));
  assert_eq!(grid.cube_corners([0, 0, 0]), values);
}
