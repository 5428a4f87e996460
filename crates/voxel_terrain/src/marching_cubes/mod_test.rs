use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::config::{ChunkDims, Shading};
use crate::constants::CORNER_OFFSETS;
use crate::marching_cubes::normals::face_normal;
use crate::types::MinMaxAABB;

const FLAT_MIDPOINT: MeshPolicy = MeshPolicy::new(Interpolation::Midpoint, Shading::Flat);
const SHARED_LINEAR: MeshPolicy = MeshPolicy::new(Interpolation::Linear, Shading::Shared);

fn binary_corners(config: u8) -> [f32; 8] {
  std::array::from_fn(|i| if config & (1 << i) != 0 { 1.0 } else { 0.0 })
}

fn sphere_grid(size: usize, radius: f32) -> VoxelGrid {
  let c = size as f32 / 2.0;
  let mut grid = VoxelGrid::new(ChunkDims::new(size as u32, size as u32));
  for x in 0..size {
    for y in 0..size {
      for z in 0..size {
        let mut corners = [0.0; 8];
        for (value, o) in corners.iter_mut().zip(CORNER_OFFSETS.iter()) {
          let p = Vec3A::new((x + o[0]) as f32, (y + o[1]) as f32, (z + o[2]) as f32);
          *value = radius - (p - Vec3A::splat(c)).length();
        }
        grid.set_cube_corners([x, y, z], corners).unwrap();
      }
    }
  }
  grid
}

fn signed_volume(mesh: &MeshOutput) -> f32 {
  mesh
    .triangles()
    .map(|[a, b, c]| {
      let (a, b, c) = (Vec3A::from_array(a), Vec3A::from_array(b), Vec3A::from_array(c));
      a.dot(b.cross(c)) / 6.0
    })
    .sum()
}

#[test]
fn test_uniform_cubes_produce_no_mesh() {
  for value in [0.0, 1.0] {
    let grid = VoxelGrid::from_corner_values([value; 8]);
    let output = extract(&grid, 0.5, &FLAT_MIDPOINT);
    assert!(output.is_empty());
    assert_eq!(output.triangle_count(), 0);
  }
}

#[test]
fn test_top_solid_cube_is_horizontal_quad() {
  let grid = VoxelGrid::from_corner_values([0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);

  for interpolation in [Interpolation::Midpoint, Interpolation::Linear] {
    let flat = extract(&grid, 0.5, &MeshPolicy::new(interpolation, Shading::Flat));
    assert_eq!(flat.triangle_count(), 2);
    assert_eq!(flat.vertices.len(), 6);
    assert!(flat.vertices.iter().all(|v| v[1] == 0.5), "{:?}", flat.vertices);

    // Solid above, air below: the surface faces down.
    for [a, b, c] in flat.triangles() {
      let n = face_normal(Vec3A::from_array(a), Vec3A::from_array(b), Vec3A::from_array(c)).unwrap();
      assert!((n - Vec3A::NEG_Y).length() < 1e-6, "normal {:?}", n);
    }

    let shared = extract(&grid, 0.5, &MeshPolicy::new(interpolation, Shading::Shared));
    assert_eq!(shared.triangle_count(), 2);
    assert_eq!(shared.vertices.len(), 4);
    assert_eq!(shared.bounds, MinMaxAABB::new([0.0, 0.5, 0.0], [1.0, 0.5, 1.0]));
  }
}

#[test]
fn test_single_corner_normals_point_away_from_solid() {
  for corner in 0..8 {
    let solid = 1u8 << corner;
    let p = Vec3A::from_array(crate::constants::corner_position(corner));

    for (config, sign) in [(solid, 1.0), (!solid, -1.0)] {
      let mut emitter = MeshEmitter::new(Shading::Flat);
      let n_tris = march_cube([0, 0, 0], &binary_corners(config), 0.5, Interpolation::Midpoint, &mut emitter);
      let mesh = emitter.finish();
      assert_eq!(n_tris, 1);

      let [a, b, c] = mesh.triangles().next().unwrap();
      let (a, b, c) = (Vec3A::from_array(a), Vec3A::from_array(b), Vec3A::from_array(c));
      let n = face_normal(a, b, c).unwrap();
      let away = (a + b + c) / 3.0 - p;
      // Single solid corner: face away from it. Single air corner: face it.
      assert!(
        n.dot(away) * sign > 0.0,
        "config {:#010b} normal {:?} has wrong orientation",
        config,
        n
      );
    }
  }
}

#[test]
fn test_per_cube_emission_bound() {
  for config in 0..=255u8 {
    let mut emitter = MeshEmitter::new(Shading::Flat);
    let triangles = march_cube([3, 1, 2], &binary_corners(config), 0.5, Interpolation::Linear, &mut emitter);
    assert!(triangles <= MAX_TRIANGLES_PER_CUBE);
    assert!(emitter.vertex_count() <= MAX_VERTICES_PER_CUBE);
    assert_eq!(emitter.index_count(), triangles * 3);
    if config == 0 || config == 255 {
      assert_eq!(triangles, 0);
    } else {
      assert!(triangles >= 1, "config {} emitted nothing", config);
    }

    let mesh = emitter.finish();
    assert!(mesh.is_well_formed());
    // Every vertex stays inside the cube at (3, 1, 2).
    for v in &mesh.vertices {
      assert!((3.0..=4.0).contains(&v[0]) && (1.0..=2.0).contains(&v[1]) && (2.0..=3.0).contains(&v[2]));
    }
  }
}

#[test]
fn test_random_grid_output_is_well_formed() {
  let mut rng = StdRng::seed_from_u64(0x3a7c);
  let dims = ChunkDims::new(4, 3);
  let mut grid = VoxelGrid::new(dims);
  for x in 0..4 {
    for y in 0..3 {
      for z in 0..4 {
        let corners: [f32; 8] = std::array::from_fn(|_| rng.random_range(0.0..1.0));
        grid.set_cube_corners([x, y, z], corners).unwrap();
      }
    }
  }

  for policy in [FLAT_MIDPOINT, SHARED_LINEAR] {
    let mesh = extract(&grid, 0.5, &policy);
    assert!(mesh.is_well_formed());
    assert!(mesh.triangle_count() <= dims.cube_count() * MAX_TRIANGLES_PER_CUBE);
    for &v in &mesh.vertices {
      assert!(mesh.bounds.contains(v));
      assert!(v[0] <= 4.0 && v[1] <= 3.0 && v[2] <= 4.0);
      assert!(v.iter().all(|&c| c >= 0.0));
    }
  }
}

#[test]
fn test_flat_and_shared_agree_on_geometry() {
  let grid = sphere_grid(6, 2.3);
  let flat = extract(&grid, 0.0, &MeshPolicy::new(Interpolation::Linear, Shading::Flat));
  let shared = extract(&grid, 0.0, &SHARED_LINEAR);

  assert_eq!(flat.vertices.len(), flat.indices.len());
  assert_eq!(flat.triangle_count(), shared.triangle_count());
  assert!(shared.vertices.len() < flat.vertices.len());

  let flat_tris: Vec<_> = flat.triangles().collect();
  let shared_tris: Vec<_> = shared.triangles().collect();
  assert_eq!(flat_tris, shared_tris);
}

#[test]
fn test_shared_vertices_are_unique() {
  let grid = sphere_grid(6, 2.3);
  let mesh = extract(&grid, 0.0, &SHARED_LINEAR);
  let mut seen = std::collections::HashSet::new();
  for v in &mesh.vertices {
    assert!(seen.insert(v.map(f32::to_bits)), "duplicate vertex {:?}", v);
  }
}

#[test]
fn test_sphere_is_closed_and_outward() {
  let grid = sphere_grid(6, 2.3);
  let mesh = extract(&grid, 0.0, &SHARED_LINEAR);
  assert!(mesh.triangle_count() > 20);

  // Watertight with consistent winding: every directed edge has exactly one
  // opposite twin across the whole chunk, including cube boundaries.
  let mut directed: HashMap<(u32, u32), u32> = HashMap::new();
  for tri in mesh.indices.chunks_exact(3) {
    for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
      *directed.entry((a, b)).or_default() += 1;
    }
  }
  for (&(a, b), &count) in &directed {
    assert_eq!(count, 1, "edge ({}, {}) used {} times", a, b, count);
    assert_eq!(directed.get(&(b, a)), Some(&1), "edge ({}, {}) has no twin", a, b);
  }

  let volume = signed_volume(&mesh);
  let expected = 4.0 / 3.0 * std::f32::consts::PI * 2.3f32.powi(3);
  assert!(volume > 0.0, "surface is inside out (volume {})", volume);
  assert!((volume - expected).abs() / expected < 0.25, "volume {} vs {}", volume, expected);
}

#[test]
fn test_linear_differs_from_midpoint() {
  let grid = VoxelGrid::from_corner_values([0.0, 0.0, 0.0, 0.0, 0.9, 0.9, 0.9, 0.9]);
  let linear = extract(&grid, 0.3, &MeshPolicy::new(Interpolation::Linear, Shading::Shared));
  let midpoint = extract(&grid, 0.3, &MeshPolicy::new(Interpolation::Midpoint, Shading::Shared));
  assert!(linear.vertices.iter().all(|v| (v[1] - 1.0 / 3.0).abs() < 1e-6));
  assert!(midpoint.vertices.iter().all(|v| v[1] == 0.5));
}

#[test]
fn test_equal_values_at_iso_do_not_panic() {
  let grid = VoxelGrid::from_corner_values([0.5; 8]);
  assert!(extract(&grid, 0.5, &SHARED_LINEAR).is_empty());

  let grid = VoxelGrid::from_corner_values([0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.50001]);
  let mesh = extract(&grid, 0.5, &SHARED_LINEAR);
  assert_eq!(mesh.triangle_count(), 1);
  assert!(mesh.vertices.iter().all(|v| v.iter().all(|c| c.is_finite())));
}
