//! Marching cubes meshing.
//!
//! Converts a chunk's corner samples into triangles, one unit cube at a time.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  grid: VoxelGrid      - (w+1)×(h+1)×(w+1) f32 corner samples    │
//! │  iso: f32             - solid iff sample > iso                  │
//! │  policy: MeshPolicy   - Linear | Midpoint, Flat | Shared        │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 PHASE 1: Cube Classification                    │
//! │  For each cube (x < w, y < h, z < w):                           │
//! │    Load 8 corner samples (CORNER_OFFSETS order)                 │
//! │    Build 8-bit configuration, bit i = sample[i] > iso           │
//! │    Early-out on 0 (all air) and 255 (all solid)                 │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 PHASE 2: Triangle Emission                      │
//! │    Walk TRIANGLE_TABLE[config] in triples until -1              │
//! │    Place each edge crossing (canonical endpoint order)          │
//! │    Push corners through MeshEmitter (flat or welded)            │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OUTPUT                                   │
//! │  vertices: Vec<[f32; 3]> - chunk-local positions                │
//! │  indices: Vec<u32>       - 3 per triangle, wound outward        │
//! │  bounds: AABB            - mesh bounding box                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Triangles are counter-clockwise seen from the air side: the face normal
//! `(b - a) × (c - a)` points from solid toward air.
//!
//! Normals are not part of the output. [`normals::compute_vertex_normals`]
//! recomputes them from geometry for consumers that need them.

mod corner_mask;
mod emitter;
pub mod normals;
mod vertex_calc;

pub use corner_mask::cube_configuration;
pub use emitter::MeshEmitter;
pub use vertex_calc::{edge_crossing, EdgeEnd};

use glam::Vec3A;
use smallvec::SmallVec;

use crate::config::{Interpolation, MeshPolicy};
use crate::constants::{corner_position, CUBE_CORNERS};
use crate::edge_table::{triangle_edges, EDGE_CORNERS, MAX_TRIANGLES_PER_CUBE};
use crate::grid::VoxelGrid;
use crate::types::MeshOutput;

/// Largest number of vertices one cube can emit.
pub const MAX_VERTICES_PER_CUBE: usize = MAX_TRIANGLES_PER_CUBE * 3;

/// Extract the isosurface of a whole grid.
#[tracing::instrument(level = "trace", skip_all, name = "marching_cubes::extract")]
pub fn extract(grid: &VoxelGrid, iso: f32, policy: &MeshPolicy) -> MeshOutput {
  let dims = grid.dims();
  let mut emitter = MeshEmitter::new(policy.shading);

  for x in 0..dims.width() {
    for y in 0..dims.height() {
      for z in 0..dims.width() {
        let origin = [x, y, z];
        let corners = grid.cube_corners(origin);
        march_cube(origin, &corners, iso, policy.interpolation, &mut emitter);
      }
    }
  }

  emitter.finish()
}

/// Triangulate one cube at integer `origin` into `emitter`.
///
/// Returns the number of triangles emitted (at most
/// [`MAX_TRIANGLES_PER_CUBE`]).
pub fn march_cube(
  origin: [usize; 3],
  corners: &[f32; CUBE_CORNERS],
  iso: f32,
  interpolation: Interpolation,
  emitter: &mut MeshEmitter,
) -> usize {
  let config = cube_configuration(corners, iso);
  if config == 0 || config == u8::MAX {
    return 0;
  }

  let base = Vec3A::new(origin[0] as f32, origin[1] as f32, origin[2] as f32);
  let corner_end = |corner: u8| {
    let corner = corner as usize;
    EdgeEnd::new(base + Vec3A::from_array(corner_position(corner)), corners[corner])
  };

  // Each edge crossing is computed once, even when several triangles use it.
  let mut crossings: [Option<Vec3A>; 12] = [None; 12];
  let mut points: SmallVec<[Vec3A; MAX_VERTICES_PER_CUBE]> = SmallVec::new();

  for &edge in triangle_edges(config) {
    let edge = edge as usize;
    let point = *crossings[edge].get_or_insert_with(|| {
      let [c0, c1] = EDGE_CORNERS[edge];
      edge_crossing(corner_end(c0), corner_end(c1), iso, interpolation)
    });
    points.push(point);
  }

  for &point in &points {
    emitter.push(point);
  }
  points.len() / 3
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
