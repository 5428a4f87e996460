//! Per-vertex normals recomputed from triangle geometry.
//!
//! Each triangle contributes its unit face normal to its three vertices,
//! weighted by the interior angle at that vertex. With shared shading this
//! yields smooth normals; with flat shading every vertex belongs to exactly
//! one triangle and the result is the face normal.

use glam::Vec3A;

use crate::types::MeshOutput;

/// Normal used for vertices that only touch degenerate triangles.
pub const FALLBACK_NORMAL: [f32; 3] = [0.0, 1.0, 0.0];

/// Angle-weighted vertex normals, parallel to `mesh.vertices`.
pub fn compute_vertex_normals(mesh: &MeshOutput) -> Vec<[f32; 3]> {
  let mut acc = vec![Vec3A::ZERO; mesh.vertices.len()];

  for tri in mesh.indices.chunks_exact(3) {
    let [i0, i1, i2] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];

    let p0 = Vec3A::from_array(mesh.vertices[i0]);
    let p1 = Vec3A::from_array(mesh.vertices[i1]);
    let p2 = Vec3A::from_array(mesh.vertices[i2]);

    let e01 = p1 - p0;
    let e02 = p2 - p0;
    let e12 = p2 - p1;

    let Some(face) = face_normal(p0, p1, p2) else {
      continue;
    };

    acc[i0] += face * vertex_angle(e01, e02);
    acc[i1] += face * vertex_angle(-e01, e12);
    acc[i2] += face * vertex_angle(-e02, -e12);
  }

  acc
    .into_iter()
    .map(|n| {
      let len_sq = n.length_squared();
      if len_sq < 1e-12 {
        FALLBACK_NORMAL
      } else {
        (n * len_sq.sqrt().recip()).to_array()
      }
    })
    .collect()
}

/// Unit normal `(b - a) × (c - a)`, or `None` for a degenerate triangle.
#[inline]
pub fn face_normal(a: Vec3A, b: Vec3A, c: Vec3A) -> Option<Vec3A> {
  let n = (b - a).cross(c - a);
  let len_sq = n.length_squared();
  if len_sq < 1e-12 {
    None
  } else {
    Some(n * len_sq.sqrt().recip())
  }
}

/// Angle in radians between two edge vectors at a vertex.
#[inline]
fn vertex_angle(e1: Vec3A, e2: Vec3A) -> f32 {
  let len1_sq = e1.length_squared();
  let len2_sq = e2.length_squared();

  if len1_sq < 1e-12 || len2_sq < 1e-12 {
    return 0.0;
  }

  let cos_angle = e1.dot(e2) / (len1_sq.sqrt() * len2_sq.sqrt());
  cos_angle.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
#[path = "normals_test.rs"]
mod normals_test;
