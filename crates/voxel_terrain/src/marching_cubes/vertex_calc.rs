//! Edge crossing placement.
//!
//! Both cubes that share an edge must place its crossing at bit-identical
//! coordinates, otherwise shared-vertex welding misses and seams open.
//! Endpoints are therefore put in canonical order (lower corner first)
//! before interpolating, so the arithmetic is the same whichever cube asks.

pub use glam::Vec3A;

use crate::config::Interpolation;

/// A corner of the sample lattice: position and sample value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeEnd {
  pub position: Vec3A,
  pub value: f32,
}

impl EdgeEnd {
  #[inline(always)]
  pub fn new(position: Vec3A, value: f32) -> Self {
    Self { position, value }
  }
}

/// Lexicographic `a < b` on (x, y, z).
#[inline(always)]
fn precedes(a: Vec3A, b: Vec3A) -> bool {
  (a.x, a.y, a.z) < (b.x, b.y, b.z)
}

/// Point where the surface crosses the edge between `a` and `b`.
///
/// - [`Interpolation::Linear`]: `t = (iso - v1) / (v2 - v1)`, falling back to
///   the midpoint when both samples are equal.
/// - [`Interpolation::Midpoint`]: always the midpoint.
#[inline]
pub fn edge_crossing(a: EdgeEnd, b: EdgeEnd, iso: f32, interpolation: Interpolation) -> Vec3A {
  let (lo, hi) = if precedes(b.position, a.position) {
    (b, a)
  } else {
    (a, b)
  };

  match interpolation {
    Interpolation::Midpoint => midpoint(lo.position, hi.position),
    Interpolation::Linear => {
      let delta = hi.value - lo.value;
      if delta == 0.0 || !delta.is_finite() {
        return midpoint(lo.position, hi.position);
      }
      let t = (iso - lo.value) / delta;
      lo.position + t * (hi.position - lo.position)
    }
  }
}

#[inline(always)]
fn midpoint(a: Vec3A, b: Vec3A) -> Vec3A {
  (a + b) * 0.5
}

#[cfg(test)]
#[path = "vertex_calc_test.rs"]
mod vertex_calc_test;
