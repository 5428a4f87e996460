//! Grid layout constants for chunk scalar fields.
//!
//! A chunk of `width × height × width` cubes needs one more sample than cubes
//! along every axis, because the cubes on the far faces read corners one unit
//! beyond the cube loop.
//!
//! # Scalar Field Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        SCALAR FIELD LAYOUT                          │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                                                                     │
//! │  Sample index:  0     1     2    ...   w-1    w                     │
//! │                 │     │                 │     │                     │
//! │                 └──── cube origins ─────┘     │                     │
//! │                       (0 .. w-1)              └─ far corner only    │
//! │                                                                     │
//! │  Samples per axis:  X = w+1,  Y = h+1,  Z = w+1                     │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Memory Layout
//!
//! ```text
//! Row-major, Z innermost:
//!
//! index = (x * samples_y + y) * samples_z + z
//!
//! Optimal access: sequential Z, then Y, then X
//! ```
//!
//! # Coordinate System
//!
//! ```text
//!         +Y
//!          │
//!          │
//!          └───────── +X
//!         /
//!        /
//!       +Z
//! ```

/// Extra samples per axis beyond the cube count.
pub const CORNER_APRON: usize = 1;

/// Number of corners of a unit cube.
pub const CUBE_CORNERS: usize = 8;

/// Integer offsets of the 8 cube corners relative to the cube origin.
///
/// Order matches [`crate::edge_table`]: bottom face (y=0) counter-clockwise
/// seen from above starting at the origin, then the top face (y=1).
/// - 0 = (0,0,0)
/// - 1 = (1,0,0)
/// - 2 = (1,0,1)
/// - 3 = (0,0,1)
/// - 4 = (0,1,0)
/// - 5 = (1,1,0)
/// - 6 = (1,1,1)
/// - 7 = (0,1,1)
pub const CORNER_OFFSETS: [[usize; 3]; CUBE_CORNERS] = [
  [0, 0, 0],
  [1, 0, 0],
  [1, 0, 1],
  [0, 0, 1],
  [0, 1, 0],
  [1, 1, 0],
  [1, 1, 1],
  [0, 1, 1],
];

/// Convert a 3D sample coordinate to a linear index.
///
/// `samples_y` and `samples_z` are the sample counts along Y and Z
/// (cube count + [`CORNER_APRON`]).
#[inline(always)]
pub const fn coord_to_index(
  x: usize,
  y: usize,
  z: usize,
  samples_y: usize,
  samples_z: usize,
) -> usize {
  (x * samples_y + y) * samples_z + z
}

/// Convert a linear index back to a 3D sample coordinate.
#[inline(always)]
pub const fn index_to_coord(idx: usize, samples_y: usize, samples_z: usize) -> (usize, usize, usize) {
  let z = idx % samples_z;
  let xy = idx / samples_z;
  let y = xy % samples_y;
  let x = xy / samples_y;
  (x, y, z)
}

/// Get corner position within the unit cube as floats.
#[inline(always)]
pub const fn corner_position(corner: usize) -> [f32; 3] {
  let [x, y, z] = CORNER_OFFSETS[corner];
  [x as f32, y as f32, z as f32]
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
