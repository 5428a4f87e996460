//! Dense per-chunk scalar field.
//!
//! A chunk of `w × h × w` cubes stores `(w+1) × (h+1) × (w+1)` corner
//! samples. See [`crate::constants`] for the memory layout.

use glam::IVec3;

use crate::config::ChunkDims;
use crate::constants::{coord_to_index, CORNER_APRON, CORNER_OFFSETS, CUBE_CORNERS};
use crate::error::GridError;
use crate::noise::{NoiseField, NoiseMaps};

/// Corner samples of one chunk.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelGrid {
  dims: ChunkDims,
  samples: Vec<f32>,
}

impl VoxelGrid {
  /// Zero-filled grid for the given chunk dimensions.
  pub fn new(dims: ChunkDims) -> Self {
    let len = (dims.width() + CORNER_APRON).pow(2) * (dims.height() + CORNER_APRON);
    Self {
      dims,
      samples: vec![0.0; len],
    }
  }

  /// A single cube built from 8 corner values (order = [`CORNER_OFFSETS`]).
  pub fn from_corner_values(values: [f32; CUBE_CORNERS]) -> Self {
    let mut grid = Self::new(ChunkDims::new(1, 1));
    for (corner, offset) in CORNER_OFFSETS.iter().enumerate() {
      let idx = grid.index(offset[0], offset[1], offset[2]);
      grid.samples[idx] = values[corner];
    }
    grid
  }

  pub fn dims(&self) -> ChunkDims {
    self.dims
  }

  /// Sample counts along X, Y, Z.
  #[inline]
  pub fn sample_extent(&self) -> [usize; 3] {
    [
      self.dims.width() + CORNER_APRON,
      self.dims.height() + CORNER_APRON,
      self.dims.width() + CORNER_APRON,
    ]
  }

  /// All samples in layout order.
  pub fn samples(&self) -> &[f32] {
    &self.samples
  }

  #[inline(always)]
  fn index(&self, x: usize, y: usize, z: usize) -> usize {
    let [_, sy, sz] = self.sample_extent();
    coord_to_index(x, y, z, sy, sz)
  }

  /// Sample at corner `(x, y, z)`.
  ///
  /// # Panics
  /// If the corner lies outside the grid.
  #[inline]
  pub fn get(&self, x: usize, y: usize, z: usize) -> f32 {
    self.samples[self.index(x, y, z)]
  }

  /// The 8 corner samples of the cube at `origin`.
  ///
  /// # Panics
  /// If the cube lies outside the grid.
  #[inline]
  pub fn cube_corners(&self, origin: [usize; 3]) -> [f32; CUBE_CORNERS] {
    let [x, y, z] = origin;
    let mut out = [0.0; CUBE_CORNERS];
    for (value, offset) in out.iter_mut().zip(CORNER_OFFSETS.iter()) {
      *value = self.get(x + offset[0], y + offset[1], z + offset[2]);
    }
    out
  }

  fn check_cube(&self, origin: [usize; 3]) -> Result<(), GridError> {
    let [x, y, z] = origin;
    let (w, h) = (self.dims.width(), self.dims.height());
    if x < w && y < h && z < w {
      Ok(())
    } else {
      Err(GridError::CubeOutOfBounds {
        origin,
        width: w,
        height: h,
      })
    }
  }

  /// Overwrite the 8 corners of the cube at `origin`.
  pub fn set_cube_corners(
    &mut self,
    origin: [usize; 3],
    values: [f32; CUBE_CORNERS],
  ) -> Result<(), GridError> {
    self.check_cube(origin)?;
    let [x, y, z] = origin;
    for (value, offset) in values.iter().zip(CORNER_OFFSETS.iter()) {
      let idx = self.index(x + offset[0], y + offset[1], z + offset[2]);
      self.samples[idx] = *value;
    }
    Ok(())
  }

  /// Fill every sample from `field` for a chunk at world `chunk_position`.
  ///
  /// Overwrites the whole grid. Height modes evaluate each column once; when
  /// `maps` is given, the column debug channels are recorded into it.
  pub fn populate(
    &mut self,
    chunk_position: IVec3,
    field: &NoiseField,
    mut maps: Option<&mut NoiseMaps>,
  ) {
    let [sx, sy, sz] = self.sample_extent();
    if let Some(maps) = maps.as_deref_mut() {
      if maps.size() != sx {
        *maps = NoiseMaps::new(sx);
      } else {
        maps.clear();
      }
    }

    let base = chunk_position.as_vec3();
    for x in 0..sx {
      let wx = base.x + x as f32;
      for z in 0..sz {
        let wz = base.z + z as f32;

        if field.is_height_mode() {
          let column = field.column(wx, wz);
          if let Some(maps) = maps.as_deref_mut() {
            maps.record(x, z, &column);
          }
          for y in 0..sy {
            let wy = base.y + y as f32;
            let idx = coord_to_index(x, y, z, sy, sz);
            self.samples[idx] = NoiseField::height_to_field(column.height, wy);
          }
        } else {
          for y in 0..sy {
            let wy = base.y + y as f32;
            let idx = coord_to_index(x, y, z, sy, sz);
            self.samples[idx] = field.field_3d(wx, wy, wz);
          }
        }
      }
    }
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
