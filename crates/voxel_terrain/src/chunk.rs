//! One chunk: its scalar field, its mesh, optional debug maps.

use glam::IVec3;
use web_time::Instant;

use crate::config::GenerationConfig;
use crate::constants::CUBE_CORNERS;
use crate::error::GridError;
use crate::grid::VoxelGrid;
use crate::marching_cubes;
use crate::noise::{NoiseField, NoiseMaps};
use crate::types::MeshOutput;

/// A generated chunk.
///
/// Positions are world coordinates of the chunk's minimum corner; X and Z are
/// multiples of the chunk width and Y is 0 for chunks placed by the manager.
#[derive(Clone, Debug)]
pub struct Chunk {
  position: IVec3,
  grid: VoxelGrid,
  mesh: MeshOutput,
  maps: Option<NoiseMaps>,
  build_us: u64,
}

impl Chunk {
  /// Populate and mesh a chunk at `position`.
  pub fn build(position: IVec3, config: &GenerationConfig, field: &NoiseField) -> Self {
    let mut chunk = Self {
      position,
      grid: VoxelGrid::new(config.chunk()),
      mesh: MeshOutput::new(),
      maps: None,
      build_us: 0,
    };
    chunk.rebuild(config, field);
    chunk
  }

  /// Regenerate field and mesh in place from `config`.
  #[tracing::instrument(level = "trace", skip_all, fields(x = self.position.x, z = self.position.z))]
  pub fn rebuild(&mut self, config: &GenerationConfig, field: &NoiseField) {
    let start = Instant::now();

    if self.grid.dims() != config.chunk() {
      self.grid = VoxelGrid::new(config.chunk());
    }

    let maps = if config.capture_noise_maps() {
      Some(
        self
          .maps
          .get_or_insert_with(|| NoiseMaps::for_chunk(config.chunk().width())),
      )
    } else {
      self.maps = None;
      None
    };

    self.grid.populate(self.position, field, maps);
    self.mesh = marching_cubes::extract(&self.grid, config.iso_level(), config.mesh());
    self.build_us = start.elapsed().as_micros() as u64;
  }

  /// Overwrite one cube's corners and re-extract the mesh.
  pub fn set_cube_corners(
    &mut self,
    origin: [usize; 3],
    values: [f32; CUBE_CORNERS],
    config: &GenerationConfig,
  ) -> Result<(), GridError> {
    self.grid.set_cube_corners(origin, values)?;
    self.mesh = marching_cubes::extract(&self.grid, config.iso_level(), config.mesh());
    Ok(())
  }

  pub fn position(&self) -> IVec3 {
    self.position
  }

  pub fn grid(&self) -> &VoxelGrid {
    &self.grid
  }

  pub fn mesh(&self) -> &MeshOutput {
    &self.mesh
  }

  /// Debug maps, present when the chunk was built with map capture on.
  pub fn noise_maps(&self) -> Option<&NoiseMaps> {
    self.maps.as_ref()
  }

  /// Wall time of the last build in microseconds.
  pub fn build_us(&self) -> u64 {
    self.build_us
  }

  /// Mesh vertices translated to world space.
  pub fn world_vertices(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
    let offset = self.position.as_vec3().to_array();
    self
      .mesh
      .vertices
      .iter()
      .map(move |v| [v[0] + offset[0], v[1] + offset[1], v[2] + offset[2]])
  }
}
