//! Generation configuration.
//!
//! [`GenerationConfig`] is immutable and always valid: the only way to obtain
//! one is [`GenerationConfigBuilder::build`], which runs validation. To change
//! a parameter, go back through [`GenerationConfig::to_builder`].
//!
//! ```ignore
//! let config = GenerationConfig::builder()
//!   .with_seed(42)
//!   .with_chunk(ChunkDims::new(16, 32))
//!   .with_mode(NoiseMode::LayeredHeight)
//!   .build()?;
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Scalar field sampling mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum NoiseMode {
  /// Fractal 2D noise gives a surface height per column; field = height - y.
  LayeredHeight,

  /// Fractal noise approximating 3D by averaging three 2D planes; the noise
  /// value is the field value.
  Field3d,

  /// Continentalness / erosion / peaks-and-valleys composite height.
  #[default]
  Spline,
}

/// How edge crossing points are placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum Interpolation {
  /// Linear interpolation of the threshold crossing between edge samples.
  Linear,

  /// Edge midpoint, ignoring sample values.
  #[default]
  Midpoint,
}

/// Vertex sharing policy for emitted triangles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum Shading {
  /// Every triangle corner gets its own vertex (faceted normals).
  #[default]
  Flat,

  /// Corners at identical positions share one vertex (smooth normals).
  Shared,
}

/// Fractal noise parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct NoiseParams {
  /// World units per noise period at the first octave (larger = smoother).
  pub scale: f32,
  /// Number of accumulated octaves.
  pub octaves: u32,
  /// Per-octave amplitude factor.
  pub persistence: f32,
  /// Per-octave frequency factor.
  pub lacunarity: f32,
}

impl Default for NoiseParams {
  fn default() -> Self {
    Self {
      scale: 16.0,
      octaves: 4,
      persistence: 0.3,
      lacunarity: 2.3,
    }
  }
}

/// Linear mapping from accumulated noise to terrain height.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct TerrainShape {
  /// Height at zero noise (sea level).
  pub base_height: f32,
  /// Height gained per unit of accumulated noise.
  pub height_range: f32,
}

impl Default for TerrainShape {
  fn default() -> Self {
    Self {
      base_height: 16.0,
      height_range: 12.0,
    }
  }
}

/// Chunk size in cubes. `width` applies to both X and Z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ChunkDims {
  pub width: u32,
  pub height: u32,
}

impl ChunkDims {
  pub const fn new(width: u32, height: u32) -> Self {
    Self { width, height }
  }

  /// Cube count along X/Z.
  #[inline]
  pub const fn width(&self) -> usize {
    self.width as usize
  }

  /// Cube count along Y.
  #[inline]
  pub const fn height(&self) -> usize {
    self.height as usize
  }

  /// Total cubes in a chunk.
  #[inline]
  pub const fn cube_count(&self) -> usize {
    self.width() * self.height() * self.width()
  }
}

impl Default for ChunkDims {
  fn default() -> Self {
    Self::new(16, 32)
  }
}

/// Mesh extraction policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct MeshPolicy {
  pub interpolation: Interpolation,
  pub shading: Shading,
}

impl MeshPolicy {
  pub const fn new(interpolation: Interpolation, shading: Shading) -> Self {
    Self {
      interpolation,
      shading,
    }
  }
}

/// Validated, immutable generation parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
  feature = "serde",
  derive(Serialize, Deserialize),
  serde(try_from = "GenerationConfigBuilder", into = "GenerationConfigBuilder")
)]
pub struct GenerationConfig {
  seed: i32,
  noise: NoiseParams,
  terrain: TerrainShape,
  iso_level: f32,
  chunk: ChunkDims,
  mesh: MeshPolicy,
  mode: NoiseMode,
  world_size_in_chunks: u32,
  capture_noise_maps: bool,
}

impl GenerationConfig {
  pub fn builder() -> GenerationConfigBuilder {
    GenerationConfigBuilder::default()
  }

  /// Start a builder pre-filled with this configuration.
  pub fn to_builder(&self) -> GenerationConfigBuilder {
    GenerationConfigBuilder {
      seed: self.seed,
      noise: self.noise,
      terrain: self.terrain,
      iso_level: self.iso_level,
      chunk: self.chunk,
      mesh: self.mesh,
      mode: self.mode,
      world_size_in_chunks: self.world_size_in_chunks,
      capture_noise_maps: self.capture_noise_maps,
    }
  }

  pub fn seed(&self) -> i32 {
    self.seed
  }

  pub fn noise(&self) -> &NoiseParams {
    &self.noise
  }

  pub fn terrain(&self) -> &TerrainShape {
    &self.terrain
  }

  /// Isosurface threshold: samples strictly above it are solid.
  pub fn iso_level(&self) -> f32 {
    self.iso_level
  }

  pub fn chunk(&self) -> ChunkDims {
    self.chunk
  }

  pub fn mesh(&self) -> &MeshPolicy {
    &self.mesh
  }

  pub fn mode(&self) -> NoiseMode {
    self.mode
  }

  pub fn world_size_in_chunks(&self) -> u32 {
    self.world_size_in_chunks
  }

  pub fn capture_noise_maps(&self) -> bool {
    self.capture_noise_maps
  }

  /// True when both configs produce chunks of the same dimensions.
  pub fn same_footprint(&self, other: &Self) -> bool {
    self.chunk == other.chunk
  }

  /// True when a chunk built with either config would be identical.
  ///
  /// Compares everything except the world extent.
  pub fn same_chunk_output(&self, other: &Self) -> bool {
    self.seed == other.seed
      && self.noise == other.noise
      && self.terrain == other.terrain
      && self.iso_level == other.iso_level
      && self.chunk == other.chunk
      && self.mesh == other.mesh
      && self.mode == other.mode
      && self.capture_noise_maps == other.capture_noise_maps
  }
}

impl Default for GenerationConfig {
  fn default() -> Self {
    // Builder defaults are valid by construction.
    let b = GenerationConfigBuilder::default();
    Self {
      seed: b.seed,
      noise: b.noise,
      terrain: b.terrain,
      iso_level: b.iso_level,
      chunk: b.chunk,
      mesh: b.mesh,
      mode: b.mode,
      world_size_in_chunks: b.world_size_in_chunks,
      capture_noise_maps: b.capture_noise_maps,
    }
  }
}

/// Mutable staging area for a [`GenerationConfig`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct GenerationConfigBuilder {
  pub seed: i32,
  pub noise: NoiseParams,
  pub terrain: TerrainShape,
  pub iso_level: f32,
  pub chunk: ChunkDims,
  pub mesh: MeshPolicy,
  pub mode: NoiseMode,
  pub world_size_in_chunks: u32,
  pub capture_noise_maps: bool,
}

impl Default for GenerationConfigBuilder {
  fn default() -> Self {
    Self {
      seed: 1,
      noise: NoiseParams::default(),
      terrain: TerrainShape::default(),
      iso_level: 0.5,
      chunk: ChunkDims::default(),
      mesh: MeshPolicy::default(),
      mode: NoiseMode::default(),
      world_size_in_chunks: 2,
      capture_noise_maps: false,
    }
  }
}

impl GenerationConfigBuilder {
  pub fn with_seed(mut self, seed: i32) -> Self {
    self.seed = seed;
    self
  }

  pub fn with_noise(mut self, noise: NoiseParams) -> Self {
    self.noise = noise;
    self
  }

  pub fn with_octaves(mut self, octaves: u32) -> Self {
    self.noise.octaves = octaves;
    self
  }

  pub fn with_terrain(mut self, terrain: TerrainShape) -> Self {
    self.terrain = terrain;
    self
  }

  pub fn with_iso_level(mut self, iso_level: f32) -> Self {
    self.iso_level = iso_level;
    self
  }

  pub fn with_chunk(mut self, chunk: ChunkDims) -> Self {
    self.chunk = chunk;
    self
  }

  pub fn with_mesh(mut self, mesh: MeshPolicy) -> Self {
    self.mesh = mesh;
    self
  }

  pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
    self.mesh.interpolation = interpolation;
    self
  }

  pub fn with_shading(mut self, shading: Shading) -> Self {
    self.mesh.shading = shading;
    self
  }

  pub fn with_mode(mut self, mode: NoiseMode) -> Self {
    self.mode = mode;
    self
  }

  pub fn with_world_size(mut self, chunks: u32) -> Self {
    self.world_size_in_chunks = chunks;
    self
  }

  pub fn with_noise_maps(mut self, capture: bool) -> Self {
    self.capture_noise_maps = capture;
    self
  }

  /// Check invariants without consuming the builder.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.chunk.width == 0 {
      return Err(ConfigError::ZeroWidth);
    }
    if self.chunk.height == 0 {
      return Err(ConfigError::ZeroHeight);
    }
    if self.noise.octaves == 0 {
      return Err(ConfigError::ZeroOctaves);
    }
    if !self.noise.scale.is_finite() || self.noise.scale == 0.0 {
      return Err(ConfigError::InvalidScale(self.noise.scale));
    }

    let finite_fields = [
      ("persistence", self.noise.persistence),
      ("lacunarity", self.noise.lacunarity),
      ("base_height", self.terrain.base_height),
      ("height_range", self.terrain.height_range),
      ("iso_level", self.iso_level),
    ];
    for (field, value) in finite_fields {
      if !value.is_finite() {
        return Err(ConfigError::NonFinite { field, value });
      }
    }

    Ok(())
  }

  pub fn build(self) -> Result<GenerationConfig, ConfigError> {
    self.validate()?;
    Ok(GenerationConfig {
      seed: self.seed,
      noise: self.noise,
      terrain: self.terrain,
      iso_level: self.iso_level,
      chunk: self.chunk,
      mesh: self.mesh,
      mode: self.mode,
      world_size_in_chunks: self.world_size_in_chunks,
      capture_noise_maps: self.capture_noise_maps,
    })
  }
}

impl TryFrom<GenerationConfigBuilder> for GenerationConfig {
  type Error = ConfigError;

  fn try_from(builder: GenerationConfigBuilder) -> Result<Self, Self::Error> {
    builder.build()
  }
}

impl From<GenerationConfig> for GenerationConfigBuilder {
  fn from(config: GenerationConfig) -> Self {
    config.to_builder()
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
