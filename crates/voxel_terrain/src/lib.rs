//! voxel_terrain - chunked voxel terrain generation and marching cubes meshing
//!
//! This crate turns layered coherent noise into a dense scalar field per
//! rectangular chunk and extracts a triangle mesh from it with classic
//! marching cubes. A [`ChunkManager`] keeps the chunk map of one world and
//! regenerates as little as possible when parameters change.
//!
//! # Features
//!
//! - **Noise modes**: layered 2D height, pseudo-3D field, and a
//!   continentalness / erosion / peaks-and-valleys spline composite
//! - **Marching cubes**: linear or midpoint edge placement, flat or shared
//!   (welded) vertices, outward winding, seam-exact crossings
//! - **Incremental reconcile**: resize adds/removes only the delta; parameter
//!   changes rebuild in place; chunk builds run on rayon
//! - **Debug maps**: optional per-column noise channels, stitchable into one
//!   world map
//!
//! # Example
//!
//! ```ignore
//! use voxel_terrain::{ChunkManager, GenerationConfig, NoiseMode};
//!
//! let config = GenerationConfig::builder()
//!     .with_mode(NoiseMode::LayeredHeight)
//!     .with_world_size(4)
//!     .build()?;
//!
//! let mut world = ChunkManager::new(config);
//! world.generate();
//!
//! for chunk in world.chunks() {
//!     println!("{:?}: {} triangles", chunk.position(), chunk.mesh().triangle_count());
//! }
//! ```

pub mod chunk;
pub mod config;
pub mod constants;
pub mod edge_table;
pub mod error;
pub mod grid;
pub mod marching_cubes;
pub mod metrics;
pub mod noise;
pub mod observer;
pub mod types;
pub mod world;

// Re-export commonly used items
pub use chunk::Chunk;
pub use config::{
  ChunkDims, GenerationConfig, GenerationConfigBuilder, Interpolation, MeshPolicy, NoiseMode,
  NoiseParams, Shading, TerrainShape,
};
pub use constants::{coord_to_index, index_to_coord, CORNER_OFFSETS};
pub use edge_table::{EDGE_CORNERS, EDGE_TABLE, TRIANGLE_TABLE};
pub use error::{ConfigError, GridError};
pub use grid::VoxelGrid;
pub use metrics::GenerationStats;
pub use noise::{ColumnSample, NoiseChannel, NoiseField, NoiseMaps, SplineSample};
pub use observer::{ChunkObserver, NullObserver, TracingObserver};
pub use types::{MeshOutput, MinMaxAABB};
pub use world::{ChunkManager, ReconcileOutcome};
