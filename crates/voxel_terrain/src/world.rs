//! ChunkManager - the chunk map of one generated world.
//!
//! The manager owns every chunk keyed by its world position, the current
//! [`GenerationConfig`], and the observer that hears about changes.
//!
//! # Reconcile
//!
//! ```text
//! ┌─────────────────────────────┬───────────────────────────────────────────┐
//! │ Change                      │ Action                                    │
//! ├─────────────────────────────┼───────────────────────────────────────────┤
//! │ chunk width / height        │ drop everything, generate from scratch    │
//! │ world size                  │ add / remove only the positions that      │
//! │                             │ differ; survivors rebuilt only if the     │
//! │                             │ generation parameters changed too         │
//! │ generation parameters only  │ rebuild every chunk in place              │
//! │ nothing                     │ nothing                                   │
//! └─────────────────────────────┴───────────────────────────────────────────┘
//! ```
//!
//! Chunk builds are pure, so they run in parallel on rayon. The map itself is
//! only touched on the calling thread.

use std::collections::{HashMap, HashSet};

use glam::IVec3;
use rayon::prelude::*;

use crate::chunk::Chunk;
use crate::config::GenerationConfig;
use crate::constants::CUBE_CORNERS;
use crate::error::GridError;
use crate::metrics::GenerationStats;
use crate::noise::{NoiseField, NoiseMaps};
use crate::observer::{ChunkObserver, TracingObserver};

/// What [`ChunkManager::reconcile`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReconcileOutcome {
  /// Chunk dimensions changed; the world was generated from scratch.
  Regenerated { chunks: usize },

  /// World extent changed; only the difference was added and removed.
  /// `rebuilt` counts surviving chunks rebuilt for new parameters.
  Resized {
    added: usize,
    removed: usize,
    rebuilt: usize,
  },

  /// Generation parameters changed; every chunk was rebuilt in place.
  Rebuilt { chunks: usize },

  /// Configs were equal.
  Unchanged,
}

/// World positions of the `N × N` chunk layout for `config`.
pub fn chunk_positions(config: &GenerationConfig) -> Vec<IVec3> {
  let n = config.world_size_in_chunks() as i32;
  let w = config.chunk().width as i32;
  (0..n)
    .flat_map(|i| (0..n).map(move |k| IVec3::new(i * w, 0, k * w)))
    .collect()
}

/// Owns the chunks of one world.
pub struct ChunkManager {
  config: GenerationConfig,
  field: NoiseField,
  chunks: HashMap<IVec3, Chunk>,
  observer: Box<dyn ChunkObserver>,
  stats: GenerationStats,
}

impl ChunkManager {
  /// Empty manager reporting to a [`TracingObserver`].
  pub fn new(config: GenerationConfig) -> Self {
    Self::with_observer(config, Box::new(TracingObserver::new()))
  }

  /// Empty manager reporting to `observer`.
  pub fn with_observer(config: GenerationConfig, mut observer: Box<dyn ChunkObserver>) -> Self {
    observer.open(&config);
    Self {
      field: NoiseField::new(&config),
      config,
      chunks: HashMap::new(),
      observer,
      stats: GenerationStats::new(),
    }
  }

  pub fn config(&self) -> &GenerationConfig {
    &self.config
  }

  pub fn field(&self) -> &NoiseField {
    &self.field
  }

  pub fn stats(&self) -> &GenerationStats {
    &self.stats
  }

  pub fn chunk(&self, position: IVec3) -> Option<&Chunk> {
    self.chunks.get(&position)
  }

  pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
    self.chunks.values()
  }

  /// Positions of all chunks, sorted by (x, y, z).
  pub fn positions(&self) -> Vec<IVec3> {
    let mut positions: Vec<IVec3> = self.chunks.keys().copied().collect();
    positions.sort_unstable_by_key(|p| (p.x, p.y, p.z));
    positions
  }

  pub fn len(&self) -> usize {
    self.chunks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.chunks.is_empty()
  }

  /// Drop all chunks and build the full layout of the current config.
  #[tracing::instrument(skip_all, name = "chunk_manager::generate")]
  pub fn generate(&mut self) -> usize {
    self.clear();
    let positions = chunk_positions(&self.config);
    self.build_and_insert(positions)
  }

  /// Replace the config, then [`generate`](Self::generate).
  pub fn generate_with(&mut self, config: GenerationConfig) -> usize {
    self.set_config(config);
    self.generate()
  }

  /// Move to `config` doing as little work as possible.
  #[tracing::instrument(skip_all, name = "chunk_manager::reconcile")]
  pub fn reconcile(&mut self, config: GenerationConfig) -> ReconcileOutcome {
    if config == self.config {
      return ReconcileOutcome::Unchanged;
    }

    if !self.config.same_footprint(&config) {
      let chunks = self.generate_with(config);
      tracing::debug!(chunks, "chunk dimensions changed, regenerated");
      return ReconcileOutcome::Regenerated { chunks };
    }

    let params_changed = !self.config.same_chunk_output(&config);
    let size_changed = self.config.world_size_in_chunks() != config.world_size_in_chunks();
    self.set_config(config);

    if !size_changed {
      let chunks = self.rebuild_all();
      return ReconcileOutcome::Rebuilt { chunks };
    }

    let target: HashSet<IVec3> = chunk_positions(&self.config).into_iter().collect();

    let stale: Vec<IVec3> = self
      .positions()
      .into_iter()
      .filter(|p| !target.contains(p))
      .collect();
    for position in &stale {
      self.remove_chunk(*position);
    }

    let rebuilt = if params_changed { self.rebuild_all() } else { 0 };

    let mut missing: Vec<IVec3> = target
      .into_iter()
      .filter(|p| !self.chunks.contains_key(p))
      .collect();
    missing.sort_unstable_by_key(|p| (p.x, p.y, p.z));
    let added = self.build_and_insert(missing);

    tracing::debug!(added, removed = stale.len(), rebuilt, "world resized");
    ReconcileOutcome::Resized {
      added,
      removed: stale.len(),
      rebuilt,
    }
  }

  /// Build the chunk at `position` if absent. Returns false if it existed.
  pub fn add_chunk(&mut self, position: IVec3) -> bool {
    if self.chunks.contains_key(&position) {
      return false;
    }
    let chunk = Chunk::build(position, &self.config, &self.field);
    self.insert(chunk);
    true
  }

  /// Remove the chunk at `position`. Returns false if there was none.
  pub fn remove_chunk(&mut self, position: IVec3) -> bool {
    let Some(chunk) = self.chunks.remove(&position) else {
      return false;
    };
    self
      .stats
      .remove_chunk(chunk.mesh().vertices.len(), chunk.mesh().indices.len());
    self.stats.record_removal();
    self.observer.chunk_removed(position);
    true
  }

  /// Override one cube of an existing chunk and re-mesh it.
  ///
  /// Returns `Ok(false)` when no chunk exists at `position`.
  pub fn set_cube_corners(
    &mut self,
    position: IVec3,
    origin: [usize; 3],
    values: [f32; CUBE_CORNERS],
  ) -> Result<bool, GridError> {
    let Some(chunk) = self.chunks.get_mut(&position) else {
      return Ok(false);
    };
    let (old_v, old_i) = (chunk.mesh().vertices.len(), chunk.mesh().indices.len());
    chunk.set_cube_corners(origin, values, &self.config)?;
    self.stats.remove_chunk(old_v, old_i);
    self
      .stats
      .record_chunk(chunk.mesh().vertices.len(), chunk.mesh().indices.len(), chunk.build_us());
    self.observer.chunk_built(chunk);
    Ok(true)
  }

  /// Stitch every chunk's debug maps into one world map of `w·N + 1`
  /// per side. `None` when map capture is off.
  pub fn world_noise_maps(&self) -> Option<NoiseMaps> {
    if !self.config.capture_noise_maps() {
      return None;
    }
    let width = self.config.chunk().width();
    let n = self.config.world_size_in_chunks() as usize;
    let mut world = NoiseMaps::new(width * n + 1);

    for chunk in self.chunks.values() {
      let (Some(maps), pos) = (chunk.noise_maps(), chunk.position()) else {
        continue;
      };
      if pos.x < 0 || pos.z < 0 {
        continue;
      }
      world.blit(maps, pos.x as usize, pos.z as usize);
    }
    Some(world)
  }

  /// Forward a flush to the observer.
  pub fn flush(&mut self) {
    self.observer.flush();
  }

  fn set_config(&mut self, config: GenerationConfig) {
    self.field = NoiseField::new(&config);
    self.config = config;
  }

  fn clear(&mut self) {
    for position in self.positions() {
      self.remove_chunk(position);
    }
    self.stats.reset();
  }

  fn insert(&mut self, chunk: Chunk) {
    self
      .stats
      .record_chunk(chunk.mesh().vertices.len(), chunk.mesh().indices.len(), chunk.build_us());
    self.observer.chunk_built(&chunk);
    self.chunks.insert(chunk.position(), chunk);
  }

  fn build_and_insert(&mut self, positions: Vec<IVec3>) -> usize {
    let (config, field) = (&self.config, &self.field);
    let built: Vec<Chunk> = positions
      .into_par_iter()
      .map(|position| Chunk::build(position, config, field))
      .collect();

    let count = built.len();
    for chunk in built {
      self.insert(chunk);
    }
    count
  }

  fn rebuild_all(&mut self) -> usize {
    let (config, field) = (&self.config, &self.field);
    self
      .chunks
      .par_iter_mut()
      .for_each(|(_, chunk)| chunk.rebuild(config, field));

    self.stats.reset();
    for position in self.positions() {
      let chunk = &self.chunks[&position];
      self
        .stats
        .record_chunk(chunk.mesh().vertices.len(), chunk.mesh().indices.len(), chunk.build_us());
      self.observer.chunk_built(chunk);
    }
    self.chunks.len()
  }
}

impl Drop for ChunkManager {
  fn drop(&mut self) {
    self.flush();
  }
}

#[cfg(test)]
#[path = "world_test.rs"]
mod world_test;
