//! Chunk lifecycle notifications.
//!
//! [`crate::world::ChunkManager`] reports through an injected
//! [`ChunkObserver`] instead of a process-wide logger. The manager calls
//! `open` once on construction and `flush` on shutdown (explicitly or on
//! drop).

use glam::IVec3;

use crate::chunk::Chunk;
use crate::config::GenerationConfig;

/// Receives chunk lifecycle events. All methods default to no-ops.
pub trait ChunkObserver: Send {
  fn open(&mut self, _config: &GenerationConfig) {}

  /// A chunk was built or rebuilt.
  fn chunk_built(&mut self, _chunk: &Chunk) {}

  /// The chunk at `position` left the world.
  fn chunk_removed(&mut self, _position: IVec3) {}

  fn flush(&mut self) {}
}

/// Observer that drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl ChunkObserver for NullObserver {}

/// Default observer: forwards events to `tracing`.
///
/// Per-chunk events go out at debug level; `flush` emits one info summary
/// of the session since the previous flush.
#[derive(Clone, Debug, Default)]
pub struct TracingObserver {
  built: u64,
  removed: u64,
  triangles: u64,
}

impl TracingObserver {
  pub fn new() -> Self {
    Self::default()
  }
}

impl ChunkObserver for TracingObserver {
  fn open(&mut self, config: &GenerationConfig) {
    tracing::info!(
      seed = config.seed(),
      mode = ?config.mode(),
      width = config.chunk().width,
      height = config.chunk().height,
      world_size = config.world_size_in_chunks(),
      "chunk manager opened"
    );
  }

  fn chunk_built(&mut self, chunk: &Chunk) {
    self.built += 1;
    self.triangles += chunk.mesh().triangle_count() as u64;
    tracing::debug!(
      x = chunk.position().x,
      z = chunk.position().z,
      vertices = chunk.mesh().vertices.len(),
      triangles = chunk.mesh().triangle_count(),
      build_us = chunk.build_us(),
      "chunk built"
    );
  }

  fn chunk_removed(&mut self, position: IVec3) {
    self.removed += 1;
    tracing::debug!(x = position.x, z = position.z, "chunk removed");
  }

  fn flush(&mut self) {
    if self.built == 0 && self.removed == 0 {
      return;
    }
    tracing::info!(
      built = self.built,
      removed = self.removed,
      triangles = self.triangles,
      "chunk events flushed"
    );
    self.built = 0;
    self.removed = 0;
    self.triangles = 0;
  }
}
