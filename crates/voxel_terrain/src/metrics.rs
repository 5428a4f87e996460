//! Chunk generation statistics.
//!
//! Updated by [`crate::world::ChunkManager`] on the calling thread after each
//! build or removal.
//!
//! # Usage
//!
//! ```ignore
//! let stats = manager.stats();
//! println!(
//!     "{} chunks, {} triangles, avg build {:.1}us",
//!     stats.chunks,
//!     stats.triangles(),
//!     stats.avg_build_timing_us()
//! );
//! ```

use std::collections::VecDeque;

/// Rolling window for storing recent values (e.g., timing history).
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
    buffer: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingWindow<T> {
    /// Create a new rolling window with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new value, evicting the oldest if at capacity.
    pub fn push(&mut self, value: T) {
        if self.capacity == 0 {
            return;
        }
        if self.buffer.len() >= self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Iterate over values (oldest to newest).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buffer.iter()
    }

    /// Get the most recent value.
    pub fn last(&self) -> Option<&T> {
        self.buffer.back()
    }
}

impl RollingWindow<u64> {
    pub fn sum(&self) -> u64 {
        self.buffer.iter().sum()
    }

    /// Compute the average of all values.
    pub fn average(&self) -> f64 {
        if self.buffer.is_empty() {
            0.0
        } else {
            self.sum() as f64 / self.buffer.len() as f64
        }
    }

    /// Get min and max values.
    pub fn min_max(&self) -> Option<(u64, u64)> {
        let min = *self.buffer.iter().min()?;
        let max = *self.buffer.iter().max()?;
        Some((min, max))
    }
}

impl Default for RollingWindow<u64> {
    fn default() -> Self {
        Self::new(128)
    }
}

/// Live chunk totals plus build timing history.
#[derive(Debug, Clone, Default)]
pub struct GenerationStats {
    /// Chunks currently held.
    pub chunks: u32,
    /// Vertices across all held chunks.
    pub vertices: u64,
    /// Indices across all held chunks.
    pub indices: u64,

    /// Rolling window of chunk build times in microseconds.
    pub build_timings: RollingWindow<u64>,
    pub last_build_us: u64,

    /// Chunks built this session (cumulative).
    pub total_chunks_built: u64,
    /// Chunks removed this session (cumulative).
    pub total_chunks_removed: u64,
}

impl GenerationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account a freshly built chunk.
    pub fn record_chunk(&mut self, vertex_count: usize, index_count: usize, timing_us: u64) {
        self.chunks += 1;
        self.vertices += vertex_count as u64;
        self.indices += index_count as u64;
        self.build_timings.push(timing_us);
        self.last_build_us = timing_us;
        self.total_chunks_built += 1;
    }

    /// Remove a chunk's contribution (dropped or about to be rebuilt).
    pub fn remove_chunk(&mut self, vertex_count: usize, index_count: usize) {
        self.chunks = self.chunks.saturating_sub(1);
        self.vertices = self.vertices.saturating_sub(vertex_count as u64);
        self.indices = self.indices.saturating_sub(index_count as u64);
    }

    /// Count a chunk leaving the world.
    pub fn record_removal(&mut self) {
        self.total_chunks_removed += 1;
    }

    /// Reset live totals and timings. Cumulative counters survive.
    pub fn reset(&mut self) {
        self.chunks = 0;
        self.vertices = 0;
        self.indices = 0;
        self.build_timings.clear();
        self.last_build_us = 0;
    }

    pub fn triangles(&self) -> u64 {
        self.indices / 3
    }

    pub fn avg_build_timing_us(&self) -> f64 {
        self.build_timings.average()
    }

    /// Approximate mesh memory: 12 bytes per vertex, 4 per index.
    pub fn mesh_memory_bytes(&self) -> u64 {
        self.vertices * 12 + self.indices * 4
    }
}
