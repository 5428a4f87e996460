//! Vertex/index sink for extracted triangles.

use std::collections::HashMap;

use glam::Vec3A;

use crate::config::Shading;
use crate::types::MeshOutput;

/// Appends triangle corners to a [`MeshOutput`] under a shading policy.
///
/// [`Shading::Flat`] gives every corner a fresh vertex. [`Shading::Shared`]
/// welds corners with exactly equal positions (`-0.0` and `+0.0` weld).
pub struct MeshEmitter {
  output: MeshOutput,
  shading: Shading,
  welded: HashMap<[u32; 3], u32>,
}

impl MeshEmitter {
  pub fn new(shading: Shading) -> Self {
    Self {
      output: MeshOutput::new(),
      shading,
      welded: HashMap::new(),
    }
  }

  pub fn shading(&self) -> Shading {
    self.shading
  }

  /// Emit one triangle corner.
  #[inline]
  pub fn push(&mut self, position: Vec3A) {
    let position = position.to_array();
    let index = match self.shading {
      Shading::Flat => self.append(position),
      Shading::Shared => {
        // Adding +0.0 folds -0.0 into +0.0 before taking bits.
        let key = position.map(|c| (c + 0.0).to_bits());
        match self.welded.get(&key) {
          Some(&index) => index,
          None => {
            let index = self.append(position);
            self.welded.insert(key, index);
            index
          }
        }
      }
    };
    self.output.indices.push(index);
  }

  #[inline]
  fn append(&mut self, position: [f32; 3]) -> u32 {
    let index = self.output.vertices.len() as u32;
    self.output.vertices.push(position);
    self.output.bounds.encapsulate(position);
    index
  }

  /// Vertices emitted so far.
  pub fn vertex_count(&self) -> usize {
    self.output.vertices.len()
  }

  /// Indices emitted so far.
  pub fn index_count(&self) -> usize {
    self.output.indices.len()
  }

  pub fn finish(self) -> MeshOutput {
    self.output
  }
}
