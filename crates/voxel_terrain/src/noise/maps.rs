//! Debug side-channel maps of per-column noise values.
//!
//! A chunk of width `w` records `(w+1) × (w+1)` values per channel. Chunk
//! maps stitch into a world map of `(w·N + 1)²`; neighbouring chunks write
//! identical values along their shared edge because sampling depends only on
//! world coordinates.

use super::ColumnSample;

/// One debug channel of [`NoiseMaps`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoiseChannel {
  Continentalness,
  Erosion,
  PeaksValleys,
  Gate,
  Octave1,
}

impl NoiseChannel {
  pub const ALL: [NoiseChannel; 5] = [
    NoiseChannel::Continentalness,
    NoiseChannel::Erosion,
    NoiseChannel::PeaksValleys,
    NoiseChannel::Gate,
    NoiseChannel::Octave1,
  ];

  /// Stable name for file output.
  pub fn name(self) -> &'static str {
    match self {
      NoiseChannel::Continentalness => "continentalness",
      NoiseChannel::Erosion => "erosion",
      NoiseChannel::PeaksValleys => "peaks_valleys",
      NoiseChannel::Gate => "gate",
      NoiseChannel::Octave1 => "octave1",
    }
  }

  #[inline(always)]
  const fn slot(self) -> usize {
    self as usize
  }
}

/// Square per-channel maps indexed by `(x, z)`, X major.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseMaps {
  size: usize,
  channels: [Vec<f32>; 5],
}

impl NoiseMaps {
  /// Zero-filled maps of `size × size`.
  pub fn new(size: usize) -> Self {
    Self {
      size,
      channels: std::array::from_fn(|_| vec![0.0; size * size]),
    }
  }

  /// Maps sized for one chunk of the given width.
  pub fn for_chunk(width: usize) -> Self {
    Self::new(width + 1)
  }

  pub fn size(&self) -> usize {
    self.size
  }

  #[inline(always)]
  fn index(&self, x: usize, z: usize) -> usize {
    x * self.size + z
  }

  /// Row-major (X major) values of one channel.
  pub fn channel(&self, channel: NoiseChannel) -> &[f32] {
    &self.channels[channel.slot()]
  }

  pub fn get(&self, channel: NoiseChannel, x: usize, z: usize) -> f32 {
    self.channels[channel.slot()][self.index(x, z)]
  }

  /// Record the debug channels of one column.
  pub fn record(&mut self, x: usize, z: usize, column: &ColumnSample) {
    let i = self.index(x, z);
    self.channels[NoiseChannel::Continentalness.slot()][i] = column.continentalness;
    self.channels[NoiseChannel::Erosion.slot()][i] = column.erosion;
    self.channels[NoiseChannel::PeaksValleys.slot()][i] = column.peaks_valleys;
    self.channels[NoiseChannel::Gate.slot()][i] = column.gate;
    self.channels[NoiseChannel::Octave1.slot()][i] = column.octave1;
  }

  /// Reset every channel to 0.
  pub fn clear(&mut self) {
    for channel in &mut self.channels {
      channel.fill(0.0);
    }
  }

  /// Copy `other` into this map with its origin at `(offset_x, offset_z)`.
  ///
  /// Values falling outside this map are dropped.
  pub fn blit(&mut self, other: &NoiseMaps, offset_x: usize, offset_z: usize) {
    for x in 0..other.size {
      let wx = offset_x + x;
      if wx >= self.size {
        break;
      }
      for z in 0..other.size {
        let wz = offset_z + z;
        if wz >= self.size {
          break;
        }
        let dst = self.index(wx, wz);
        let src = other.index(x, z);
        for (out, inp) in self.channels.iter_mut().zip(other.channels.iter()) {
          out[dst] = inp[src];
        }
      }
    }
  }

  /// Smallest and largest value of a channel, or `None` when empty.
  pub fn range(&self, channel: NoiseChannel) -> Option<(f32, f32)> {
    self.channel(channel).iter().fold(None, |acc, &v| match acc {
      None => Some((v, v)),
      Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
  }
}
