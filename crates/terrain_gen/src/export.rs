//! Mesh and debug-map writers.
//!
//! - `terrain.obj`: every chunk as its own `o` group, vertices in world space
//! - `<channel>.png`: one 8-bit grayscale image per [`NoiseChannel`]

use anyhow::{Context, Result};
use image::{GrayImage, Luma};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use voxel_terrain::{ChunkManager, NoiseChannel, NoiseMaps};

/// Write all chunks of `manager` as one Wavefront OBJ.
///
/// Chunks go out in sorted position order; face indices are 1-based and
/// offset by the vertices of the chunks before them.
pub fn write_obj<W: Write>(manager: &ChunkManager, out: &mut W) -> Result<()> {
	let mut base = 1usize;
	for position in manager.positions() {
		let Some(chunk) = manager.chunk(position) else {
			continue;
		};
		if chunk.mesh().is_empty() {
			continue;
		}

		writeln!(out, "o chunk_{}_{}_{}", position.x, position.y, position.z)?;
		for [x, y, z] in chunk.world_vertices() {
			writeln!(out, "v {x} {y} {z}")?;
		}
		for tri in chunk.mesh().indices.chunks_exact(3) {
			writeln!(
				out,
				"f {} {} {}",
				base + tri[0] as usize,
				base + tri[1] as usize,
				base + tri[2] as usize
			)?;
		}
		base += chunk.mesh().vertices.len();
	}
	Ok(())
}

/// Write the OBJ to `path`.
pub fn save_obj(manager: &ChunkManager, path: &Path) -> Result<()> {
	let file =
		File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
	let mut out = BufWriter::new(file);
	write_obj(manager, &mut out).with_context(|| format!("Failed to write {}", path.display()))?;
	out.flush()
		.with_context(|| format!("Failed to flush {}", path.display()))?;
	Ok(())
}

/// Grayscale image of one channel. Values are clamped to [0, 1]; map X is
/// the image column and map Z the image row.
pub fn noise_map_image(maps: &NoiseMaps, channel: NoiseChannel) -> GrayImage {
	let size = maps.size() as u32;
	GrayImage::from_fn(size, size, |x, z| {
		let value = maps.get(channel, x as usize, z as usize);
		let value = if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 };
		Luma([(value * 255.0).round() as u8])
	})
}

/// Save every channel as `<dir>/<channel>.png`. Returns the written paths.
pub fn save_noise_maps(maps: &NoiseMaps, dir: &Path) -> Result<Vec<PathBuf>> {
	let mut written = Vec::with_capacity(NoiseChannel::ALL.len());
	for channel in NoiseChannel::ALL {
		let path = dir.join(format!("{}.png", channel.name()));
		noise_map_image(maps, channel)
			.save(&path)
			.with_context(|| format!("Failed to save {}", path.display()))?;
		written.push(path);
	}
	Ok(written)
}

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;
