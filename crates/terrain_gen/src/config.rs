//! Configuration parsing for terrain generation runs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use voxel_terrain::GenerationConfigBuilder;

/// Root configuration for one generation run.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
	/// Generation parameters, validated after command line overrides.
	pub generation: GenerationConfigBuilder,
	/// Where and what to write.
	pub output: OutputConfig,
}

/// Output settings.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
	/// Output directory, relative to the working directory.
	pub dir: PathBuf,
	/// Write all chunk meshes into one Wavefront OBJ file.
	pub obj: bool,
	/// Write one grayscale PNG per debug noise channel.
	pub noise_maps: bool,
}

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			dir: PathBuf::from("out"),
			obj: true,
			noise_maps: false,
		}
	}
}

impl Config {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::parse(&content)
	}

	/// Parse and validate configuration TOML.
	pub fn parse(content: &str) -> Result<Self> {
		let config: Config =
			toml::from_str(content).with_context(|| "Failed to parse config TOML")?;

		config
			.generation
			.validate()
			.context("Invalid [generation] section")?;
		if config.output.dir.as_os_str().is_empty() {
			anyhow::bail!("output.dir must not be empty");
		}

		Ok(config)
	}

	/// Serialize back to TOML.
	pub fn to_toml(&self) -> Result<String> {
		toml::to_string_pretty(self).context("Failed to serialize config TOML")
	}
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
