//! Voxel terrain generator.
//!
//! Builds an `N × N` chunk world from a TOML config and writes:
//! - terrain.obj: every chunk mesh in world space
//! - <channel>.png: stitched debug noise maps (when enabled)
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

mod config;
mod export;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use voxel_terrain::{ChunkManager, GenerationConfig, NoiseChannel, NoiseMode};

use config::Config;

/// Voxel terrain generator.
#[derive(Parser, Debug)]
#[command(name = "terrain_gen")]
#[command(about = "Generates chunked marching cubes terrain from layered noise")]
struct Args {
	/// Path to configuration TOML file (defaults when omitted).
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Override the world seed.
	#[arg(long)]
	seed: Option<i32>,

	/// Override the world size in chunks per side.
	#[arg(long)]
	world_size: Option<u32>,

	/// Override the noise mode.
	#[arg(long, value_enum)]
	mode: Option<ModeArg>,

	/// Override the output directory.
	#[arg(short, long)]
	out: Option<PathBuf>,

	/// Skip the OBJ export.
	#[arg(long)]
	no_obj: bool,

	/// Export debug noise maps as PNG (turns on map capture).
	#[arg(long)]
	noise_maps: bool,

	/// Print the effective config as TOML and exit.
	#[arg(long)]
	print_config: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
	Layered,
	Field3d,
	Spline,
}

impl From<ModeArg> for NoiseMode {
	fn from(mode: ModeArg) -> Self {
		match mode {
			ModeArg::Layered => NoiseMode::LayeredHeight,
			ModeArg::Field3d => NoiseMode::Field3d,
			ModeArg::Spline => NoiseMode::Spline,
		}
	}
}

fn main() -> Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
		.target(env_logger::Target::Stdout)
		.init();

	let result = run(Args::parse());
	if let Err(err) = &result {
		log::error!("{err:#}");
	}
	log::logger().flush();
	result
}

fn run(args: Args) -> Result<()> {
	let mut config = match &args.config {
		Some(path) => {
			log::info!("Loading config from: {}", path.display());
			Config::load(path)?
		}
		None => Config::default(),
	};
	apply_overrides(&mut config, &args);

	if args.print_config {
		print!("{}", config.to_toml()?);
		return Ok(());
	}

	let generation: GenerationConfig = config
		.generation
		.clone()
		.build()
		.context("Invalid generation parameters")?;

	let n = generation.world_size_in_chunks();
	log::info!(
		"Generating {}x{} chunks of {}x{}x{} ({:?}, seed {})",
		n,
		n,
		generation.chunk().width,
		generation.chunk().height,
		generation.chunk().width,
		generation.mode(),
		generation.seed()
	);

	let mut manager = ChunkManager::new(generation);
	manager.generate();

	let stats = manager.stats();
	log::info!(
		"Built {} chunks: {} vertices, {} triangles, {:.1} KiB, avg {:.0} us/chunk",
		stats.chunks,
		stats.vertices,
		stats.triangles(),
		stats.mesh_memory_bytes() as f64 / 1024.0,
		stats.avg_build_timing_us()
	);

	std::fs::create_dir_all(&config.output.dir).with_context(|| {
		format!(
			"Failed to create output dir: {}",
			config.output.dir.display()
		)
	})?;

	if config.output.obj {
		let path = config.output.dir.join("terrain.obj");
		export::save_obj(&manager, &path)?;
		log::info!("  ✓ {}", path.display());
	}

	if config.output.noise_maps {
		if let Some(maps) = manager.world_noise_maps() {
			for channel in NoiseChannel::ALL {
				if let Some((lo, hi)) = maps.range(channel) {
					log::debug!("{}: [{lo:.3}, {hi:.3}]", channel.name());
				}
			}
			for path in export::save_noise_maps(&maps, &config.output.dir)? {
				log::info!("  ✓ {}", path.display());
			}
		}
	}

	manager.flush();
	Ok(())
}

fn apply_overrides(config: &mut Config, args: &Args) {
	let mut generation = config.generation.clone();
	if let Some(seed) = args.seed {
		generation = generation.with_seed(seed);
	}
	if let Some(world_size) = args.world_size {
		generation = generation.with_world_size(world_size);
	}
	if let Some(mode) = args.mode {
		generation = generation.with_mode(mode.into());
	}
	if args.noise_maps {
		config.output.noise_maps = true;
	}
	if config.output.noise_maps {
		generation = generation.with_noise_maps(true);
	}
	config.generation = generation;

	if let Some(out) = &args.out {
		config.output.dir = out.clone();
	}
	if args.no_obj {
		config.output.obj = false;
	}
}
