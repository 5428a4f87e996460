use super::*;
use voxel_terrain::{ChunkDims, Interpolation, NoiseMode, Shading};

#[test]
fn test_empty_file_uses_defaults() {
	let config = Config::parse("").unwrap();
	assert_eq!(config.generation, GenerationConfigBuilder::default());
	assert_eq!(config.output.dir, PathBuf::from("out"));
	assert!(config.output.obj);
	assert!(!config.output.noise_maps);
}

#[test]
fn test_parse_full_file() {
	let config = Config::parse(
		r#"
		[generation]
		seed = 42
		mode = "layered_height"
		iso_level = 0.25
		world_size_in_chunks = 3

		[generation.noise]
		octaves = 6

		[generation.chunk]
		width = 8
		height = 24

		[generation.mesh]
		interpolation = "linear"
		shading = "shared"

		[output]
		dir = "terrain"
		noise_maps = true
		"#,
	)
	.unwrap();

	let g = &config.generation;
	assert_eq!(g.seed, 42);
	assert_eq!(g.mode, NoiseMode::LayeredHeight);
	assert_eq!(g.iso_level, 0.25);
	assert_eq!(g.world_size_in_chunks, 3);
	assert_eq!(g.noise.octaves, 6);
	assert_eq!(g.noise.scale, 16.0, "unset fields keep their defaults");
	assert_eq!(g.chunk, ChunkDims::new(8, 24));
	assert_eq!(g.mesh.interpolation, Interpolation::Linear);
	assert_eq!(g.mesh.shading, Shading::Shared);
	assert_eq!(config.output.dir, PathBuf::from("terrain"));
	assert!(config.output.noise_maps);
}

#[test]
fn test_toml_round_trip() {
	let mut config = Config::default();
	config.generation = config
		.generation
		.with_seed(-7)
		.with_mode(NoiseMode::Field3d)
		.with_noise_maps(true);
	config.output.obj = false;

	let text = config.to_toml().unwrap();
	let parsed = Config::parse(&text).unwrap();
	assert_eq!(parsed.generation, config.generation);
	assert_eq!(parsed.output.dir, config.output.dir);
	assert!(!parsed.output.obj);
}

#[test]
fn test_zero_width_rejected() {
	let err = Config::parse("[generation.chunk]\nwidth = 0\nheight = 32\n").unwrap_err();
	assert!(format!("{err:#}").contains("Invalid [generation] section"));
}

#[test]
fn test_unknown_mode_rejected() {
	assert!(Config::parse("[generation]\nmode = \"caves\"\n").is_err());
}

#[test]
fn test_load_missing_file() {
	let err = Config::load(Path::new("/nonexistent/terrain.toml")).unwrap_err();
	assert!(err.to_string().contains("Failed to read config file"));
}
