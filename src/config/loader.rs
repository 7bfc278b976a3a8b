use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

use super::WorldConfig;

/// Failures while loading or validating a [`WorldConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid JSON for a `WorldConfig`
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// `voxel_size` is not a finite positive number
    #[error("voxel size must be a positive number, got {0}")]
    InvalidVoxelSize(f32),
    /// `top_layer` lies outside `0..=16`
    #[error("top layer must be within 0..=16, got {0}")]
    InvalidTopLayer(i32),
    /// `chunk_range` holds no chunk-grid position
    #[error("chunk range holds no chunks")]
    EmptyChunkRange,
    /// `populated_region` reaches outside `chunk_range`
    #[error("populated region must lie inside the chunk range")]
    PopulatedRegionOutOfRange,
    /// `recording.duration` is negative or not finite
    #[error("recording duration must be a finite, non-negative number, got {0}")]
    InvalidRecordingDuration(f32),
}

/// Reads a [`WorldConfig`] from a JSON file and validates it.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<WorldConfig, ConfigError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config: WorldConfig = serde_json::from_reader(reader)?;
    config.validate()?;
    Ok(config)
}
