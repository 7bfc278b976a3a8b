//! # Configuration
//!
//! Settings consumed when the world and the viewer are built: voxel edge
//! length, slab height, the chunk grid and its populated sub-region, the
//! culling switches, the starting camera, and the recording flythrough.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes.

use cgmath::{InnerSpace, Point3, Vector3};
use serde::{Deserialize, Serialize};

mod loader;

pub use loader::{load_config, ConfigError};

/// A cuboid of chunk-grid coordinates, `min` inclusive and `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRegion {
    /// Inclusive lower corner
    pub min: Point3<i32>,
    /// Exclusive upper corner
    pub max: Point3<i32>,
}

impl ChunkRegion {
    /// Creates a region from its inclusive lower and exclusive upper corner.
    pub fn new(min: Point3<i32>, max: Point3<i32>) -> Self {
        ChunkRegion { min, max }
    }

    /// Whether the region holds no chunk-grid position at all.
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y || self.min.z >= self.max.z
    }

    /// Whether `position` lies inside the region.
    pub fn contains(&self, position: Point3<i32>) -> bool {
        (self.min.x..self.max.x).contains(&position.x)
            && (self.min.y..self.max.y).contains(&position.y)
            && (self.min.z..self.max.z).contains(&position.z)
    }

    /// Whether every position of `other` also lies inside this region.
    pub fn contains_region(&self, other: &ChunkRegion) -> bool {
        other.is_empty()
            || (self.min.x <= other.min.x
                && self.min.y <= other.min.y
                && self.min.z <= other.min.z
                && other.max.x <= self.max.x
                && other.max.y <= self.max.y
                && other.max.z <= self.max.z)
    }

    /// Number of chunk-grid positions in the region.
    pub fn volume(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let extent = self.max - self.min;
        (extent.x * extent.y * extent.z) as usize
    }

    /// Every position of the region, Z outermost, then Y, then X.
    pub fn positions(&self) -> impl Iterator<Item = Point3<i32>> {
        let ChunkRegion { min, max } = *self;
        (min.z..max.z).flat_map(move |z| {
            (min.y..max.y).flat_map(move |y| (min.x..max.x).map(move |x| Point3::new(x, y, z)))
        })
    }
}

/// Starting pose and movement speeds of the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Position the camera starts at and returns to on reset
    pub position: Point3<f32>,
    /// Viewing direction at start and on reset
    pub front: Vector3<f32>,
    /// World up vector
    pub up: Vector3<f32>,
    /// Movement speed in world units per second
    pub speed: f32,
    /// Movement speed while sprinting
    pub sprint_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig {
            position: Point3::new(-2.0, 8.0, -2.0),
            front: Vector3::new(1.0, -0.5, 1.0).normalize(),
            up: Vector3::unit_y(),
            speed: 5.0,
            sprint_speed: 10.0,
        }
    }
}

/// Settings of the performance-recording flythrough.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordingConfig {
    /// Length of a recording in seconds
    pub duration: f32,
    /// Flythrough speed along X and Z in world units per second
    pub speed: f32,
}

impl Default for RecordingConfig {
    fn default() -> Self {
        RecordingConfig {
            duration: 10.0,
            speed: 3.0,
        }
    }
}

/// Everything needed to build a world and drive the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Edge length of one block in world units
    pub voxel_size: f32,
    /// Slab height in blocks; the coin-flip row is `top_layer - 1`
    pub top_layer: i32,
    /// Chunk-grid positions that get a chunk (populated or shell)
    pub chunk_range: ChunkRegion,
    /// Chunk-grid positions that get blocks
    pub populated_region: ChunkRegion,
    /// Run internal face culling after generation and honor its flags when drawing
    pub internal_face_culling: bool,
    /// Recompute chunk ignore flags whenever the camera changes chunk
    pub chunk_culling: bool,
    /// Seed for the generation coin flips; entropy when absent
    pub seed: Option<u64>,
    /// Camera start pose and speeds
    pub camera: CameraConfig,
    /// Performance recording settings
    pub recording: RecordingConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            voxel_size: 0.5,
            top_layer: 4,
            chunk_range: ChunkRegion::new(Point3::new(-6, -4, -6), Point3::new(6, 5, 6)),
            populated_region: ChunkRegion::new(Point3::new(-1, 0, -1), Point3::new(3, 1, 3)),
            internal_face_culling: true,
            chunk_culling: true,
            seed: None,
            camera: CameraConfig::default(),
            recording: RecordingConfig::default(),
        }
    }
}

impl WorldConfig {
    /// Highest accepted `top_layer`; a slab that fills the whole chunk height.
    pub const MAX_TOP_LAYER: i32 = 16;

    /// Checks the ranges the world relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.voxel_size.is_finite() && self.voxel_size > 0.0) {
            return Err(ConfigError::InvalidVoxelSize(self.voxel_size));
        }
        if !(0..=Self::MAX_TOP_LAYER).contains(&self.top_layer) {
            return Err(ConfigError::InvalidTopLayer(self.top_layer));
        }
        if self.chunk_range.is_empty() {
            return Err(ConfigError::EmptyChunkRange);
        }
        if !self.chunk_range.contains_region(&self.populated_region) {
            return Err(ConfigError::PopulatedRegionOutOfRange);
        }
        if !(self.recording.duration.is_finite() && self.recording.duration >= 0.0) {
            return Err(ConfigError::InvalidRecordingDuration(self.recording.duration));
        }
        Ok(())
    }
}
