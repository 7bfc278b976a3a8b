//! # World Module
//!
//! This module provides the `World` struct which owns every chunk of the voxel
//! world, generates them, and keeps the chunk-level culling flags in step with
//! the chunk the camera is in.
//!
//! ## Chunk Layout
//!
//! The world covers a fixed cuboid of chunk-grid positions. Only a smaller
//! populated sub-region receives blocks; every other position holds an empty
//! shell so that proximity queries see a uniform grid. Chunks are stored in
//! generation order: Z outermost, then Y, then X.
//!
//! ## Chunk-Level Culling
//!
//! Whenever the camera enters a new chunk, every other populated chunk is told
//! to ignore the faces that point away from the camera's chunk along each axis.
//! This is a cheap directional approximation tuned for a flat slab world seen
//! from inside the populated region; it is not general occlusion culling.

use cgmath::Point3;
use log::{debug, info};

use crate::config::WorldConfig;
use crate::engine_state::camera_state::CameraQuery;

use super::block::block_side::BlockSide;
use super::chunk::Chunk;

/// Totals over the world's chunks, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorldStats {
    /// All chunks, shells included
    pub chunks: usize,
    /// Chunks that received blocks
    pub populated_chunks: usize,
    /// Solid blocks across all chunks
    pub solid_blocks: usize,
    /// Face-visible flags set across all chunks
    pub visible_faces: usize,
}

/// Represents a voxel world composed of multiple chunks.
pub struct World {
    /// Chunks in generation order.
    chunks: Vec<Chunk>,
    /// Origin of the chunk the camera was last found in; the zero position
    /// before the first successful check.
    closest_chunk: Point3<f32>,
    /// Generation and culling settings.
    config: WorldConfig,
    /// Source of the surface coin flips.
    rng: fastrand::Rng,
}

impl World {
    /// Creates a world with no chunks yet.
    ///
    /// The coin-flip generator is seeded from `config.seed` when present and
    /// from system entropy otherwise.
    pub fn new(config: WorldConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };

        World {
            chunks: Vec::new(),
            closest_chunk: Point3::new(0.0, 0.0, 0.0),
            config,
            rng,
        }
    }

    /// Creates a world over an explicit set of chunks, in the given order.
    ///
    /// Nothing is generated; the chunks are taken as they are.
    pub fn from_chunks(config: WorldConfig, chunks: Vec<Chunk>) -> Self {
        let mut world = Self::new(config);
        world.chunks = chunks;
        world
    }

    /// Builds every chunk of the configured chunk range.
    ///
    /// Positions inside the populated region become terrain slabs, and get
    /// internal face culling when enabled. Every other position becomes an
    /// empty shell. The new chunk collection replaces the old one in a single
    /// assignment and the closest-chunk cursor starts over.
    pub fn generate(&mut self) {
        let voxel_size = self.config.voxel_size;
        let top_layer = self.config.top_layer;
        let populated_region = self.config.populated_region;
        let internal_face_culling = self.config.internal_face_culling;

        let mut chunks = Vec::with_capacity(self.config.chunk_range.volume());
        for grid_position in self.config.chunk_range.positions() {
            if populated_region.contains(grid_position) {
                let mut chunk = Chunk::slab(grid_position, voxel_size, top_layer, &mut self.rng);
                if internal_face_culling {
                    chunk.cull_internal_faces();
                }
                chunks.push(chunk);
            } else {
                chunks.push(Chunk::empty(grid_position, voxel_size));
            }
        }

        self.chunks = chunks;
        self.closest_chunk = Point3::new(0.0, 0.0, 0.0);

        let stats = self.stats();
        info!(
            "Generated {} chunks ({} populated, {} solid blocks, {} visible faces)",
            stats.chunks, stats.populated_chunks, stats.solid_blocks, stats.visible_faces
        );
    }

    /// Throws away every chunk and generates the world again from scratch.
    pub fn regenerate(&mut self) {
        info!("Regenerating world");
        self.generate();
    }

    /// Recomputes chunk ignore flags for the chunk the camera is in.
    ///
    /// The camera's effective position (the captured one while locked) is
    /// looked up against each chunk's bounds in storage order; the first chunk
    /// that strictly contains it wins. Nothing happens when no chunk contains
    /// the camera or when the containing chunk is already the recorded one.
    ///
    /// Otherwise the containing chunk gets all six flags cleared and every
    /// other populated chunk gets its flags from [`directional_ignores`]. Empty
    /// shells are never touched.
    ///
    /// # Returns
    /// `true` if the flags were recomputed.
    pub fn check_chunk<C: CameraQuery + ?Sized>(&mut self, camera: &C) -> bool {
        let position = camera.effective_position();
        let voxel_size = self.config.voxel_size;

        let Some(found) = self
            .chunks
            .iter()
            .position(|chunk| chunk.contains_point(position, voxel_size))
        else {
            return false;
        };

        let closest = self.chunks[found].position;
        if closest == self.closest_chunk {
            return false;
        }
        self.closest_chunk = closest;

        for (index, chunk) in self.chunks.iter_mut().enumerate() {
            if index == found {
                chunk.set_ignored_sides([false; 6]);
            } else if !chunk.is_empty() {
                chunk.set_ignored_sides(directional_ignores(chunk.position, closest));
            }
        }

        debug!(
            "Camera entered chunk {:?}, chunk ignore flags recomputed",
            self.chunks[found].grid_position
        );
        true
    }

    /// Origin of the chunk the camera was last found in.
    pub fn closest_chunk_position(&self) -> Point3<f32> {
        self.closest_chunk
    }

    /// All chunks in generation order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// The chunk at a chunk-grid position, if the world has one there.
    pub fn chunk_at(&self, grid_position: Point3<i32>) -> Option<&Chunk> {
        self.chunks
            .iter()
            .find(|chunk| chunk.grid_position == grid_position)
    }

    /// Settings the world was built with.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Edge length of one block in world units.
    pub fn voxel_size(&self) -> f32 {
        self.config.voxel_size
    }

    /// Whether internal face culling flags are meaningful for drawing.
    pub fn internal_face_culling(&self) -> bool {
        self.config.internal_face_culling
    }

    /// Totals over the world's chunks.
    pub fn stats(&self) -> WorldStats {
        self.chunks.iter().fold(WorldStats::default(), |mut stats, chunk| {
            stats.chunks += 1;
            if !chunk.is_empty() {
                stats.populated_chunks += 1;
                stats.solid_blocks += chunk.solid_count();
                stats.visible_faces += chunk.visible_face_count();
            }
            stats
        })
    }
}

/// Ignore flags for a chunk at `position` while the camera is in the chunk at `closest`.
///
/// A flag is set when the face points away from the camera's chunk on its axis.
/// Chunks aligned with the camera's chunk on an axis ignore neither face of it.
/// Note the Z pair: BACK is ignored for chunks with a greater Z and FRONT for
/// chunks with a smaller Z, matching the face-index handedness.
pub fn directional_ignores(position: Point3<f32>, closest: Point3<f32>) -> [bool; 6] {
    let mut ignore = [false; 6];
    ignore[BlockSide::LEFT as usize] = position.x < closest.x;
    ignore[BlockSide::RIGHT as usize] = position.x > closest.x;
    ignore[BlockSide::BOTTOM as usize] = position.y < closest.y;
    ignore[BlockSide::TOP as usize] = position.y > closest.y;
    ignore[BlockSide::BACK as usize] = position.z > closest.z;
    ignore[BlockSide::FRONT as usize] = position.z < closest.z;
    ignore
}
