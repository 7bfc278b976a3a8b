//! # Chunk Module
//!
//! This module provides the `Chunk` struct and related functionality for managing
//! 16x16x16 blocks of voxel data.
//!
//! ## Storage
//!
//! A populated chunk stores all 4096 blocks as packed [`Block`] words in a fixed
//! lattice order, `index = x + 16 * z + 256 * y`:
//! - consecutive blocks differ by +1 in X
//! - every 16th block differs by +1 in Z
//! - every 256th block differs by +1 in Y
//!
//! Next to the packed blocks sits `solid_array`, a bit vector with one bit per
//! lattice cell, so that walking the solid blocks of a sparse chunk does not
//! have to decode every air word.
//!
//! An empty chunk is a shell: it has a position but no blocks at all. Shells
//! exist so that the world's chunk grid has uniform structure.

use bitvec::prelude::BitVec;
use cgmath::Point3;
use chunk_creation::ChunkCreationIterator;
use chunk_iteration::ChunkBlockIterator;

use super::block::block_side::BlockSide;
use super::block::block_type::BlockType;
use super::block::Block;

mod chunk_creation;
pub mod chunk_iteration;
pub mod face_culling;

/// The dimension (width, height, depth) of a chunk in blocks.
pub const CHUNK_DIMENSION: usize = 16;
/// The number of blocks in a single horizontal plane of a chunk (CHUNK_DIMENSION²).
pub const CHUNK_PLANE_SIZE: usize = CHUNK_DIMENSION * CHUNK_DIMENSION;
/// The total number of blocks in a chunk (CHUNK_DIMENSION³).
pub const CHUNK_SIZE: usize = CHUNK_PLANE_SIZE * CHUNK_DIMENSION;

/// Represents a 16x16x16 collection of voxel blocks in the world.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// The position of this chunk in chunk-grid coordinates.
    pub grid_position: Point3<i32>,

    /// World-space origin; local block (0, 0, 0) sits here.
    pub position: Point3<f32>,

    /// `true` iff the chunk was never populated with blocks.
    empty: bool,

    /// Packed blocks in lattice order. Either empty or exactly `CHUNK_SIZE` long.
    blocks: Vec<Block>,

    /// One bit per lattice cell, set where the block is solid.
    solid_array: BitVec,

    /// Chunk-level "ignore this face" flags, indexed by `BlockSide`.
    ignore: [bool; 6],
}

/// Flat lattice index of local coordinates.
///
/// # Panics
/// Panics in debug builds if a coordinate is outside the chunk.
#[inline]
pub fn lattice_index(x: usize, y: usize, z: usize) -> usize {
    debug_assert!(x < CHUNK_DIMENSION && y < CHUNK_DIMENSION && z < CHUNK_DIMENSION);
    x + CHUNK_DIMENSION * z + CHUNK_PLANE_SIZE * y
}

/// Converts a chunk-grid coordinate to the world-space origin of that chunk.
pub fn grid_to_world(grid_position: Point3<i32>, voxel_size: f32) -> Point3<f32> {
    let edge = CHUNK_DIMENSION as f32 * voxel_size;
    Point3::new(
        grid_position.x as f32 * edge,
        grid_position.y as f32 * edge,
        grid_position.z as f32 * edge,
    )
}

impl Chunk {
    /// Creates an empty shell at the given chunk-grid position.
    ///
    /// # Arguments
    /// * `grid_position` - The chunk-grid coordinates of the new chunk
    /// * `voxel_size` - Edge length of one block in world units
    pub fn empty(grid_position: Point3<i32>, voxel_size: f32) -> Self {
        Chunk {
            grid_position,
            position: grid_to_world(grid_position, voxel_size),
            empty: true,
            blocks: Vec::new(),
            solid_array: BitVec::new(),
            ignore: [false; 6],
        }
    }

    /// Creates a populated chunk, asking `block_at` for the type of every
    /// lattice cell in lattice order.
    ///
    /// # Arguments
    /// * `grid_position` - The chunk-grid coordinates of the new chunk
    /// * `voxel_size` - Edge length of one block in world units
    /// * `block_at` - Called with local `(x, y, z)` once per cell
    pub fn generate<F>(grid_position: Point3<i32>, voxel_size: f32, mut block_at: F) -> Self
    where
        F: FnMut(u8, u8, u8) -> BlockType,
    {
        let mut cci =
            ChunkCreationIterator::new(grid_position, grid_to_world(grid_position, voxel_size));

        for y in 0..CHUNK_DIMENSION as u8 {
            for z in 0..CHUNK_DIMENSION as u8 {
                for x in 0..CHUNK_DIMENSION as u8 {
                    cci.push_block_type(block_at(x, y, z));
                }
            }
        }

        cci.return_chunk()
    }

    /// Generates a flat terrain slab with a noisy top surface.
    ///
    /// Rows strictly below `top_layer - 1` are solid, the row at `top_layer - 1`
    /// is solid or air by a fair coin flip, and everything above is air.
    ///
    /// # Arguments
    /// * `grid_position` - The chunk-grid coordinates of the new chunk
    /// * `voxel_size` - Edge length of one block in world units
    /// * `top_layer` - Height of the slab in blocks, in `0..=16`
    /// * `rng` - Source for the surface coin flips
    pub fn slab(
        grid_position: Point3<i32>,
        voxel_size: f32,
        top_layer: i32,
        rng: &mut fastrand::Rng,
    ) -> Self {
        let surface = top_layer - 1;
        Self::generate(grid_position, voxel_size, |_, y, _| {
            let y = y as i32;
            if y < surface {
                BlockType::SOLID
            } else if y == surface {
                BlockType::coin_flip(rng)
            } else {
                BlockType::AIR
            }
        })
    }

    /// Creates a new chunk filled with solid blocks.
    pub fn solid(grid_position: Point3<i32>, voxel_size: f32) -> Self {
        Self::generate(grid_position, voxel_size, |_, _, _| BlockType::SOLID)
    }

    /// `true` iff the chunk was never populated with blocks.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// The packed blocks in lattice order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The packed blocks viewed as raw words, ready for upload or hashing.
    pub fn raw_blocks(&self) -> &[u32] {
        bytemuck::cast_slice(&self.blocks)
    }

    pub(crate) fn blocks_mut(&mut self) -> &mut [Block] {
        &mut self.blocks
    }

    /// Gets the block at the specified chunk-relative coordinates.
    ///
    /// # Returns
    /// `None` for an empty shell.
    pub fn block_at(&self, x: usize, y: usize, z: usize) -> Option<Block> {
        self.blocks.get(lattice_index(x, y, z)).copied()
    }

    /// Checks if the block at the specified chunk-relative coordinates is solid.
    ///
    /// # Returns
    /// `true` if the block is solid, `false` if it's air or the chunk is a shell.
    pub fn is_block_solid(&self, x: usize, y: usize, z: usize) -> bool {
        self.solid_array
            .get(lattice_index(x, y, z))
            .map(|bit| *bit)
            .unwrap_or(false)
    }

    /// Number of solid blocks in the chunk.
    pub fn solid_count(&self) -> usize {
        self.solid_array.count_ones()
    }

    /// Iterates the solid blocks of the chunk along with their lattice index.
    pub fn solid_blocks(&self) -> ChunkBlockIterator<'_> {
        ChunkBlockIterator::new(self)
    }

    /// Whether chunk-level culling currently suppresses this face for every block.
    pub fn ignores(&self, side: BlockSide) -> bool {
        self.ignore[side as usize]
    }

    /// Sets a single chunk-level ignore flag.
    pub fn set_ignore(&mut self, side: BlockSide, ignore: bool) {
        self.ignore[side as usize] = ignore;
    }

    /// All six ignore flags, indexed by `BlockSide`.
    pub fn ignored_sides(&self) -> [bool; 6] {
        self.ignore
    }

    /// Replaces all six ignore flags at once.
    pub fn set_ignored_sides(&mut self, ignore: [bool; 6]) {
        self.ignore = ignore;
    }

    /// Checks whether a world-space point lies strictly inside this chunk's bounds.
    ///
    /// A point exactly on a boundary plane is inside neither neighbor.
    ///
    /// # Arguments
    /// * `point` - The world-space point to test
    /// * `voxel_size` - Edge length of one block in world units
    pub fn contains_point(&self, point: Point3<f32>, voxel_size: f32) -> bool {
        let edge = CHUNK_DIMENSION as f32 * voxel_size;
        let origin = self.position;

        point.x > origin.x
            && point.x < origin.x + edge
            && point.y > origin.y
            && point.y < origin.y + edge
            && point.z > origin.z
            && point.z < origin.z + edge
    }
}
