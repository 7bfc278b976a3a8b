//! # Chunk Creation Module
//!
//! This module provides a builder for populating a chunk block by block in
//! lattice order. It keeps the packed block sequence and the solidity bit
//! vector in step with each other, and stamps every packed block with the
//! local coordinates of the cell it was pushed into.

use bitvec::vec::BitVec;
use cgmath::Point3;

use crate::engine_state::voxels::block::{block_type::BlockType, Block};

use super::{Chunk, CHUNK_DIMENSION, CHUNK_SIZE};

/// A builder for creating and populating chunks.
///
/// Blocks must be pushed in lattice order: X fastest, then Z, then Y.
pub struct ChunkCreationIterator {
    /// The chunk-grid position of the chunk being created
    grid_position: Point3<i32>,
    /// The world-space origin of the chunk being created
    position: Point3<f32>,
    /// One bit per pushed block, set for solid blocks
    solid_array: BitVec,
    /// Packed blocks pushed so far
    blocks: Vec<Block>,
    /// Current X position within the chunk
    local_x: u8,
    /// Current Y position within the chunk
    local_y: u8,
    /// Current Z position within the chunk
    local_z: u8,
}

impl ChunkCreationIterator {
    /// Creates a new `ChunkCreationIterator` for building a chunk.
    ///
    /// # Arguments
    /// * `grid_position` - The chunk-grid position of the chunk to create
    /// * `position` - The world-space origin of the chunk to create
    pub fn new(grid_position: Point3<i32>, position: Point3<f32>) -> Self {
        ChunkCreationIterator {
            grid_position,
            position,
            solid_array: BitVec::with_capacity(CHUNK_SIZE),
            blocks: Vec::with_capacity(CHUNK_SIZE),
            local_x: 0,
            local_y: 0,
            local_z: 0,
        }
    }

    /// Finalizes the chunk creation and returns the constructed `Chunk`.
    ///
    /// # Panics
    /// Panics if fewer than `CHUNK_SIZE` blocks were pushed.
    pub fn return_chunk(self) -> Chunk {
        assert_eq!(
            self.blocks.len(),
            CHUNK_SIZE,
            "chunk at {:?} built with an incomplete lattice",
            self.grid_position
        );

        Chunk {
            grid_position: self.grid_position,
            position: self.position,
            empty: false,
            blocks: self.blocks,
            solid_array: self.solid_array,
            ignore: [false; 6],
        }
    }

    /// Adds a block to the chunk at the current position and advances the position.
    ///
    /// # Arguments
    /// * `block_type` - The type of block to add
    pub fn push_block_type(&mut self, block_type: BlockType) {
        debug_assert!(self.blocks.len() < CHUNK_SIZE, "chunk lattice already full");

        self.blocks.push(Block::new(
            self.local_x,
            self.local_y,
            self.local_z,
            block_type,
        ));
        self.solid_array.push(block_type != BlockType::AIR);

        // Move to the next position
        self.local_x += 1;

        // Handle end of row (X boundary)
        if self.local_x as usize == CHUNK_DIMENSION {
            self.local_x = 0;
            self.local_z += 1;

            // Handle end of plane (Z boundary)
            if self.local_z as usize == CHUNK_DIMENSION {
                self.local_z = 0;
                self.local_y += 1;
            }
        }
    }
}
