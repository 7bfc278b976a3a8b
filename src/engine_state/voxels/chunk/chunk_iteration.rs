//! # Chunk Iteration Module
//!
//! This module provides an iterator over the solid blocks of a chunk. It walks
//! the chunk's `solid_array` bit vector to jump straight from one solid block
//! to the next, so air cells are never decoded.

use bitvec::order::Lsb0;
use bitvec::slice::IterOnes;

use crate::engine_state::voxels::block::Block;

use super::Chunk;

/// An iterator over all non-air blocks in a chunk.
///
/// Yields `(lattice_index, block)` pairs in lattice order. An empty shell
/// yields nothing.
pub struct ChunkBlockIterator<'a> {
    /// Reference to the chunk being iterated over
    chunk_ref: &'a Chunk,
    /// Positions of the set bits of the chunk's solid array
    solid_offsets: IterOnes<'a, usize, Lsb0>,
}

impl<'a> ChunkBlockIterator<'a> {
    /// Creates a new `ChunkBlockIterator` for the given chunk.
    pub fn new(chunk_ref: &'a Chunk) -> Self {
        ChunkBlockIterator {
            chunk_ref,
            solid_offsets: chunk_ref.solid_array.iter_ones(),
        }
    }

    /// Gets the next non-air block in the chunk along with its lattice index.
    ///
    /// # Returns
    /// - `Some((index, block))` if another non-air block is found
    /// - `None` if there are no more blocks to iterate over
    pub fn get_next_block(&mut self) -> Option<(usize, Block)> {
        let index = self.solid_offsets.next()?;
        Some((index, self.chunk_ref.blocks[index]))
    }
}

impl<'a> Iterator for ChunkBlockIterator<'a> {
    type Item = (usize, Block);

    fn next(&mut self) -> Option<Self::Item> {
        self.get_next_block()
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Point3;

    use crate::engine_state::voxels::block::block_type::BlockType;
    use crate::engine_state::voxels::chunk::{lattice_index, Chunk};

    #[test]
    fn yields_only_solid_blocks_in_order() {
        let chunk = Chunk::generate(Point3::new(0, 0, 0), 1.0, |x, y, z| {
            if (x, y, z) == (3, 0, 0) || (x, y, z) == (0, 2, 5) {
                BlockType::SOLID
            } else {
                BlockType::AIR
            }
        });

        let found: Vec<usize> = chunk.solid_blocks().map(|(index, _)| index).collect();
        assert_eq!(found, vec![lattice_index(3, 0, 0), lattice_index(0, 2, 5)]);

        for (index, block) in chunk.solid_blocks() {
            assert!(block.is_solid());
            assert_eq!(chunk.blocks()[index], block);
        }
    }

    #[test]
    fn shells_yield_nothing() {
        let chunk = Chunk::empty(Point3::new(0, 0, 0), 1.0);
        assert_eq!(chunk.solid_blocks().count(), 0);
    }
}
