//! # Internal Face Culling
//!
//! Computes, for every solid block of a chunk, which of its six faces border
//! air inside the same chunk. Faces shared by two solid blocks of the chunk are
//! marked hidden. Faces on the chunk boundary are always marked visible; this
//! pass never looks into neighboring chunks; the world's chunk-level culling
//! takes care of those.

use crate::engine_state::voxels::block::{block_side::BlockSide, Block};

use super::{Chunk, CHUNK_SIZE};

/// Flat lattice index of the neighbor behind `side`, or `None` when the block
/// sits on the chunk boundary on that side.
///
/// # Arguments
/// * `block` - The block whose neighbor is wanted, carrying its own coordinates
/// * `index` - The lattice index of `block`
pub fn neighbor_index(block: Block, index: usize, side: BlockSide) -> Option<usize> {
    if side.is_on_boundary(block.x(), block.y(), block.z()) {
        return None;
    }

    let neighbor = index.checked_add_signed(side.index_offset())?;
    debug_assert!(neighbor < CHUNK_SIZE, "neighbor index {} escaped the chunk", neighbor);
    Some(neighbor)
}

/// Determines which faces of the block at `index` are exposed within `blocks`.
///
/// # Returns
/// Six flags in `BlockSide` order; a flag is set if the neighbor on that side
/// is air or outside the chunk.
pub fn exposed_faces(blocks: &[Block], index: usize) -> [bool; 6] {
    let block = blocks[index];
    BlockSide::all().map(|side| match neighbor_index(block, index, side) {
        Some(neighbor) => !blocks[neighbor].is_solid(),
        None => true,
    })
}

impl Chunk {
    /// Recomputes the face-visible flags of every solid block in the chunk.
    ///
    /// Air blocks are left untouched. Every run overwrites the flags from
    /// scratch, so running it twice gives the same result as running it once.
    pub fn cull_internal_faces(&mut self) {
        if self.is_empty() {
            return;
        }

        let solid: Vec<usize> = self.solid_blocks().map(|(index, _)| index).collect();
        let blocks = self.blocks_mut();
        for index in solid {
            let faces = exposed_faces(blocks, index);
            blocks[index] = blocks[index].with_face_flags(faces);
        }
    }

    /// Total number of face-visible flags set across the chunk's solid blocks.
    pub fn visible_face_count(&self) -> usize {
        self.solid_blocks()
            .map(|(_, block)| block.faces().iter().filter(|visible| **visible).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Point3;

    use super::*;
    use crate::engine_state::voxels::block::block_type::BlockType;
    use crate::engine_state::voxels::chunk::{lattice_index, CHUNK_DIMENSION};

    #[test]
    fn neighbor_lookup_never_leaves_the_lattice() {
        let chunk = Chunk::solid(Point3::new(0, 0, 0), 1.0);
        for (index, block) in chunk.blocks().iter().enumerate() {
            for side in BlockSide::all() {
                match neighbor_index(*block, index, side) {
                    Some(neighbor) => {
                        assert!(neighbor < CHUNK_SIZE);
                        let n = side.normal();
                        let other = chunk.blocks()[neighbor];
                        assert_eq!(other.x() as i32, block.x() as i32 + n.x);
                        assert_eq!(other.y() as i32, block.y() as i32 + n.y);
                        assert_eq!(other.z() as i32, block.z() as i32 + n.z);
                    }
                    None => assert!(side.is_on_boundary(block.x(), block.y(), block.z())),
                }
            }
        }
    }

    #[test]
    fn solid_chunk_only_shows_its_shell() {
        let mut chunk = Chunk::solid(Point3::new(0, 0, 0), 1.0);
        chunk.cull_internal_faces();

        let last = (CHUNK_DIMENSION - 1) as u8;
        for block in chunk.blocks() {
            let (x, y, z) = (block.x(), block.y(), block.z());
            let faces = block.faces();
            assert_eq!(faces[BlockSide::LEFT as usize], x == 0);
            assert_eq!(faces[BlockSide::RIGHT as usize], x == last);
            assert_eq!(faces[BlockSide::BOTTOM as usize], y == 0);
            assert_eq!(faces[BlockSide::TOP as usize], y == last);
            assert_eq!(faces[BlockSide::FRONT as usize], z == 0);
            assert_eq!(faces[BlockSide::BACK as usize], z == last);
        }

        // 6 sides of 16x16 faces each.
        assert_eq!(chunk.visible_face_count(), 6 * 16 * 16);
    }

    #[test]
    fn isolated_block_shows_every_face_anywhere() {
        for (x, y, z) in [(0, 0, 0), (15, 15, 15), (7, 8, 9), (0, 15, 3), (15, 0, 12)] {
            let mut chunk = Chunk::generate(Point3::new(0, 0, 0), 1.0, |bx, by, bz| {
                if (bx, by, bz) == (x, y, z) {
                    BlockType::SOLID
                } else {
                    BlockType::AIR
                }
            });
            chunk.cull_internal_faces();

            let block = chunk
                .block_at(x as usize, y as usize, z as usize)
                .expect("populated chunk");
            assert_eq!(block.faces(), [true; 6], "block at {:?}", (x, y, z));
        }
    }

    #[test]
    fn air_blocks_keep_cleared_flags() {
        let mut rng = fastrand::Rng::with_seed(3);
        let mut chunk = Chunk::slab(Point3::new(0, 0, 0), 1.0, 6, &mut rng);
        chunk.cull_internal_faces();

        for block in chunk.blocks().iter().filter(|block| !block.is_solid()) {
            assert_eq!(block.faces(), [false; 6]);
        }
    }

    #[test]
    fn culling_is_idempotent() {
        let mut rng = fastrand::Rng::with_seed(5);
        let mut chunk = Chunk::slab(Point3::new(0, 0, 0), 1.0, 9, &mut rng);
        chunk.cull_internal_faces();
        let once = chunk.raw_blocks().to_vec();
        chunk.cull_internal_faces();
        assert_eq!(chunk.raw_blocks(), once.as_slice());
    }

    #[test]
    fn stacked_pair_hides_the_shared_face() {
        let mut chunk = Chunk::generate(Point3::new(0, 0, 0), 1.0, |x, y, z| {
            if x == 4 && z == 4 && (y == 4 || y == 5) {
                BlockType::SOLID
            } else {
                BlockType::AIR
            }
        });
        chunk.cull_internal_faces();

        let lower = chunk.blocks()[lattice_index(4, 4, 4)];
        let upper = chunk.blocks()[lattice_index(4, 5, 4)];
        assert!(!lower.is_face_visible(BlockSide::TOP));
        assert!(!upper.is_face_visible(BlockSide::BOTTOM));
        assert_eq!(chunk.visible_face_count(), 10);
    }
}
