//! Per-block draw items.
//!
//! A face of a solid block is drawn when internal culling is off or the block
//! marks the face visible, and its chunk does not ignore that face.

use cgmath::{EuclideanSpace, Vector3};

use crate::engine_state::voxels::{
    block::{block_side::BlockSide, Block},
    chunk::Chunk,
    world::World,
};

use super::face::{face_indices, INDICES_PER_FACE};

/// What a renderer needs to draw one block: where it goes and which
/// triangles of the shared unit cube to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockGeometry {
    /// World-space translation of the block's centre
    pub translation: Vector3<f32>,
    /// Triangle indices into the eight cube corners
    pub indices: Vec<u32>,
}

impl BlockGeometry {
    /// Number of face quads in this item.
    pub fn face_count(&self) -> usize {
        self.indices.len() / INDICES_PER_FACE
    }

    /// The index list as raw bytes, for an index buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Decides which faces of `block` are drawn.
///
/// # Arguments
/// * `block` - The packed block, carrying its own face-visible flags
/// * `chunk_ignores` - The owning chunk's ignore flags, indexed by `BlockSide`
/// * `internal_culling` - Whether the block's face-visible flags are honored
///
/// # Returns
/// Six flags in `BlockSide` order; all `false` for an air block.
pub fn drawn_sides(block: Block, chunk_ignores: [bool; 6], internal_culling: bool) -> [bool; 6] {
    if !block.is_solid() {
        return [false; 6];
    }

    BlockSide::all().map(|side| {
        let exposed = !internal_culling || block.is_face_visible(side);
        exposed && !chunk_ignores[side as usize]
    })
}

/// Builds the draw item of one block.
///
/// # Returns
/// `None` for air and for a solid block with no drawn face.
pub fn block_geometry(
    chunk: &Chunk,
    block: Block,
    voxel_size: f32,
    internal_culling: bool,
) -> Option<BlockGeometry> {
    let sides = drawn_sides(block, chunk.ignored_sides(), internal_culling);

    let mut indices = Vec::with_capacity(INDICES_PER_FACE * 6);
    for side in BlockSide::all() {
        if sides[side as usize] {
            indices.extend_from_slice(face_indices(side));
        }
    }

    if indices.is_empty() {
        return None;
    }

    let local = Vector3::new(block.x() as f32, block.y() as f32, block.z() as f32);
    Some(BlockGeometry {
        translation: chunk.position.to_vec() + local * voxel_size,
        indices,
    })
}

/// Draw items of every solid block of a chunk, in lattice order.
pub fn chunk_geometry(
    chunk: &Chunk,
    voxel_size: f32,
    internal_culling: bool,
) -> impl Iterator<Item = BlockGeometry> + '_ {
    chunk
        .solid_blocks()
        .filter_map(move |(_, block)| block_geometry(chunk, block, voxel_size, internal_culling))
}

/// Draw items of the whole world. Empty shells contribute nothing.
pub fn world_geometry(world: &World) -> Vec<BlockGeometry> {
    let voxel_size = world.voxel_size();
    let internal_culling = world.internal_face_culling();

    world
        .chunks()
        .iter()
        .filter(|chunk| !chunk.is_empty())
        .flat_map(|chunk| chunk_geometry(chunk, voxel_size, internal_culling))
        .collect()
}
