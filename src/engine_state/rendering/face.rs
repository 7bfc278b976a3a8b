//! The shared unit cube every block is drawn with.
//!
//! Blocks never carry their own vertices. A draw item selects faces of this
//! cube by index and places it with a translation.

use cgmath::Point3;

use crate::engine_state::voxels::block::block_side::BlockSide;

/// Triangle indices of each face quad, indexed by `BlockSide`.
///
/// Each face is two triangles over the eight corners of [`cube_corners`]. The
/// winding inside each face is fixed and shared by every block.
pub const CUBE_FACE_INDICES: [[u32; 6]; 6] = [
    [4, 6, 2, 4, 2, 0], // LEFT
    [1, 3, 7, 1, 7, 5], // RIGHT
    [4, 0, 1, 4, 1, 5], // BOTTOM
    [2, 6, 7, 2, 7, 3], // TOP
    [0, 2, 3, 0, 3, 1], // FRONT
    [4, 6, 7, 4, 7, 5], // BACK
];

/// Number of indices a single face contributes.
pub const INDICES_PER_FACE: usize = 6;

/// The triangle indices of one face.
pub fn face_indices(side: BlockSide) -> &'static [u32; INDICES_PER_FACE] {
    &CUBE_FACE_INDICES[side as usize]
}

/// The eight corners of a block centred on its translation.
///
/// Corner `i` sits on the positive side of X when bit 0 of `i` is set, of Y
/// for bit 1, and of Z for bit 2.
pub fn cube_corners(voxel_size: f32) -> [Point3<f32>; 8] {
    let half = voxel_size / 2.0;
    std::array::from_fn(|i| {
        let pick = |bit: usize| if i & (1 << bit) != 0 { half } else { -half };
        Point3::new(pick(0), pick(1), pick(2))
    })
}
