//! # Block Side Module
//!
//! This module defines the different faces/sides of a voxel block and the
//! lattice step that leads from a block to its neighbor across each face.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// The discriminants double as the face-flag bit order of the packed
/// [`Block`](super::Block) and as the index into every `[bool; 6]` face array
/// in the crate.
///
/// The order is: [LEFT, RIGHT, BOTTOM, TOP, FRONT, BACK]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The left face (facing negative X)
    LEFT = 0,

    /// The right face (facing positive X)
    RIGHT = 1,

    /// The bottom face (facing negative Y)
    BOTTOM = 2,

    /// The top face (facing positive Y)
    TOP = 3,

    /// The front face (facing negative Z)
    FRONT = 4,

    /// The back face (facing positive Z)
    BACK = 5,
}

impl BlockSide {
    /// Returns an array containing all six block faces in a consistent order.
    ///
    /// The order is: [LEFT, RIGHT, BOTTOM, TOP, FRONT, BACK]
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::LEFT,
            BlockSide::RIGHT,
            BlockSide::BOTTOM,
            BlockSide::TOP,
            BlockSide::FRONT,
            BlockSide::BACK,
        ]
    }

    /// Unit step in lattice coordinates from a block to the neighbor behind this face.
    pub fn normal(&self) -> Vector3<i32> {
        match self {
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::FRONT => Vector3::new(0, 0, -1),
            BlockSide::BACK => Vector3::new(0, 0, 1),
        }
    }

    /// Offset to add to a flat lattice index to reach the neighbor behind this face.
    ///
    /// Consistent with `index = x + 16 * z + 256 * y`: X steps move by 1,
    /// Z steps by 16 and Y steps by 256.
    pub fn index_offset(&self) -> isize {
        match self {
            BlockSide::LEFT => -1,
            BlockSide::RIGHT => 1,
            BlockSide::BOTTOM => -256,
            BlockSide::TOP => 256,
            BlockSide::FRONT => -16,
            BlockSide::BACK => 16,
        }
    }

    /// Whether a block at the given local coordinates sits on the chunk boundary
    /// this face points at, so that there is no in-chunk neighbor behind it.
    pub fn is_on_boundary(&self, x: u8, y: u8, z: u8) -> bool {
        const LAST: u8 = 15;
        match self {
            BlockSide::LEFT => x == 0,
            BlockSide::RIGHT => x == LAST,
            BlockSide::BOTTOM => y == 0,
            BlockSide::TOP => y == LAST,
            BlockSide::FRONT => z == 0,
            BlockSide::BACK => z == LAST,
        }
    }
}
