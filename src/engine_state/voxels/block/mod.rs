//! # Block Module
//!
//! This module provides the block codec of the voxel engine. A block is stored
//! as a single packed `u32` inside its chunk and decoded into a [`BlockData`]
//! with named fields whenever code needs to reason about it.
//!
//! ## Bit Layout
//!
//! ```text
//! 31..28  local x        (4 bits)
//! 27..24  local y        (4 bits)
//! 23..20  local z        (4 bits)
//! 19..12  material id    (8 bits)
//! 11..6   face flags     (LEFT, RIGHT, BOTTOM, TOP, FRONT, BACK)
//!  5..0   unused
//! ```

use block_side::BlockSide;
use block_type::BlockType;

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent material ids in memory.
pub type BlockTypeSize = u8;

/// Largest local coordinate a block can hold inside its chunk.
pub const MAX_LOCAL_COORDINATE: u8 = 15;

const X_SHIFT: u32 = 28;
const Y_SHIFT: u32 = 24;
const Z_SHIFT: u32 = 20;
const ID_SHIFT: u32 = 12;
const COORDINATE_MASK: u32 = 0x0F;
const ID_MASK: u32 = 0xFF;
/// Bit of the first face flag; the remaining flags follow downwards in `BlockSide` order.
const FACE_HIGH_BIT: u32 = 11;
const FACE_MASK: u32 = 0x3F << (FACE_HIGH_BIT - 5);

/// Represents a single voxel block in packed form.
///
/// # Memory Layout
/// `#[repr(transparent)]` over a `u32` so a chunk's block sequence can be handed
/// out as raw words without copying.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct Block(pub u32);

/// A decoded block with every packed field broken out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlockData {
    /// Local x coordinate inside the owning chunk (0..=15)
    pub x: u8,
    /// Local y coordinate inside the owning chunk (0..=15)
    pub y: u8,
    /// Local z coordinate inside the owning chunk (0..=15)
    pub z: u8,
    /// Material id, 0 meaning air
    pub material_id: BlockTypeSize,
    /// Face-visible flags, indexed by `BlockSide`
    pub faces: [bool; 6],
}

impl Block {
    /// Packs a block from its local coordinates and material id.
    ///
    /// All face flags start cleared.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - Local coordinates within the chunk, each in `0..=15`
    /// * `material_id` - The material id, 0 for air
    ///
    /// # Panics
    /// Panics if any coordinate is greater than 15.
    pub fn encode(x: u8, y: u8, z: u8, material_id: BlockTypeSize) -> Self {
        assert!(
            x <= MAX_LOCAL_COORDINATE && y <= MAX_LOCAL_COORDINATE && z <= MAX_LOCAL_COORDINATE,
            "local block coordinate out of range: ({}, {}, {})",
            x,
            y,
            z
        );

        Block(
            (x as u32) << X_SHIFT
                | (y as u32) << Y_SHIFT
                | (z as u32) << Z_SHIFT
                | (material_id as u32) << ID_SHIFT,
        )
    }

    /// Creates a new block of the specified type at the given local coordinates.
    pub fn new(x: u8, y: u8, z: u8, block_type: BlockType) -> Self {
        Self::encode(x, y, z, block_type.material_id())
    }

    /// Unpacks every field of the block.
    pub fn decode(self) -> BlockData {
        BlockData {
            x: self.x(),
            y: self.y(),
            z: self.z(),
            material_id: self.material_id(),
            faces: self.faces(),
        }
    }

    /// Returns a copy of this block with only the face-flag bits replaced.
    ///
    /// # Arguments
    /// * `faces` - The new face-visible flags, indexed by `BlockSide`
    pub fn with_face_flags(self, faces: [bool; 6]) -> Self {
        let mut packed = self.0 & !FACE_MASK;
        for side in BlockSide::all() {
            if faces[side as usize] {
                packed |= 1u32 << Self::face_bit(side);
            }
        }
        Block(packed)
    }

    /// Local x coordinate.
    pub fn x(self) -> u8 {
        ((self.0 >> X_SHIFT) & COORDINATE_MASK) as u8
    }

    /// Local y coordinate.
    pub fn y(self) -> u8 {
        ((self.0 >> Y_SHIFT) & COORDINATE_MASK) as u8
    }

    /// Local z coordinate.
    pub fn z(self) -> u8 {
        ((self.0 >> Z_SHIFT) & COORDINATE_MASK) as u8
    }

    /// Raw material id, 0 for air.
    pub fn material_id(self) -> BlockTypeSize {
        ((self.0 >> ID_SHIFT) & ID_MASK) as BlockTypeSize
    }

    /// Material id classified as air or solid.
    pub fn block_type(self) -> BlockType {
        BlockType::from_material_id(self.material_id())
    }

    /// `true` for any nonzero material id.
    pub fn is_solid(self) -> bool {
        self.material_id() != 0
    }

    /// Reads the face-visible flag of a single side.
    pub fn is_face_visible(self, side: BlockSide) -> bool {
        (self.0 >> Self::face_bit(side)) & 1 == 1
    }

    /// Reads all six face-visible flags in `BlockSide` order.
    pub fn faces(self) -> [bool; 6] {
        BlockSide::all().map(|side| self.is_face_visible(side))
    }

    fn face_bit(side: BlockSide) -> u32 {
        FACE_HIGH_BIT - side as u32
    }
}

impl From<BlockData> for Block {
    fn from(data: BlockData) -> Self {
        Block::encode(data.x, data.y, data.z, data.material_id).with_face_flags(data.faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_inverts_encode_over_the_whole_domain() {
        for x in 0..=15u8 {
            for y in 0..=15u8 {
                for z in 0..=15u8 {
                    for id in [0u8, 1, 2, 127, 128, 254, 255] {
                        let data = Block::encode(x, y, z, id).decode();
                        assert_eq!(
                            data,
                            BlockData {
                                x,
                                y,
                                z,
                                material_id: id,
                                faces: [false; 6]
                            }
                        );
                    }
                }
            }
        }

        for id in 0..=255u8 {
            assert_eq!(Block::encode(15, 0, 7, id).material_id(), id);
        }
    }

    #[test]
    fn face_flags_never_touch_other_fields() {
        let block = Block::encode(15, 9, 3, 255);
        for mask in 0..64u8 {
            let faces = [0u8, 1, 2, 3, 4, 5].map(|bit| mask & (1u8 << bit) != 0);
            let flagged = block.with_face_flags(faces);
            let before = block.decode();
            let after = flagged.decode();

            assert_eq!((before.x, before.y, before.z), (after.x, after.y, after.z));
            assert_eq!(before.material_id, after.material_id);
            assert_eq!(after.faces, faces);
            assert_eq!(flagged.with_face_flags([false; 6]), block);
        }
    }

    #[test]
    fn with_face_flags_replaces_rather_than_merges() {
        let all = Block::encode(1, 2, 3, 1).with_face_flags([true; 6]);
        let one = all.with_face_flags([false, false, false, true, false, false]);
        assert_eq!(one.faces(), [false, false, false, true, false, false]);
        assert!(one.is_face_visible(BlockSide::TOP));
        assert!(!one.is_face_visible(BlockSide::LEFT));
    }

    #[test]
    fn block_data_converts_back_to_the_same_word() {
        let block = Block::encode(4, 5, 6, 9).with_face_flags([true, false, true, false, true, false]);
        assert_eq!(Block::from(block.decode()), block);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn encode_rejects_coordinates_past_the_lattice() {
        Block::encode(16, 0, 0, 1);
    }
}
