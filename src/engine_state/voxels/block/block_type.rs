//! # Block Type Module
//!
//! This module defines the block types that exist in the voxel world. The
//! world only distinguishes air from solid; any nonzero material id counts as solid.

use super::BlockTypeSize;

/// Enumerates all possible block types in the voxel world.
///
/// The discriminant is the material id stored in a packed block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// An air block, which is non-solid and never drawn.
    AIR = 0,

    /// A solid block. Generation fills the terrain slab with it.
    SOLID = 1,
}

impl BlockType {
    /// Classifies a raw material id.
    ///
    /// # Arguments
    /// * `material_id` - The material id as stored in a packed block
    ///
    /// # Returns
    /// `BlockType::AIR` for id 0, `BlockType::SOLID` for every other id
    pub fn from_material_id(material_id: BlockTypeSize) -> Self {
        if material_id == 0 {
            BlockType::AIR
        } else {
            BlockType::SOLID
        }
    }

    /// Returns the material id for this block type.
    pub fn material_id(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Picks air or solid with equal probability.
    ///
    /// # Arguments
    /// * `rng` - The generator to draw from, owned by the world being generated
    pub fn coin_flip(rng: &mut fastrand::Rng) -> Self {
        if rng.bool() {
            BlockType::SOLID
        } else {
            BlockType::AIR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_nonzero_material_is_solid() {
        assert_eq!(BlockType::from_material_id(0), BlockType::AIR);
        for id in 1..=255u8 {
            assert_eq!(BlockType::from_material_id(id), BlockType::SOLID);
        }
    }

    #[test]
    fn coin_flip_produces_both_outcomes() {
        let mut rng = fastrand::Rng::with_seed(7);
        let flips: Vec<BlockType> = (0..64).map(|_| BlockType::coin_flip(&mut rng)).collect();
        assert!(flips.contains(&BlockType::AIR));
        assert!(flips.contains(&BlockType::SOLID));
    }
}
