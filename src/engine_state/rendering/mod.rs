//! # Rendering Module
//!
//! Turns the voxel world into draw items. The core never talks to a graphics
//! API; it hands out, per drawable block, a world-space translation and a list
//! of triangle indices into the eight corners of a shared cube.
//!
//! ## Key Components
//!
//! * `face` - The fixed per-face index table and the cube corners it refers to
//! * `block_geometry` - Face selection per block and the `BlockGeometry` draw item

pub mod block_geometry;
pub mod face;

pub use block_geometry::{block_geometry, chunk_geometry, drawn_sides, world_geometry, BlockGeometry};
pub use face::{cube_corners, face_indices, CUBE_FACE_INDICES, INDICES_PER_FACE};
