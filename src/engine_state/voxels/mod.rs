//! # Voxel Engine Core
//!
//! This module contains the voxel data and the culling that decides which of
//! its faces are worth drawing.
//!
//! ## Architecture
//!
//! * **Block**: The packed block codec, block sides and block types
//! * **Chunk**: A dense 16x16x16 lattice of packed blocks plus chunk-level
//!   ignore flags, and the internal face culling pass over it
//! * **World**: Owns every chunk, generates them, and recomputes chunk ignore
//!   flags when the camera moves into another chunk
//!
//! ## Data Flow
//!
//! 1. World generation builds every chunk of the chunk range in one go
//! 2. Populated chunks get their internal faces culled
//! 3. Camera movement triggers a chunk check, which updates chunk ignore flags
//! 4. The rendering module reads both kinds of flags to build draw items

pub mod block;
pub mod chunk;
pub mod world;
