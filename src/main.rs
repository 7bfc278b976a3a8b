//! # Voxel Viewer Entry Point
//!
//! Calls into the library's `run()` function to start a headless session.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release -- voxel_viewer.json
//! ```

fn main() {
    voxel_viewer::run();
}
