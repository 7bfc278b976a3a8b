#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Viewer
//!
//! The core of a voxel-world viewer: a bounded grid of 16x16x16 chunks is
//! generated as a flat terrain slab, hidden block faces are culled, and every
//! visible face is handed out as triangle indices for a renderer to draw.
//!
//! ## Key Modules
//!
//! * `config` - World and viewer settings, loaded from JSON
//! * `engine_state` - The frame-driven core: world, camera, culling and draw items
//!
//! ## Culling
//!
//! Two passes decide which faces reach the renderer:
//! * Internal face culling hides faces shared by two solid blocks of the same chunk
//! * Chunk-level culling hides, whenever the camera changes chunk, the faces of
//!   every other chunk that point away from the camera's chunk
//!
//! ## Usage
//!
//! ```no_run
//! fn main() {
//!     voxel_viewer::run();
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use log::{info, warn};

use config::WorldConfig;
use engine_state::{EngineState, PlayerAction};

pub mod config;
pub mod engine_state;

/// Config file read when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "voxel_viewer.json";

/// Simulated frame length of the headless session.
const FRAME_TIME: Duration = Duration::from_micros(16_667);

/// Runs a headless viewer session.
///
/// Loads the config named by the first command-line argument, generates the
/// world and flies the camera through it for one performance recording,
/// logging how much geometry each stage produced.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = read_config(Path::new(&config_path));

    let mut engine_state = EngineState::new(config);
    let start = PlayerAction {
        start_recording: true,
        ..PlayerAction::default()
    };
    engine_state.process_actions(&start, FRAME_TIME);

    let mut drawn_faces = 0usize;
    let mut index_bytes = 0usize;
    let mut chunk_changes = 0u32;
    loop {
        if engine_state.process_actions(&PlayerAction::default(), FRAME_TIME) {
            chunk_changes += 1;
        }
        let report = engine_state.advance_frame(FRAME_TIME);

        for item in engine_state.draw_list() {
            drawn_faces += item.face_count();
            index_bytes += item.index_bytes().len();
        }

        if let Some(report) = report {
            let frames = report.frames.max(1) as usize;
            info!(
                "Recorded {} frames over {} s: {} chunk changes, {} faces and {} index bytes per frame on average",
                report.frames,
                report.duration,
                chunk_changes,
                drawn_faces / frames,
                index_bytes / frames
            );
            break;
        }
    }
}

/// Loads the config at `path`, falling back to defaults when the file is
/// missing or invalid.
pub fn read_config(path: &Path) -> WorldConfig {
    if !path.exists() {
        info!("No config at {}, using defaults", path.display());
        return WorldConfig::default();
    }

    match config::load_config(path) {
        Ok(config) => {
            info!("Loaded config from {}", path.display());
            config
        }
        Err(err) => {
            warn!("Failed to load {}: {}; using defaults", path.display(), err);
            WorldConfig::default()
        }
    }
}
