//! # Engine State Module
//!
//! The frame-driven core of the viewer.
//!
//! ## Key Components
//!
//! * `EngineState` - Owns the world and the camera and runs one frame at a time
//! * `camera_state` - The camera query interface and the camera the viewer drives
//! * `rendering` - Turns the world into per-block draw items
//! * `voxels` - Blocks, chunks, world generation and culling
//!
//! ## Frame Order
//!
//! Each frame first feeds the player's actions through
//! [`EngineState::process_actions`], which moves the camera and, if anything
//! could have changed which chunk the camera is in, re-runs chunk-level
//! culling. [`EngineState::advance_frame`] then steps the recording
//! flythrough, and [`EngineState::draw_list`] reads the result. Everything
//! runs on one thread; the world is only ever mutated through `EngineState`.

use std::time::Duration;

use cgmath::Vector3;
use log::{debug, info};

use crate::config::WorldConfig;
use camera_state::{Camera, CameraQuery};
use rendering::BlockGeometry;
use voxels::world::World;

pub mod camera_state;
pub mod rendering;
pub mod voxels;

/// Represents player actions derived from input for a single frame
///
/// Movement flags are true while the key is held; the toggles and triggers
/// are true only on the frame they were pressed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlayerAction {
    /// Move along the viewing direction
    pub move_forward: bool,
    /// Move against the viewing direction
    pub move_backward: bool,
    /// Strafe left
    pub move_left: bool,
    /// Strafe right
    pub move_right: bool,
    /// Move along the camera's relative up
    pub move_up: bool,
    /// Move against the camera's relative up
    pub move_down: bool,
    /// Move at sprint speed
    pub sprint: bool,

    /// Lock or unlock the camera's culling position
    pub toggle_lock: bool,
    /// Return the camera to its configured start pose
    pub reset_camera: bool,
    /// Start a performance recording unless one is running
    pub start_recording: bool,
}

/// Result of a finished performance recording.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordingReport {
    /// Frames advanced while the recording ran
    pub frames: u32,
    /// Configured recording length in seconds
    pub duration: f32,
}

/// A running performance recording.
#[derive(Debug, Clone, Copy)]
struct Recording {
    remaining: f32,
    frames: u32,
}

/// The main state container of the viewer
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use voxel_viewer::config::WorldConfig;
/// use voxel_viewer::engine_state::{EngineState, PlayerAction};
///
/// let mut engine_state = EngineState::new(WorldConfig::default());
/// let frame = Duration::from_millis(16);
///
/// engine_state.process_actions(&PlayerAction::default(), frame);
/// engine_state.advance_frame(frame);
/// let draw_list = engine_state.draw_list();
/// assert!(!draw_list.is_empty());
/// ```
pub struct EngineState {
    /// The voxel world containing all chunk data
    world: World,
    /// The free-flying camera
    camera: Camera,
    /// Settings the engine was built with
    config: WorldConfig,
    /// Whether something happened since the last chunk check that could move
    /// the camera into another chunk
    chunk_check_pending: bool,
    /// The flythrough in progress, if any
    recording: Option<Recording>,
}

impl EngineState {
    /// Creates the engine state and generates the world.
    pub fn new(config: WorldConfig) -> Self {
        let mut world = World::new(config.clone());
        world.generate();

        EngineState {
            world,
            camera: Camera::from_config(&config.camera),
            config,
            chunk_check_pending: true,
            recording: None,
        }
    }

    /// Applies one frame of player actions, then re-runs chunk-level culling
    /// if anything since the last check could have changed the camera's chunk.
    ///
    /// # Arguments
    /// * `actions` - The player's actions for this frame
    /// * `dt` - The time elapsed since the last frame
    ///
    /// # Returns
    /// `true` if the chunk ignore flags were recomputed this frame.
    pub fn process_actions(&mut self, actions: &PlayerAction, dt: Duration) -> bool {
        if actions.reset_camera {
            self.reset_camera();
            self.chunk_check_pending = true;
        }

        if actions.toggle_lock {
            let locked = !self.camera.is_locked();
            self.camera.set_locked(locked);
            info!("Camera {}", if locked { "locked" } else { "unlocked" });
            self.chunk_check_pending = true;
        }

        if actions.start_recording && self.recording.is_none() {
            self.reset_camera();
            self.recording = Some(Recording {
                remaining: self.config.recording.duration,
                frames: 0,
            });
            info!(
                "Recording performance for {} seconds",
                self.config.recording.duration
            );
        }

        if self.recording.is_some() {
            self.chunk_check_pending = true;
        }

        let speed = if actions.sprint {
            self.config.camera.sprint_speed
        } else {
            self.config.camera.speed
        };
        self.camera.set_speed(speed * dt.as_secs_f32());

        let front = self.camera.front();
        let right = self.camera.right();
        let up = self.camera.relative_up();
        let moves = [
            (actions.move_forward, front),
            (actions.move_backward, -front),
            (actions.move_left, -right),
            (actions.move_right, right),
            (actions.move_up, up),
            (actions.move_down, -up),
        ];
        for (active, direction) in moves {
            if active {
                self.camera.translate(direction);
                if !self.camera.is_locked() {
                    self.chunk_check_pending = true;
                }
            }
        }

        self.settle_chunk_check()
    }

    /// Steps the recording flythrough by one frame.
    ///
    /// Every recorded frame moves the camera, including the one that ends the
    /// recording.
    ///
    /// # Returns
    /// The report of the recording if it finished this frame.
    pub fn advance_frame(&mut self, dt: Duration) -> Option<RecordingReport> {
        let recording = self.recording.as_mut()?;
        let seconds = dt.as_secs_f32();

        recording.remaining -= seconds;
        recording.frames += 1;

        let report = (recording.remaining <= 0.0).then(|| RecordingReport {
            frames: recording.frames,
            duration: self.config.recording.duration,
        });

        let step = seconds * self.config.recording.speed;
        let position = self.camera.position() + Vector3::new(step, 0.0, step);
        self.camera.set_position(position);

        if let Some(report) = report {
            self.recording = None;
            info!("Amount of frames: {}", report.frames);
        }
        report
    }

    /// Throws the world away and generates it again. The next frame re-runs
    /// chunk-level culling against the new chunks.
    pub fn regenerate_world(&mut self) {
        self.world.regenerate();
        self.chunk_check_pending = true;
    }

    /// Draw items for every visible block of the world.
    pub fn draw_list(&self) -> Vec<BlockGeometry> {
        rendering::world_geometry(&self.world)
    }

    /// The voxel world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Whether a chunk check is waiting for the next frame.
    pub fn chunk_check_pending(&self) -> bool {
        self.chunk_check_pending
    }

    /// Whether a performance recording is running.
    pub fn is_recording(&self) -> bool {
        self.recording.is_some()
    }

    fn reset_camera(&mut self) {
        let start = self.config.camera;
        self.camera.reset(start.position, start.front, start.up);
    }

    fn settle_chunk_check(&mut self) -> bool {
        if !(self.chunk_check_pending && self.config.chunk_culling) {
            return false;
        }

        self.chunk_check_pending = false;
        let updated = self.world.check_chunk(&self.camera);
        if updated {
            debug!(
                "Closest chunk now at {:?}",
                self.world.closest_chunk_position()
            );
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Point3;

    use super::*;

    const FRAME: Duration = Duration::from_millis(100);

    fn config() -> WorldConfig {
        WorldConfig {
            seed: Some(1),
            ..WorldConfig::default()
        }
    }

    #[test]
    fn first_frame_settles_the_initial_check() {
        let mut engine = EngineState::new(config());
        assert!(engine.chunk_check_pending());
        engine.process_actions(&PlayerAction::default(), FRAME);
        assert!(!engine.chunk_check_pending());

        // Start (-2, 8, -2) sits exactly on the plane between chunk rows 0 and 1,
        // so no chunk claims it yet.
        assert_eq!(
            engine.world().closest_chunk_position(),
            Point3::new(0.0, 0.0, 0.0)
        );

        let down = PlayerAction {
            move_down: true,
            ..PlayerAction::default()
        };
        assert!(engine.process_actions(&down, FRAME));
        assert_eq!(
            engine.world().closest_chunk_position(),
            Point3::new(-8.0, 0.0, -8.0)
        );
    }

    #[test]
    fn idle_frames_stay_settled() {
        let mut engine = EngineState::new(config());
        engine.process_actions(&PlayerAction::default(), FRAME);
        assert!(!engine.process_actions(&PlayerAction::default(), FRAME));
        assert!(!engine.chunk_check_pending());
    }

    #[test]
    fn locked_movement_does_not_mark_stale() {
        let mut engine = EngineState::new(config());
        engine.process_actions(&PlayerAction::default(), FRAME);

        let lock = PlayerAction {
            toggle_lock: true,
            ..PlayerAction::default()
        };
        engine.process_actions(&lock, FRAME);
        assert!(engine.camera().is_locked());

        let forward = PlayerAction {
            move_forward: true,
            ..PlayerAction::default()
        };
        let before = engine.camera().position();
        assert!(!engine.process_actions(&forward, FRAME));
        assert_ne!(engine.camera().position(), before);
        assert_eq!(engine.camera().locked_position(), before);
    }

    #[test]
    fn disabled_chunk_culling_leaves_flags_alone() {
        let mut engine = EngineState::new(WorldConfig {
            chunk_culling: false,
            ..config()
        });
        let forward = PlayerAction {
            move_forward: true,
            ..PlayerAction::default()
        };
        assert!(!engine.process_actions(&forward, FRAME));
        assert!(engine.chunk_check_pending());
        assert!(engine
            .world()
            .chunks()
            .iter()
            .all(|chunk| chunk.ignored_sides() == [false; 6]));
    }

    #[test]
    fn recording_runs_for_its_duration() {
        let mut engine = EngineState::new(WorldConfig {
            recording: crate::config::RecordingConfig {
                duration: 1.0,
                speed: 3.0,
            },
            ..config()
        });
        let start = PlayerAction {
            start_recording: true,
            ..PlayerAction::default()
        };
        engine.process_actions(&start, FRAME);
        assert!(engine.is_recording());

        let mut report = None;
        for _ in 0..20 {
            engine.process_actions(&PlayerAction::default(), Duration::from_millis(250));
            if let Some(done) = engine.advance_frame(Duration::from_millis(250)) {
                report = Some(done);
                break;
            }
        }

        let report = report.expect("recording finishes");
        assert_eq!(report.frames, 4);
        assert!(!engine.is_recording());
        // Four flythrough steps of 0.75 along X and Z from the start position,
        // the last one taken on the frame that ends the recording.
        assert_eq!(engine.camera().position(), Point3::new(1.0, 8.0, 1.0));
    }

    #[test]
    fn reset_marks_stale() {
        let mut start = crate::config::CameraConfig::default();
        start.position = Point3::new(12.0, 2.0, 4.0);
        let mut engine = EngineState::new(WorldConfig {
            camera: start,
            ..config()
        });
        assert!(engine.process_actions(&PlayerAction::default(), FRAME));
        assert_eq!(
            engine.world().closest_chunk_position(),
            Point3::new(8.0, 0.0, 0.0)
        );

        // One sprinting second carries the camera into the shell at (2, -1, 1).
        let sprint = PlayerAction {
            move_forward: true,
            sprint: true,
            ..PlayerAction::default()
        };
        assert!(engine.process_actions(&sprint, Duration::from_secs(1)));
        assert_eq!(
            engine.world().closest_chunk_position(),
            Point3::new(16.0, -8.0, 8.0)
        );
        assert!(!engine.process_actions(&PlayerAction::default(), FRAME));

        let reset = PlayerAction {
            reset_camera: true,
            ..PlayerAction::default()
        };
        assert!(engine.process_actions(&reset, FRAME));
        assert_eq!(engine.camera().position(), Point3::new(12.0, 2.0, 4.0));
        assert_eq!(
            engine.world().closest_chunk_position(),
            Point3::new(8.0, 0.0, 0.0)
        );
    }

    #[test]
    fn regeneration_marks_stale() {
        let mut engine = EngineState::new(config());
        engine.process_actions(&PlayerAction::default(), FRAME);
        engine.regenerate_world();
        assert!(engine.chunk_check_pending());
        assert_eq!(
            engine.world().closest_chunk_position(),
            Point3::new(0.0, 0.0, 0.0)
        );
        assert!(!engine.draw_list().is_empty());
    }
}
