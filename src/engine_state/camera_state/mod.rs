//! # Camera State Management
//!
//! The voxel core never owns or mutates a camera. It only asks one where it
//! is, through [`CameraQuery`]. [`camera::Camera`] is the implementation the
//! viewer drives.

use cgmath::Point3;

pub mod camera;

pub use camera::Camera;

/// Read-only view of a camera, as consumed by chunk-level culling.
pub trait CameraQuery {
    /// Live camera position in world space.
    fn position(&self) -> Point3<f32>;

    /// Position captured when the camera was last locked.
    fn locked_position(&self) -> Point3<f32>;

    /// Whether the camera is locked.
    fn is_locked(&self) -> bool;

    /// The position visibility decisions should use: the captured one while
    /// locked, the live one otherwise.
    fn effective_position(&self) -> Point3<f32> {
        if self.is_locked() {
            self.locked_position()
        } else {
            self.position()
        }
    }
}

/// A camera frozen at a single point, for driving culling without a viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedCamera(pub Point3<f32>);

impl CameraQuery for FixedCamera {
    fn position(&self) -> Point3<f32> {
        self.0
    }

    fn locked_position(&self) -> Point3<f32> {
        self.0
    }

    fn is_locked(&self) -> bool {
        false
    }
}
