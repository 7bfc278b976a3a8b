//! # Camera Implementation
//!
//! A free-flying camera reduced to what the voxel core needs: where it is,
//! which way it moves, and whether it is locked. When the camera is locked it
//! keeps flying, but visibility decisions use the pose captured at the moment
//! of locking.

use cgmath::{InnerSpace, Point3, Vector3};

use crate::config::CameraConfig;

use super::CameraQuery;

/// Represents a first-person camera in 3D space.
#[derive(Debug, Clone)]
pub struct Camera {
    /// The camera's position in world space
    position: Point3<f32>,
    /// Normalized viewing direction
    front: Vector3<f32>,
    /// World up vector
    up: Vector3<f32>,
    /// Distance covered by a unit translation
    speed: f32,
    /// Whether visibility decisions use the captured pose
    locked: bool,
    locked_position: Point3<f32>,
    locked_front: Vector3<f32>,
    locked_up: Vector3<f32>,
}

impl Camera {
    /// Creates a new unlocked camera.
    ///
    /// # Arguments
    /// * `position` - Initial position of the camera in world space
    /// * `front` - Initial viewing direction; normalized here
    /// * `up` - World up vector
    /// * `speed` - Distance covered by a unit translation
    pub fn new(position: Point3<f32>, front: Vector3<f32>, up: Vector3<f32>, speed: f32) -> Self {
        let front = front.normalize();
        Camera {
            position,
            front,
            up,
            speed,
            locked: false,
            locked_position: position,
            locked_front: front,
            locked_up: up,
        }
    }

    /// Creates a camera at the configured start pose.
    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.position, config.front, config.up, config.speed)
    }

    /// Moves the camera back to the given pose. The lock state is left alone.
    pub fn reset(&mut self, position: Point3<f32>, front: Vector3<f32>, up: Vector3<f32>) {
        self.position = position;
        self.front = front.normalize();
        self.up = up;
    }

    /// Moves the camera by `direction` scaled by the current speed.
    pub fn translate(&mut self, direction: Vector3<f32>) {
        self.position += direction * self.speed;
    }

    /// Sets the distance covered by a unit translation.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Places the camera without going through the speed scaling.
    pub fn set_position(&mut self, position: Point3<f32>) {
        self.position = position;
    }

    /// Locks or unlocks the camera. Locking captures the current pose.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;

        if locked {
            self.locked_position = self.position;
            self.locked_front = self.front;
            self.locked_up = self.up;
        }
    }

    /// Normalized viewing direction.
    pub fn front(&self) -> Vector3<f32> {
        self.front
    }

    /// Normalized vector pointing to the camera's right.
    pub fn right(&self) -> Vector3<f32> {
        self.front.cross(self.up).normalize()
    }

    /// Normalized up vector relative to the viewing direction.
    pub fn relative_up(&self) -> Vector3<f32> {
        self.right().cross(self.front).normalize()
    }

    /// Viewing direction captured when the camera was last locked.
    pub fn locked_front(&self) -> Vector3<f32> {
        self.locked_front
    }

    /// Up vector captured when the camera was last locked.
    pub fn locked_up(&self) -> Vector3<f32> {
        self.locked_up
    }
}

impl CameraQuery for Camera {
    fn position(&self) -> Point3<f32> {
        self.position
    }

    fn locked_position(&self) -> Point3<f32> {
        self.locked_position
    }

    fn is_locked(&self) -> bool {
        self.locked
    }
}
