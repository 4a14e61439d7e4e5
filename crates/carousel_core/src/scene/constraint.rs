//! Camera constraint for the carousel view.
//!
//! While a carousel is open the viewer stands in the middle of the ring and
//! can only turn on the spot: position is pinned to the origin, pitch and
//! roll are forced to zero and yaw follows the smoothed carousel angle.
//!
//! The pose the camera had before the carousel took it over is captured on
//! [`CameraConstraint::acquire`] and written back on
//! [`CameraConstraint::release`], so whatever view is shown after the
//! carousel closes starts exactly where it left off.

use std::f32::consts::PI;

use glam::Vec3;

use super::camera::{Camera, CameraPose, EulerRotation};

/// Yaw that makes a camera at the origin look at the item sitting at
/// carousel angle `angle` (items are placed at `(sin a, 0, cos a) * r`).
#[inline]
pub fn yaw_facing(angle: f32) -> f32 {
    angle + PI
}

/// Scoped hold on a camera's pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConstraint {
    saved: CameraPose,
}

impl CameraConstraint {
    /// Capture the current pose of `camera`.  Nothing is modified until the
    /// first [`apply`](Self::apply).
    pub fn acquire(camera: &Camera) -> Self {
        let saved = camera.pose();
        log::debug!(
            "camera constraint acquired (pos {:?}, yaw {:.3})",
            saved.position,
            saved.rotation.yaw
        );
        Self { saved }
    }

    /// Pose captured at acquisition.
    pub fn saved_pose(&self) -> CameraPose {
        self.saved
    }

    /// Per-frame correction: pin to the origin, keep only yaw.
    pub fn apply(&self, camera: &mut Camera, carousel_angle: f32) {
        camera.position = Vec3::ZERO;
        camera.rotation = EulerRotation::from_yaw(yaw_facing(carousel_angle));
    }

    /// Put the captured pose back.
    pub fn release(self, camera: &mut Camera) {
        camera.set_pose(self.saved);
        log::debug!("camera constraint released, pose restored");
    }
}
