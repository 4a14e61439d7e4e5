//! Camera types shared with the host renderer, plus the constraint the
//! carousel applies to the camera while it is open.

pub mod camera;
pub mod constraint;
#[cfg(feature = "input")]
pub mod controller;

pub use camera::{Camera, CameraPose, EulerRotation};
pub use constraint::{yaw_facing, CameraConstraint};
#[cfg(feature = "input")]
pub use controller::{Controller, KeyAction};
