use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

/// Euler rotation in radians, applied yaw → pitch → roll (Y, X, Z).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerRotation {
    /// Rotation about the X axis (looking up / down).
    pub pitch: f32,
    /// Rotation about the vertical Y axis (turning left / right).
    pub yaw: f32,
    /// Rotation about the Z axis (tilting the horizon).
    pub roll: f32,
}

impl EulerRotation {
    pub const ZERO: Self = Self { pitch: 0.0, yaw: 0.0, roll: 0.0 };

    pub fn from_yaw(yaw: f32) -> Self {
        Self { yaw, ..Self::ZERO }
    }

    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, self.roll)
    }
}

/// Position and orientation of a camera, without projection parameters.
///
/// This is what the carousel captures on mount and puts back on unmount.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: EulerRotation,
}

/// Perspective camera shared with the host renderer.
///
/// The renderer owns GPU resources (uniform buffers); this struct only holds
/// the parameters so the carousel and the host can both reason about them.
/// With all rotations at zero the camera looks down `-Z` with `+Y` up.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    // --- view parameters --------------------------------------------------
    pub position: Vec3,
    pub rotation: EulerRotation,
    // --- projection parameters --------------------------------------------
    pub fovy: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: EulerRotation::ZERO,
            fovy: 60.0f32.to_radians(),
            aspect: 16.0 / 9.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl Camera {
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            rotation: self.rotation,
        }
    }

    pub fn set_pose(&mut self, pose: CameraPose) {
        self.position = pose.position;
        self.rotation = pose.rotation;
    }

    /// Unit vector the camera is looking along.
    pub fn forward(&self) -> Vec3 {
        self.rotation.to_quat() * Vec3::NEG_Z
    }

    /// World → view transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation.to_quat(), self.position).inverse()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar)
    }

    /// Build the combined view-projection matrix from the current parameters.
    pub fn build_view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update aspect ratio when viewport dimensions change.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Project a world-space point to viewport pixels (origin top-left).
    ///
    /// Returns `None` for points behind the camera or outside the depth
    /// range; overlays anchored to such points are hidden.
    pub fn project_to_screen(&self, point: Vec3, viewport: (u32, u32)) -> Option<Vec2> {
        let clip = self.build_view_projection_matrix() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        if !(0.0..=1.0).contains(&ndc.z) {
            return None;
        }
        let (w, h) = (viewport.0 as f32, viewport.1 as f32);
        Some(Vec2::new((ndc.x + 1.0) * 0.5 * w, (1.0 - ndc.y) * 0.5 * h))
    }
}
