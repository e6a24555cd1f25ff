use glam::{Mat4, Vec3};

/// Anything the orbit controller can position: it needs to read and write
/// a world-space position and turn the object towards a point.
///
/// The controller never owns the object; callers pass it into each
/// operation that reads or moves it.
pub trait OrbitObject {
    /// World-space position.
    fn position(&self) -> Vec3;
    /// Move to a new world-space position.
    fn set_position(&mut self, position: Vec3);
    /// Orient towards `target`.
    fn look_at(&mut self, target: Vec3);
    /// Vertical field of view in degrees, used to scale panning.
    fn fovy(&self) -> f32;
}

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 10.0))
    }
}

impl Camera {
    /// Camera at `eye` looking at the origin, +Y up, 45° field of view.
    #[must_use]
    pub fn new(eye: Vec3) -> Self {
        Self {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.6,
            fovy: 45.0,
            znear: 0.1,
            zfar: 2000.0,
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Unit vector from the eye towards the target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }
}

impl OrbitObject for Camera {
    fn position(&self) -> Vec3 {
        self.eye
    }

    fn set_position(&mut self, position: Vec3) {
        self.eye = position;
    }

    fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    fn fovy(&self) -> f32 {
        self.fovy
    }
}
