use std::f32::consts::PI;

use glam::Vec3;

/// Margin keeping the polar angle off the poles, where the azimuth is
/// undefined.
pub const EPS: f32 = 0.000_001;

/// Spherical coordinates around a pivot, +Y up.
///
/// `theta` is measured from +Z towards +X around the Y axis, `phi` from +Y
/// downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Distance from the pivot.
    pub radius: f32,
    /// Azimuth in radians.
    pub theta: f32,
    /// Polar angle in radians, 0 = directly above the pivot.
    pub phi: f32,
}

impl Spherical {
    /// Decompose an offset from the pivot.
    #[must_use]
    pub fn from_offset(offset: Vec3) -> Self {
        Self {
            radius: offset.length(),
            theta: offset.x.atan2(offset.z),
            phi: offset.x.hypot(offset.z).atan2(offset.y),
        }
    }

    /// Offset from the pivot described by these coordinates.
    #[must_use]
    pub fn to_offset(self) -> Vec3 {
        let sin_phi_radius = self.radius * self.phi.sin();
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.radius * self.phi.cos(),
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Clamp `phi` into `[EPS, π - EPS]`.
    pub fn make_safe(&mut self) {
        self.phi = clamp_lenient(self.phi, EPS, PI - EPS);
    }
}

/// `max(min, min(max, value))`.
///
/// Unlike [`f32::clamp`] this does not panic when `min > max`; the lower
/// bound wins.
#[must_use]
pub fn clamp_lenient(value: f32, min: f32, max: f32) -> f32 {
    min.max(max.min(value))
}
