use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Orbit controller limits, speeds and gesture switches.
///
/// Every field is read on each `update()`, so changes made between frames
/// take effect on the next frame.
pub struct ControlOptions {
    /// Dolly speed; each wheel step scales the radius by `0.95^zoom_speed`.
    pub zoom_speed: f32,
    /// Disables wheel and pinch dollying.
    pub no_zoom: bool,
    /// Lower bound on the camera distance from the target.
    pub min_distance: f32,
    /// Upper bound on the camera distance from the target.
    pub max_distance: f32,
    /// Rotation sensitivity; a drag across the whole surface is
    /// `2π * rotate_speed` radians.
    pub rotate_speed: f32,
    /// Disables pointer and touch rotation.
    pub no_rotate: bool,
    /// Pixels moved per arrow-key press.
    pub key_pan_speed: f32,
    /// Disables keyboard and three-finger panning.
    pub no_pan: bool,
    /// Spin around the target on every update.
    pub auto_rotate: bool,
    /// Auto-rotation speed; 2.0 is one revolution per 30 s at 60 fps.
    pub auto_rotate_speed: f32,
    /// Lowest polar angle in radians (0 = looking straight down).
    pub min_polar_angle: f32,
    /// Highest polar angle in radians (π = looking straight up).
    pub max_polar_angle: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            zoom_speed: 1.0,
            no_zoom: false,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            rotate_speed: 1.0,
            no_rotate: false,
            key_pan_speed: 7.0,
            no_pan: false,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
        }
    }
}

impl ControlOptions {
    /// Angle swept by one auto-rotation step (one frame at 60 fps).
    #[must_use]
    pub fn auto_rotation_angle(&self) -> f32 {
        2.0 * PI / 60.0 / 60.0 * self.auto_rotate_speed
    }

    /// Radius multiplier for one dolly step.
    #[must_use]
    pub fn zoom_scale(&self) -> f32 {
        0.95_f32.powf(self.zoom_speed)
    }
}
