use serde::{Deserialize, Serialize};

/// Controller actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML files stay readable:
/// ```toml
/// [keybindings.bindings]
/// pan_up = "ArrowUp"
/// pan_left = "KeyA"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move the target up by `key_pan_speed` pixels.
    PanUp,
    /// Move the target down by `key_pan_speed` pixels.
    PanDown,
    /// Move the target left by `key_pan_speed` pixels.
    PanLeft,
    /// Move the target right by `key_pan_speed` pixels.
    PanRight,
}

impl KeyAction {
    /// Pixel pan delta `(dx, dy)` for this action at the given speed.
    #[must_use]
    pub fn pan_delta(self, speed: f32) -> (f32, f32) {
        match self {
            Self::PanUp => (0.0, speed),
            Self::PanDown => (0.0, -speed),
            Self::PanLeft => (speed, 0.0),
            Self::PanRight => (-speed, 0.0),
        }
    }
}
