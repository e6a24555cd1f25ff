/// Interaction mode of the controller. At most one is active at a time and
/// it decides which handler logic a pointer or touch move runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlState {
    /// No interaction in progress.
    #[default]
    Idle,
    /// Mouse orbit (entered by a middle-button click).
    Rotate,
    /// Mouse dolly. No pointer gesture enters it; wheel dolly is
    /// instantaneous.
    Dolly,
    /// Mouse pan. No pointer gesture enters it; keys pan instantly.
    Pan,
    /// One-finger orbit.
    TouchRotate,
    /// Two-finger pinch dolly.
    TouchDolly,
    /// Three-finger pan.
    TouchPan,
}

impl ControlState {
    /// True for the one-, two- and three-finger touch modes.
    #[must_use]
    pub fn is_touch(self) -> bool {
        matches!(self, Self::TouchRotate | Self::TouchDolly | Self::TouchPan)
    }
}

/// Notifications queued by the controller and drained by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// An interaction began.
    Start,
    /// An interaction ended.
    End,
    /// The camera pose changed during an `update()`.
    Change,
}

/// Cursor affordance the host should show over the input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Platform default cursor.
    #[default]
    Default,
    /// Cursor hidden (while orbiting).
    Hidden,
}

/// Client size of the input surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    /// Client width.
    pub width: f32,
    /// Client height.
    pub height: f32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}
