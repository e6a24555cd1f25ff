use glam::Vec2;

/// Platform-agnostic input events.
///
/// These are fed into
/// [`CameraController::handle_event`](crate::camera::CameraController::handle_event),
/// which runs them through the interaction state machine.
///
/// # Example
///
/// ```ignore
/// let prevent_default = controls.handle_event(
///     &mut camera,
///     InputEvent::PointerMove { x: 100.0, y: 200.0 },
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed.
    PointerDown {
        /// Which button went down.
        button: MouseButton,
        /// Horizontal client position in pixels.
        x: f32,
        /// Vertical client position in pixels.
        y: f32,
    },
    /// Mouse button released.
    PointerUp {
        /// Which button was released.
        button: MouseButton,
        /// Horizontal client position in pixels.
        x: f32,
        /// Vertical client position in pixels.
        y: f32,
    },
    /// Cursor moved to absolute client position.
    PointerMove {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Scroll wheel step.
    Wheel {
        /// Raw delta in whichever convention the platform reported.
        delta: WheelDelta,
    },
    /// Key pressed, as a physical key code string (`"ArrowUp"`, `"KeyQ"`).
    Key {
        /// Key code string.
        code: String,
    },
    /// One or more fingers touched the surface.
    TouchStart {
        /// All touches currently on the surface.
        touches: Vec<Vec2>,
    },
    /// Touches moved.
    TouchMove {
        /// All touches currently on the surface.
        touches: Vec<Vec2>,
    },
    /// A touch left the surface.
    TouchEnd,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Middle mouse button (wheel click).
    Middle,
    /// Secondary (right) mouse button.
    Right,
    /// Any other button, by DOM index.
    Other(u16),
}

impl From<i16> for MouseButton {
    /// Map a DOM `MouseEvent.button` index.
    fn from(index: i16) -> Self {
        match index {
            0 => Self::Left,
            1 => Self::Middle,
            2 => Self::Right,
            other => Self::Other(other.unsigned_abs()),
        }
    }
}

/// Wheel delta in one of the two browser conventions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelDelta {
    /// `wheelDelta` style: positive when the wheel rolls away from the user.
    Standard(f32),
    /// Legacy `detail` style (`DOMMouseScroll`): sign is inverted.
    Detail(f32),
}

impl WheelDelta {
    /// Delta normalized to the `Standard` sign convention.
    #[must_use]
    pub fn normalized(self) -> f32 {
        match self {
            Self::Standard(delta) => delta,
            Self::Detail(detail) => -detail,
        }
    }
}
