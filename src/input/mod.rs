//! Input vocabulary: platform-agnostic event types and bindable key
//! actions consumed by the camera controller.

/// Platform-agnostic input events.
pub mod event;
/// Bindable keyboard actions.
pub mod keyboard;

pub use event::{InputEvent, MouseButton, WheelDelta};
pub use keyboard::KeyAction;
