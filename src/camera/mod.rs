//! Orbit camera controls.
//!
//! Keeps a camera on a sphere around a target point: input accumulates
//! azimuth, polar and radius changes, and [`CameraController::update`]
//! applies them once per frame.

/// Orbit controller: pending deltas, limits, update and reset.
pub mod controller;
/// Camera struct and the trait the controller positions.
pub mod core;
/// Event dispatch through the interaction state machine.
pub mod input;
/// Spherical coordinate helpers and the pole guard.
pub mod spherical;
/// Interaction modes, notifications and surface metadata.
pub mod state;

pub use controller::CameraController;
pub use self::core::{Camera, OrbitObject};
pub use spherical::Spherical;
pub use state::{ControlEvent, ControlState, Cursor, SurfaceSize};
