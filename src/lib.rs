// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orbit / dolly / pan camera controls plus a minimal static asset host.
//!
//! The camera side keeps a camera on a sphere around a target point and
//! turns pointer, wheel, keyboard and touch input into changes of the
//! sphere's azimuth, polar angle and radius. The asset host serves a
//! directory of files over HTTP for whatever page drives the controls.
//!
//! # Key entry points
//!
//! - [`camera::CameraController`] - the orbit controller
//! - [`camera::Camera`] - a perspective camera implementing
//!   [`camera::OrbitObject`]
//! - [`input::InputEvent`] - platform-agnostic input fed to the controller
//! - [`options::Options`] - TOML-backed configuration for both components
//! - `server::AssetHost` - the static file server (feature `server`)
//!
//! # Frame loop
//!
//! ```ignore
//! let mut controls = CameraController::new(&camera, ControlOptions::default());
//! // on every platform event:
//! if controls.handle_event(&mut camera, event) {
//!     // suppress the platform default action
//! }
//! // on every animation tick:
//! controls.update(&mut camera);
//! for event in controls.drain_events() {
//!     log::debug!("controls: {event:?}");
//! }
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
#[cfg(feature = "server")]
pub mod server;
#[cfg(feature = "web")]
pub mod web;

pub use error::WingsError;
