use std::collections::VecDeque;

use glam::{Vec2, Vec3};

use super::core::OrbitObject;
use super::spherical::{clamp_lenient, Spherical};
use super::state::{ControlEvent, ControlState, Cursor, SurfaceSize};
use crate::options::{ControlOptions, KeybindingOptions};

/// Orbit controller keeping an object on a sphere around [`target`].
///
/// Input only accumulates pending changes (`theta_delta`, `phi_delta`,
/// `scale`, pan offset); [`update`](Self::update) folds them into the
/// object's position once per frame and clears them.
///
/// [`target`]: Self::target
pub struct CameraController {
    /// Gates every input handler. `update()` works regardless.
    pub enabled: bool,
    /// Pivot the camera orbits and pans around.
    pub target: Vec3,
    /// Limits and speeds, read on every update.
    pub options: ControlOptions,
    /// Key code → pan action map.
    pub keybindings: KeybindingOptions,

    pub(super) state: ControlState,
    theta_delta: f32,
    phi_delta: f32,
    scale: f32,
    pan_offset: Vec3,
    last_position: Vec3,

    target0: Vec3,
    position0: Vec3,

    pub(super) surface: SurfaceSize,
    pub(super) cursor: Cursor,
    /// Whether a pointer-up should be handled (armed by pointer-down).
    pub(super) up_armed: bool,
    pub(super) rotate_start: Vec2,
    pub(super) dolly_start: f32,
    pub(super) pan_start: Vec2,

    events: VecDeque<ControlEvent>,
}

impl CameraController {
    /// Create a controller around the origin, snapshotting the object's
    /// current position for [`reset`](Self::reset).
    pub fn new(object: &impl OrbitObject, options: ControlOptions) -> Self {
        Self {
            enabled: true,
            target: Vec3::ZERO,
            options,
            keybindings: KeybindingOptions::default(),
            state: ControlState::Idle,
            theta_delta: 0.0,
            phi_delta: 0.0,
            scale: 1.0,
            pan_offset: Vec3::ZERO,
            last_position: Vec3::ZERO,
            target0: Vec3::ZERO,
            position0: object.position(),
            surface: SurfaceSize::default(),
            cursor: Cursor::Default,
            up_armed: false,
            rotate_start: Vec2::ZERO,
            dolly_start: 0.0,
            pan_start: Vec2::ZERO,
            events: VecDeque::new(),
        }
    }

    /// Use `target` as the pivot, both now and as the reset snapshot.
    #[must_use]
    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self.target0 = target;
        self
    }

    /// Use custom key bindings.
    #[must_use]
    pub fn with_keybindings(mut self, keybindings: KeybindingOptions) -> Self {
        self.keybindings = keybindings;
        self
    }

    /// Current interaction mode.
    #[must_use]
    pub fn state(&self) -> ControlState {
        self.state
    }

    /// Pending azimuth change not yet applied by `update()`.
    #[must_use]
    pub fn theta_delta(&self) -> f32 {
        self.theta_delta
    }

    /// Pending polar change not yet applied by `update()`.
    #[must_use]
    pub fn phi_delta(&self) -> f32 {
        self.phi_delta
    }

    /// Pending radius multiplier (1 = no change).
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Pending target translation.
    #[must_use]
    pub fn pan_offset(&self) -> Vec3 {
        self.pan_offset
    }

    /// Target captured at construction.
    #[must_use]
    pub fn target0(&self) -> Vec3 {
        self.target0
    }

    /// Object position captured at construction.
    #[must_use]
    pub fn position0(&self) -> Vec3 {
        self.position0
    }

    /// Cursor the host should display over the surface.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Client size of the input surface.
    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Record the input surface's client size in pixels.
    pub fn set_surface_size(&mut self, width: f32, height: f32) {
        self.surface = SurfaceSize { width, height };
    }

    /// Current spherical coordinates of `object` around the target.
    #[must_use]
    pub fn spherical(&self, object: &impl OrbitObject) -> Spherical {
        Spherical::from_offset(object.position() - self.target)
    }

    /// Take every queued notification, oldest first.
    pub fn drain_events(&mut self) -> Vec<ControlEvent> {
        self.events.drain(..).collect()
    }

    pub(super) fn emit(&mut self, event: ControlEvent) {
        self.events.push_back(event);
    }

    /// Accumulate an azimuth change; `None` uses one auto-rotation step.
    pub fn rotate_left(&mut self, angle: Option<f32>) {
        self.theta_delta +=
            angle.unwrap_or_else(|| self.options.auto_rotation_angle());
    }

    /// Accumulate a polar change; `None` uses one auto-rotation step.
    pub fn rotate_up(&mut self, angle: Option<f32>) {
        self.phi_delta +=
            angle.unwrap_or_else(|| self.options.auto_rotation_angle());
    }

    /// Shrink the pending radius by `dolly_scale` (default
    /// `0.95^zoom_speed`).
    pub fn dolly_in(&mut self, dolly_scale: Option<f32>) {
        self.scale *= dolly_scale.unwrap_or_else(|| self.options.zoom_scale());
    }

    /// Grow the pending radius by `1 / dolly_scale` (default
    /// `0.95^zoom_speed`).
    pub fn dolly_out(&mut self, dolly_scale: Option<f32>) {
        self.scale /= dolly_scale.unwrap_or_else(|| self.options.zoom_scale());
    }

    /// Camera right and up axes for the current view of `object`.
    fn view_axes(&self, object: &impl OrbitObject) -> (Vec3, Vec3) {
        let forward = (self.target - object.position()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        (right, right.cross(forward))
    }

    /// Move the pending pivot left by `distance` world units.
    pub fn pan_left(&mut self, object: &impl OrbitObject, distance: f32) {
        let (right, _) = self.view_axes(object);
        self.pan_offset -= right * distance;
    }

    /// Move the pending pivot up by `distance` world units.
    pub fn pan_up(&mut self, object: &impl OrbitObject, distance: f32) {
        let (_, up) = self.view_axes(object);
        self.pan_offset += up * distance;
    }

    /// Pan by a pixel displacement on the input surface.
    ///
    /// A drag across the full surface height moves the pivot by the height
    /// of the view frustum at the target distance.
    pub fn pan(&mut self, object: &impl OrbitObject, delta_x: f32, delta_y: f32) {
        let offset = object.position() - self.target;
        let half_fov = (object.fovy() / 2.0).to_radians();
        let target_distance = offset.length() * half_fov.tan();
        let height = self.surface.height.max(1.0);

        self.pan_left(object, 2.0 * delta_x * target_distance / height);
        self.pan_up(object, 2.0 * delta_y * target_distance / height);
    }

    /// Fold pending input into the object's position and orientation.
    ///
    /// Queues [`ControlEvent::Change`] whenever the object ends up anywhere
    /// other than the last reported position.
    pub fn update(&mut self, object: &mut impl OrbitObject) {
        let offset = object.position() - self.target;
        let current = Spherical::from_offset(offset);
        let mut spherical = current;

        if self.options.auto_rotate {
            self.rotate_left(Some(self.options.auto_rotation_angle()));
        }

        spherical.theta += self.theta_delta;
        spherical.phi += self.phi_delta;

        // Configured limits first, then the pole guard.
        spherical.phi = clamp_lenient(
            spherical.phi,
            self.options.min_polar_angle,
            self.options.max_polar_angle,
        );
        spherical.make_safe();

        spherical.radius = clamp_lenient(
            offset.length() * self.scale,
            self.options.min_distance,
            self.options.max_distance,
        );

        // Nothing pending and no limit hit: keep the exact position so
        // repeated updates do not drift.
        let untouched = spherical == current && self.pan_offset == Vec3::ZERO;
        let position = if untouched {
            object.position()
        } else {
            self.target += self.pan_offset;
            self.target + spherical.to_offset()
        };
        object.set_position(position);
        object.look_at(self.target);

        self.theta_delta = 0.0;
        self.phi_delta = 0.0;
        self.scale = 1.0;
        self.pan_offset = Vec3::ZERO;

        if self.last_position != position {
            self.emit(ControlEvent::Change);
            self.last_position = position;
        }
    }

    /// Cancel any interaction, show the cursor again and restore the
    /// construction-time target and position.
    pub fn reset(&mut self, object: &mut impl OrbitObject) {
        self.state = ControlState::Idle;
        self.cursor = Cursor::Default;
        self.up_armed = false;

        self.target = self.target0;
        object.set_position(self.position0);

        self.update(object);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;
    use crate::camera::Camera;

    const TOLERANCE: f32 = 1e-4;

    fn setup() -> (Camera, CameraController) {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 10.0));
        let controls = CameraController::new(&camera, ControlOptions::default());
        (camera, controls)
    }

    #[test]
    fn initial_spherical_coordinates() {
        let (camera, controls) = setup();
        let s = controls.spherical(&camera);
        assert!((s.radius - 10.0).abs() < TOLERANCE);
        assert!((s.phi - PI / 2.0).abs() < TOLERANCE);
        assert!(s.theta.abs() < TOLERANCE);
    }

    #[test]
    fn dolly_out_grows_radius() {
        let (mut camera, mut controls) = setup();
        controls.dolly_out(None);
        assert!((controls.scale() - 1.0 / 0.95).abs() < 1e-6);

        controls.update(&mut camera);
        let radius = camera.eye.length();
        assert!((radius - 10.526_316).abs() < 1e-3, "radius was {radius}");
        assert_eq!(controls.scale(), 1.0);
    }

    #[test]
    fn dolly_in_shrinks_radius() {
        let (mut camera, mut controls) = setup();
        controls.dolly_in(None);
        controls.update(&mut camera);
        assert!((camera.eye.length() - 9.5).abs() < 1e-3);
    }

    #[test]
    fn explicit_dolly_scale_overrides_zoom_speed() {
        let (mut camera, mut controls) = setup();
        controls.dolly_in(Some(0.5));
        controls.update(&mut camera);
        assert!((camera.eye.length() - 5.0).abs() < 1e-3);
    }

    #[test]
    fn zoom_speed_changes_default_step() {
        let (mut camera, mut controls) = setup();
        controls.options.zoom_speed = 2.0;
        controls.dolly_in(None);
        controls.update(&mut camera);
        assert!((camera.eye.length() - 10.0 * 0.95 * 0.95).abs() < 1e-3);
    }

    #[test]
    fn dolly_out_respects_max_distance() {
        let (mut camera, mut controls) = setup();
        controls.options.max_distance = 10.2;
        controls.dolly_out(None);
        controls.update(&mut camera);
        assert!((camera.eye.length() - 10.2).abs() < TOLERANCE);
    }

    #[test]
    fn dolly_in_respects_min_distance() {
        let (mut camera, mut controls) = setup();
        controls.options.min_distance = 8.0;
        controls.dolly_in(Some(0.1));
        controls.update(&mut camera);
        assert!((camera.eye.length() - 8.0).abs() < TOLERANCE);
    }

    #[test]
    fn inverted_distance_bounds_do_not_panic() {
        let (mut camera, mut controls) = setup();
        controls.options.min_distance = 20.0;
        controls.options.max_distance = 5.0;
        controls.update(&mut camera);
        assert!((camera.eye.length() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn distance_matches_clamped_radius_after_rotation() {
        let (mut camera, mut controls) = setup();
        controls.target = Vec3::new(1.0, 2.0, 3.0);
        controls.rotate_left(Some(0.7));
        controls.rotate_up(Some(-0.4));
        controls.dolly_out(Some(0.5));
        controls.update(&mut camera);

        let expected = (Vec3::new(0.0, 0.0, 10.0) - Vec3::new(1.0, 2.0, 3.0))
            .length()
            * 2.0;
        let actual = camera.eye.distance(controls.target);
        assert!((actual - expected).abs() < 1e-3);
        assert_eq!(camera.target, controls.target);
    }

    #[test]
    fn rotate_left_moves_azimuth() {
        let (mut camera, mut controls) = setup();
        controls.rotate_left(Some(PI / 2.0));
        controls.update(&mut camera);
        // theta = π/2 puts the camera on +X
        assert!((camera.eye - Vec3::new(10.0, 0.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn update_is_idempotent_and_changes_once() {
        let (mut camera, mut controls) = setup();
        controls.rotate_up(Some(0.3));
        controls.update(&mut camera);
        let first = camera.eye;
        assert_eq!(controls.drain_events(), vec![ControlEvent::Change]);

        controls.update(&mut camera);
        assert!((camera.eye - first).length() < 1e-5);
        assert!(controls.drain_events().is_empty());
    }

    #[test]
    fn deltas_reset_after_update() {
        let (mut camera, mut controls) = setup();
        controls.rotate_left(Some(0.1));
        controls.rotate_up(Some(0.1));
        controls.dolly_in(None);
        controls.update(&mut camera);
        assert_eq!(controls.theta_delta(), 0.0);
        assert_eq!(controls.phi_delta(), 0.0);
        assert_eq!(controls.scale(), 1.0);
        assert_eq!(controls.pan_offset(), Vec3::ZERO);
    }

    #[test]
    fn polar_angle_clamped_at_north_pole() {
        let (mut camera, mut controls) = setup();
        controls.rotate_left(Some(0.5));
        controls.update(&mut camera);
        controls.rotate_up(Some(-10.0));
        controls.update(&mut camera);

        assert!(!camera.eye.is_nan());
        let s = controls.spherical(&camera);
        assert!(s.phi < 1e-3);
        assert!((s.radius - 10.0).abs() < TOLERANCE);
        // azimuth survives the pole
        assert!((s.theta - 0.5).abs() < 1e-2);
    }

    #[test]
    fn polar_angle_clamped_at_south_pole() {
        let (mut camera, mut controls) = setup();
        controls.rotate_up(Some(10.0));
        controls.update(&mut camera);

        assert!(!camera.eye.is_nan());
        assert!((camera.eye.y + 10.0).abs() < 1e-3);
        let s = controls.spherical(&camera);
        assert!((s.phi - PI).abs() < 1e-3);
    }

    #[test]
    fn configured_polar_limits_apply_before_pole_guard() {
        let (mut camera, mut controls) = setup();
        controls.options.min_polar_angle = 1.0;
        controls.options.max_polar_angle = 1.2;
        controls.rotate_up(Some(2.0));
        controls.update(&mut camera);
        assert!((controls.spherical(&camera).phi - 1.2).abs() < 1e-3);

        controls.rotate_up(Some(-2.0));
        controls.update(&mut camera);
        assert!((controls.spherical(&camera).phi - 1.0).abs() < 1e-3);
    }

    #[test]
    fn polar_limits_wider_than_pole_guard_still_hit_guard() {
        let (mut camera, mut controls) = setup();
        controls.options.min_polar_angle = -1.0;
        controls.rotate_up(Some(-5.0));
        controls.update(&mut camera);
        assert!(!camera.eye.is_nan());
        assert!(camera.eye.y > 9.99);
    }

    #[test]
    fn auto_rotate_steps_azimuth_each_update() {
        let (mut camera, mut controls) = setup();
        controls.options.auto_rotate = true;
        controls.update(&mut camera);
        let step = controls.options.auto_rotation_angle();
        assert!((controls.spherical(&camera).theta - step).abs() < 1e-5);
        assert!((step - 2.0 * PI / 1800.0).abs() < 1e-7);
    }

    #[test]
    fn missing_rotation_angle_uses_auto_rotation_step() {
        let (_, mut controls) = setup();
        controls.rotate_left(None);
        controls.rotate_up(None);
        let step = controls.options.auto_rotation_angle();
        assert_eq!(controls.theta_delta(), step);
        assert_eq!(controls.phi_delta(), step);
    }

    #[test]
    fn reset_restores_snapshots() {
        let (mut camera, mut controls) = setup();
        controls.update(&mut camera);
        controls.target = Vec3::new(5.0, 5.0, 5.0);
        controls.rotate_left(Some(1.0));
        controls.dolly_in(Some(0.3));
        controls.update(&mut camera);
        controls.state = ControlState::Rotate;

        controls.reset(&mut camera);
        assert_eq!(controls.state(), ControlState::Idle);
        assert_eq!(controls.target, Vec3::ZERO);
        assert!((camera.eye - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-4);
        assert_eq!(camera.target, Vec3::ZERO);
    }

    #[test]
    fn reset_uses_custom_initial_target() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 10.0));
        let mut controls =
            CameraController::new(&camera, ControlOptions::default())
                .with_target(Vec3::new(0.0, 0.0, 5.0));
        controls.target = Vec3::ONE;
        controls.reset(&mut camera);
        assert_eq!(controls.target, Vec3::new(0.0, 0.0, 5.0));
        assert!((camera.eye - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-4);
    }

    #[test]
    fn tiny_moves_still_report_change() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 0.1));
        let mut controls =
            CameraController::new(&camera, ControlOptions::default());
        controls.update(&mut camera);
        let _ = controls.drain_events();

        let before = camera.eye;
        controls.rotate_left(Some(0.001));
        controls.update(&mut camera);
        let moved = camera.eye.distance(before);
        assert!(moved > 0.0 && moved < 1e-3, "moved {moved}");
        assert_eq!(controls.drain_events(), vec![ControlEvent::Change]);
    }

    #[test]
    fn update_without_input_keeps_exact_position() {
        let mut camera = Camera::new(Vec3::new(1.3, -2.7, 4.1));
        let mut controls =
            CameraController::new(&camera, ControlOptions::default());
        controls.update(&mut camera);
        let first = camera.eye;
        for _ in 0..10 {
            controls.update(&mut camera);
        }
        assert_eq!(camera.eye, first);
        assert_eq!(controls.drain_events(), vec![ControlEvent::Change]);
    }

    #[test]
    fn first_update_reports_change_from_origin_baseline() {
        let (mut camera, mut controls) = setup();
        controls.update(&mut camera);
        assert_eq!(controls.drain_events(), vec![ControlEvent::Change]);
    }

    #[test]
    fn pan_left_moves_target_and_camera_together() {
        let (mut camera, mut controls) = setup();
        controls.pan_left(&camera, 2.0);
        controls.update(&mut camera);
        // Looking down -Z, camera right is +X
        assert!((controls.target - Vec3::new(-2.0, 0.0, 0.0)).length() < 1e-4);
        assert!((camera.eye - Vec3::new(-2.0, 0.0, 10.0)).length() < 1e-3);
    }

    #[test]
    fn pan_up_moves_along_camera_up() {
        let (mut camera, mut controls) = setup();
        controls.pan_up(&camera, 1.5);
        controls.update(&mut camera);
        assert!((controls.target - Vec3::new(0.0, 1.5, 0.0)).length() < 1e-4);
    }

    #[test]
    fn pixel_pan_scales_with_distance_and_fov() {
        let (mut camera, mut controls) = setup();
        camera.fovy = 90.0;
        controls.set_surface_size(1000.0, 500.0);
        // half the surface height at tan(45°) = 1 and distance 10 → 10 units
        controls.pan(&camera, 0.0, 250.0);
        assert!((controls.pan_offset() - Vec3::new(0.0, 10.0, 0.0)).length() < 1e-3);
    }
}
