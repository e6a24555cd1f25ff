//! Input dispatch for [`CameraController`].
//!
//! Every platform event goes through [`CameraController::handle_event`],
//! which checks the current [`ControlState`] instead of attaching and
//! detaching per-mode listeners. Handlers run to completion; the return
//! value tells the host whether to suppress the platform default action.

use std::f32::consts::PI;

use glam::Vec2;

use super::controller::CameraController;
use super::core::OrbitObject;
use super::state::{ControlEvent, ControlState, Cursor};
use crate::input::{InputEvent, MouseButton, WheelDelta};

impl CameraController {
    /// Feed one input event through the interaction state machine.
    ///
    /// Returns `true` when the platform default action should be prevented.
    pub fn handle_event(
        &mut self,
        object: &mut impl OrbitObject,
        event: &InputEvent,
    ) -> bool {
        match event {
            InputEvent::PointerDown { .. } => self.on_pointer_down(),
            InputEvent::PointerUp { button, x, y } => {
                self.on_pointer_up(*button, Vec2::new(*x, *y))
            }
            InputEvent::PointerMove { x, y } => {
                self.on_pointer_move(object, Vec2::new(*x, *y))
            }
            InputEvent::Wheel { delta } => self.on_wheel(object, *delta),
            InputEvent::Key { code } => self.on_key(object, code),
            InputEvent::TouchStart { touches } => self.on_touch_start(touches),
            InputEvent::TouchMove { touches } => {
                self.on_touch_move(object, touches)
            }
            InputEvent::TouchEnd => self.on_touch_end(),
        }
    }

    fn on_pointer_down(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        self.up_armed = true;
        self.emit(ControlEvent::Start);
        true
    }

    fn on_pointer_up(&mut self, button: MouseButton, pos: Vec2) -> bool {
        if !self.up_armed {
            return false;
        }

        if button == MouseButton::Middle
            && self.state != ControlState::Rotate
            && !self.options.no_rotate
        {
            self.rotate_start = pos;
            self.cursor = Cursor::Hidden;
            self.state = ControlState::Rotate;
            self.up_armed = false;
            log::debug!("orbit started at ({}, {})", pos.x, pos.y);
        } else if self.state == ControlState::Rotate {
            self.up_armed = false;
            self.cursor = Cursor::Default;
            self.state = ControlState::Idle;
            log::debug!("orbit ended");
        }

        self.emit(ControlEvent::End);
        true
    }

    fn on_pointer_move(
        &mut self,
        object: &mut impl OrbitObject,
        pos: Vec2,
    ) -> bool {
        if self.state != ControlState::Rotate {
            return false;
        }

        self.rotate_by_drag(pos);
        self.update(object);
        true
    }

    /// Turn the drag from `rotate_start` to `pos` into pending rotation.
    ///
    /// A drag across the whole surface width is a full turn; across the
    /// height it asks for a full turn, limited by the polar clamp.
    fn rotate_by_drag(&mut self, pos: Vec2) {
        let delta = pos - self.rotate_start;
        let width = self.surface.width.max(1.0);
        let height = self.surface.height.max(1.0);
        let speed = self.options.rotate_speed;

        self.rotate_left(Some(2.0 * PI * delta.x / width * speed));
        self.rotate_up(Some(2.0 * PI * delta.y / height * speed));

        self.rotate_start = pos;
    }

    fn on_wheel(
        &mut self,
        object: &mut impl OrbitObject,
        delta: WheelDelta,
    ) -> bool {
        if !self.enabled || self.options.no_zoom {
            return false;
        }

        if delta.normalized() > 0.0 {
            self.dolly_out(None);
        } else {
            self.dolly_in(None);
        }

        self.update(object);
        self.emit(ControlEvent::Start);
        self.emit(ControlEvent::End);
        true
    }

    fn on_key(&mut self, object: &mut impl OrbitObject, code: &str) -> bool {
        if !self.enabled || self.options.no_pan {
            return false;
        }
        let Some(action) = self.keybindings.lookup(code) else {
            return false;
        };

        let (dx, dy) = action.pan_delta(self.options.key_pan_speed);
        self.pan(&*object, dx, dy);
        self.update(object);
        true
    }

    fn on_touch_start(&mut self, touches: &[Vec2]) -> bool {
        if !self.enabled {
            return false;
        }

        let next = match *touches {
            [one] if !self.options.no_rotate => {
                self.rotate_start = one;
                ControlState::TouchRotate
            }
            [a, b] if !self.options.no_zoom => {
                self.dolly_start = a.distance(b);
                ControlState::TouchDolly
            }
            [first, _, _] if !self.options.no_pan => {
                self.pan_start = first;
                ControlState::TouchPan
            }
            _ => ControlState::Idle,
        };

        // A finger added or lifted mid-gesture ends the old gesture.
        self.end_touch_gesture();
        if next == ControlState::Idle {
            return false;
        }
        self.state = next;
        self.emit(ControlEvent::Start);
        true
    }

    fn on_touch_move(
        &mut self,
        object: &mut impl OrbitObject,
        touches: &[Vec2],
    ) -> bool {
        if !self.enabled {
            return false;
        }

        match (self.state, touches) {
            (ControlState::TouchRotate, [one]) => self.rotate_by_drag(*one),
            (ControlState::TouchDolly, [a, b]) => {
                let spread = a.distance(*b);
                if spread > self.dolly_start {
                    self.dolly_in(None);
                } else if spread < self.dolly_start {
                    self.dolly_out(None);
                }
                self.dolly_start = spread;
            }
            (ControlState::TouchPan, [first, _, _]) => {
                let delta = *first - self.pan_start;
                self.pan(&*object, delta.x, delta.y);
                self.pan_start = *first;
            }
            _ => {
                self.end_touch_gesture();
                return false;
            }
        }

        self.update(object);
        true
    }

    fn on_touch_end(&mut self) -> bool {
        self.end_touch_gesture();
        false
    }

    /// Leave any touch mode, pairing the gesture's `Start` with an `End`.
    fn end_touch_gesture(&mut self) {
        if self.state.is_touch() {
            self.state = ControlState::Idle;
            self.emit(ControlEvent::End);
        }
    }
}
