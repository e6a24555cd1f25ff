//! Browser binding for [`CameraController`].
//!
//! [`attach`] turns DOM mouse, wheel, keyboard and touch events into
//! [`InputEvent`]s and feeds them to a shared controller. The controller
//! and camera live behind `Rc<RefCell<_>>` so the page's render loop can
//! keep calling [`CameraController::update`] between events.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};

use crate::camera::{CameraController, Cursor, OrbitObject};
use crate::input::{InputEvent, MouseButton, WheelDelta};

/// Route `log` output to the browser console and panics to
/// `console.error`. Safe to call more than once.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

type Callback = Closure<dyn FnMut(web_sys::Event)>;

/// Registered DOM listeners. Dropping the guard removes them.
pub struct Listeners {
    registered: Vec<(EventTarget, &'static str, Callback)>,
}

impl Listeners {
    /// Number of listeners currently registered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registered.len()
    }

    /// True when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    fn add(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        callback: Callback,
    ) -> Result<(), JsValue> {
        target.add_event_listener_with_callback(
            kind,
            callback.as_ref().unchecked_ref(),
        )?;
        self.registered.push((target.clone(), kind, callback));
        Ok(())
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        for (target, kind, callback) in self.registered.drain(..) {
            let _ = target.remove_event_listener_with_callback(
                kind,
                callback.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Shared state captured by every listener.
struct Binding<C> {
    element: HtmlElement,
    controls: Rc<RefCell<CameraController>>,
    camera: Rc<RefCell<C>>,
}

impl<C: OrbitObject> Binding<C> {
    fn dispatch(&self, event: &web_sys::Event, input: &InputEvent) {
        let Ok(mut controls) = self.controls.try_borrow_mut() else {
            return;
        };
        let Ok(mut camera) = self.camera.try_borrow_mut() else {
            return;
        };

        let width = self.element.client_width();
        let height = self.element.client_height();
        if width > 0 && height > 0 {
            controls.set_surface_size(width as f32, height as f32);
        }

        if controls.handle_event(&mut *camera, input) {
            event.prevent_default();
        }

        let cursor = match controls.cursor() {
            Cursor::Hidden => "none",
            Cursor::Default => "",
        };
        let _ = self.element.style().set_property("cursor", cursor);
    }
}

/// Attach controller listeners to `element`, or to the document body when
/// `None`.
///
/// Pointer, wheel and touch listeners go on the element; `keydown` goes on
/// the window so arrow keys work without focus.
///
/// # Errors
///
/// Returns the JS exception if there is no window/body or a listener
/// cannot be registered.
pub fn attach<C: OrbitObject + 'static>(
    element: Option<HtmlElement>,
    controls: Rc<RefCell<CameraController>>,
    camera: Rc<RefCell<C>>,
) -> Result<Listeners, JsValue> {
    let window =
        web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let element = match element {
        Some(element) => element,
        None => window
            .document()
            .and_then(|document| document.body())
            .ok_or_else(|| JsValue::from_str("no document body"))?,
    };

    let binding = Rc::new(Binding {
        element: element.clone(),
        controls,
        camera,
    });
    let target: &EventTarget = element.as_ref();
    let mut listeners = Listeners {
        registered: Vec::new(),
    };

    listeners.add(target, "mousedown", listener(&binding, |event| {
        let mouse = event.dyn_ref::<MouseEvent>()?;
        Some(InputEvent::PointerDown {
            button: MouseButton::from(mouse.button()),
            x: mouse.client_x() as f32,
            y: mouse.client_y() as f32,
        })
    }))?;
    listeners.add(target, "mouseup", listener(&binding, |event| {
        let mouse = event.dyn_ref::<MouseEvent>()?;
        Some(InputEvent::PointerUp {
            button: MouseButton::from(mouse.button()),
            x: mouse.client_x() as f32,
            y: mouse.client_y() as f32,
        })
    }))?;
    listeners.add(target, "mousemove", listener(&binding, |event| {
        let mouse = event.dyn_ref::<MouseEvent>()?;
        Some(InputEvent::PointerMove {
            x: mouse.client_x() as f32,
            y: mouse.client_y() as f32,
        })
    }))?;
    listeners.add(target, "mousewheel", listener(&binding, |event| {
        let delta = number_field(event, "wheelDelta")?;
        Some(InputEvent::Wheel {
            delta: WheelDelta::Standard(delta),
        })
    }))?;
    listeners.add(target, "DOMMouseScroll", listener(&binding, |event| {
        let detail = number_field(event, "detail")?;
        Some(InputEvent::Wheel {
            delta: WheelDelta::Detail(detail),
        })
    }))?;
    listeners.add(target, "touchstart", listener(&binding, |event| {
        Some(InputEvent::TouchStart {
            touches: touch_points(event.dyn_ref::<TouchEvent>()?),
        })
    }))?;
    listeners.add(target, "touchmove", listener(&binding, |event| {
        Some(InputEvent::TouchMove {
            touches: touch_points(event.dyn_ref::<TouchEvent>()?),
        })
    }))?;
    listeners.add(
        target,
        "touchend",
        listener(&binding, |_| Some(InputEvent::TouchEnd)),
    )?;
    listeners.add(window.as_ref(), "keydown", listener(&binding, |event| {
        let key = event.dyn_ref::<KeyboardEvent>()?;
        Some(InputEvent::Key { code: key.code() })
    }))?;

    log::info!("orbit controls attached ({} listeners)", listeners.len());
    Ok(listeners)
}

fn listener<C, F>(binding: &Rc<Binding<C>>, convert: F) -> Callback
where
    C: OrbitObject + 'static,
    F: Fn(&web_sys::Event) -> Option<InputEvent> + 'static,
{
    let binding = Rc::clone(binding);
    Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        if let Some(input) = convert(&event) {
            binding.dispatch(&event, &input);
        }
    })
}

/// Read a numeric property that `web-sys` does not type, such as the
/// legacy `wheelDelta`.
fn number_field(event: &web_sys::Event, name: &str) -> Option<f32> {
    js_sys::Reflect::get(event.as_ref(), &JsValue::from_str(name))
        .ok()?
        .as_f64()
        .map(|v| v as f32)
}

fn touch_points(event: &TouchEvent) -> Vec<Vec2> {
    let list = event.touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .collect()
}
