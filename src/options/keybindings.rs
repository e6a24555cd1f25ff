use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

/// Which key codes pan the orbit target.
///
/// Keys are DOM `KeyboardEvent.code` strings. Each press pans by
/// `key_pan_speed` pixels through the same path as a touch pan; unbound
/// keys are left to the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeybindingOptions {
    /// Pan action → key code (`PanUp` → `"ArrowUp"`).
    pub bindings: HashMap<KeyAction, String>,
    #[serde(skip)]
    by_code: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let mut opts = Self {
            bindings: HashMap::from([
                (KeyAction::PanUp, "ArrowUp".into()),
                (KeyAction::PanDown, "ArrowDown".into()),
                (KeyAction::PanLeft, "ArrowLeft".into()),
                (KeyAction::PanRight, "ArrowRight".into()),
            ]),
            by_code: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Re-derive the key code index from `bindings`. Call after editing
    /// `bindings` directly; [`Options`](super::Options) does it on load.
    pub fn rebuild_reverse_map(&mut self) {
        self.by_code = self
            .bindings
            .iter()
            .map(|(action, code)| (code.clone(), *action))
            .collect();
    }

    /// Bind `action` to `code`, dropping whatever key it had before.
    pub fn bind(&mut self, action: KeyAction, code: impl Into<String>) {
        let code = code.into();
        if let Some(old) = self.bindings.insert(action, code.clone()) {
            let _ = self.by_code.remove(&old);
        }
        let _ = self.by_code.insert(code, action);
    }

    /// Pan action bound to a key code, if any.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<KeyAction> {
        self.by_code.get(code).copied()
    }
}
