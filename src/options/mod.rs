//! Centralized configuration with TOML file support.
//!
//! Asset host settings, orbit controller limits and key bindings are
//! consolidated here. Options serialize to/from TOML so a deployment can
//! keep them in a single file next to its static root.

mod controls;
mod keybindings;
mod server;

use std::path::Path;

pub use controls::ControlOptions;
pub use keybindings::KeybindingOptions;
use serde::{Deserialize, Serialize};
pub use server::ServerOptions;

use crate::error::WingsError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[server]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Static asset host settings.
    pub server: ServerOptions,
    /// Orbit controller limits and speeds.
    pub controls: ControlOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`WingsError::OptionsParse`] on malformed TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, WingsError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| WingsError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`WingsError::Io`] if the file cannot be read and
    /// [`WingsError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, WingsError> {
        let content = std::fs::read_to_string(path).map_err(WingsError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`WingsError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), WingsError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WingsError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(WingsError::Io)?;
        }
        std::fs::write(path, content).map_err(WingsError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
        assert!(parsed.controls.max_distance.is_infinite());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[server]
port = 8080

[controls]
zoom_speed = 2.0
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.server.port, 8080);
        assert_eq!(opts.controls.zoom_speed, 2.0);
        // Everything else should be default
        assert_eq!(opts.server.host, "0.0.0.0");
        assert_eq!(opts.controls.rotate_speed, 1.0);
        assert_eq!(opts.controls.max_polar_angle, std::f32::consts::PI);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(KeyAction::PanUp)
        );
        assert_eq!(
            opts.keybindings.lookup("ArrowRight"),
            Some(KeyAction::PanRight)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn rebound_keys_replace_defaults_after_load() {
        let toml_str = r#"
[keybindings.bindings]
pan_up = "KeyW"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(KeyAction::PanUp));
        assert_eq!(opts.keybindings.lookup("ArrowUp"), None);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[server\nport = 1").unwrap_err();
        assert!(matches!(err, WingsError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("wings-options-{}", std::process::id()));
        let path = dir.join("nested").join("wings.toml");
        let mut opts = Options::default();
        opts.server.port = 4321;
        opts.controls.auto_rotate = true;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
