//! Camera options with TOML preset support.
//!
//! Zoom limits, input sensitivities, follow offsets, backdrop scaling and
//! sweep defaults are consolidated here. Options serialize to/from TOML so
//! hosts can ship presets next to their assets.

mod backdrop;
mod camera;
mod sweep;

use std::path::Path;

pub use backdrop::BackdropOptions;
pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use sweep::SweepOptions;

use crate::error::OrthocamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Zoom, input and follow parameters.
    pub camera: CameraOptions,
    /// Backdrop scale parameters.
    pub backdrop: BackdropOptions,
    /// Sweep defaults.
    pub sweep: SweepOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string and validate them.
    pub fn from_toml_str(content: &str) -> Result<Self, OrthocamError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| OrthocamError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrthocamError> {
        let content =
            std::fs::read_to_string(path).map_err(OrthocamError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrthocamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrthocamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrthocamError::Io)?;
        }
        std::fs::write(path, content).map_err(OrthocamError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Reject configurations the controller cannot honor.
    ///
    /// `min_zoom == max_zoom` is accepted and pins the zoom to one size.
    pub fn validate(&self) -> Result<(), OrthocamError> {
        let cam = &self.camera;
        let finite = [
            ("camera.min_zoom", cam.min_zoom),
            ("camera.max_zoom", cam.max_zoom),
            ("camera.wheel_snap", cam.wheel_snap),
            ("camera.pinch_sensitivity", cam.pinch_sensitivity),
            ("camera.follow_offset_x", cam.follow_offset_x),
            ("camera.follow_offset_y", cam.follow_offset_y),
            ("backdrop.base_multiplier", self.backdrop.base_multiplier),
            ("backdrop.size_multiplier", self.backdrop.size_multiplier),
            ("sweep.duration", self.sweep.duration),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite())
        {
            return Err(OrthocamError::InvalidOptions(format!(
                "{name} must be finite"
            )));
        }
        if cam.min_zoom <= 0.0 {
            return Err(OrthocamError::InvalidOptions(format!(
                "camera.min_zoom must be positive, got {}",
                cam.min_zoom
            )));
        }
        if cam.min_zoom > cam.max_zoom {
            return Err(OrthocamError::InvalidOptions(format!(
                "camera.min_zoom ({}) exceeds camera.max_zoom ({})",
                cam.min_zoom, cam.max_zoom
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::ZoomPolicy;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn default_options_are_valid() {
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
zoom_policy = "when_following"
max_zoom = 40.0

[sweep]
easing = "linear"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.camera.zoom_policy, ZoomPolicy::WhenFollowing);
        assert_eq!(opts.camera.max_zoom, 40.0);
        assert_eq!(opts.sweep.easing, EasingFunction::Linear);
        // Everything else should be default
        assert_eq!(opts.camera.min_zoom, 2.0);
        assert_eq!(opts.backdrop, BackdropOptions::default());
    }

    #[test]
    fn inverted_limits_are_rejected() {
        let toml_str = r"
[camera]
min_zoom = 10.0
max_zoom = 5.0
";
        let err = Options::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, OrthocamError::InvalidOptions(_)));
    }

    #[test]
    fn equal_limits_are_accepted() {
        let mut opts = Options::default();
        opts.camera.min_zoom = 5.0;
        opts.camera.max_zoom = 5.0;
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn non_positive_min_zoom_is_rejected() {
        let mut opts = Options::default();
        opts.camera.min_zoom = 0.0;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let mut opts = Options::default();
        opts.sweep.duration = f32::NAN;
        let err = opts.validate().unwrap_err();
        assert!(err.to_string().contains("sweep.duration"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml_str("[camera\nmin_zoom = ").unwrap_err();
        assert!(matches!(err, OrthocamError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_preserves_options() {
        let dir = std::env::temp_dir()
            .join(format!("orthocam-opts-{}", std::process::id()));
        let path = dir.join("close_up.toml");
        let mut opts = Options::default();
        opts.camera.wheel_snap = 1.25;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["close_up".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("backdrop"));
        assert!(props.contains_key("sweep"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("min_zoom").is_some());
        assert!(camera.get("pinch_sensitivity").is_some());
    }
}
