//! Camera configuration with TOML preset support.
//!
//! Options serialize to/from TOML so hosts can ship presets (e.g. a slow,
//! heavily damped "presentation" feel next to a snappy default) and load
//! them at startup.

mod camera;

use std::path::Path;

pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TrackballError;

/// Top-level options container. Sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `damping_factor`) work.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Trackball tuning and initial pose.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse and validate options from TOML text. Missing fields use
    /// defaults.
    pub fn from_toml(content: &str) -> Result<Self, TrackballError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| TrackballError::OptionsParse(e.to_string()))?;
        options.camera.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TrackballError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml(&content)?;
        log::info!("loaded camera options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TrackballError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TrackballError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
        assert!(parsed.camera.max_distance.is_infinite());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
damping_factor = 0.5
position = [0.0, 0.0, 10.0]
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.damping_factor, 0.5);
        assert_eq!(opts.camera.position, [0.0, 0.0, 10.0]);
        // Everything else should be default
        assert_eq!(opts.camera.zoom_speed, 1.2);
        assert_eq!(opts.camera.up, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn invalid_values_are_rejected_on_parse() {
        let toml_str = r"
[camera]
damping_factor = 2.0
";
        assert!(matches!(
            Options::from_toml(toml_str),
            Err(TrackballError::InvalidOptions(_))
        ));
        assert!(matches!(
            Options::from_toml("[camera]\nrotate_speed = \"fast\""),
            Err(TrackballError::OptionsParse(_))
        ));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("trackball-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.camera.rotate_speed = 2.5;

        opts.save(&dir.join("snappy.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "not a preset").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["default", "snappy"]);
        let loaded = Options::load(&dir.join("snappy.toml")).unwrap();
        assert_eq!(loaded, opts);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn shipped_presets_load() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("presets");
        let names = Options::list_presets(&dir);
        assert_eq!(names, vec!["default", "presentation"]);
        for name in names {
            let opts = Options::load(&dir.join(format!("{name}.toml"))).unwrap();
            assert!(opts.camera.validate().is_ok());
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/trackball.toml"))
            .unwrap_err();
        assert!(matches!(err, TrackballError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("camera"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("rotate_speed").is_some());
        assert!(camera.get("damping_factor").is_some());
        assert!(camera.get("min_distance").is_some());
        assert!(camera.get("max_distance").is_none());
        assert!(camera.get("position").is_none());
    }
}
