//! Centralized rig options with TOML preset support.
//!
//! All tweakable settings (scroll track, section ranges and damping rates,
//! procedural layout) are consolidated here. Options serialize to/from TOML
//! for showcase presets, and expose a JSON Schema so a host UI can build a
//! tweak panel without hardcoding field lists.

mod layout;
mod sections;
mod track;

use std::path::Path;

pub use layout::LayoutOptions;
pub use sections::{PlanetOptions, SkylineOptions, VehicleOptions};
pub use track::TrackOptions;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[vehicle]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Virtual scroll track parameters.
    pub track: TrackOptions,
    /// Skyline section ranges, stagger and damping.
    pub skyline: SkylineOptions,
    /// Planet section framing.
    pub planet: PlanetOptions,
    /// Vehicle section bob and sweep.
    pub vehicle: VehicleOptions,
    /// Procedural layout counts, bounds and seed.
    pub layout: LayoutOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// JSON Schema serialized for embedding in a host tweak panel.
    pub fn json_schema_string() -> Result<String, RigError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| RigError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path).map_err(RigError::Io)?;
        toml::from_str(&content).map_err(|e| RigError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| RigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RigError::Io)?;
        }
        std::fs::write(path, content).map_err(RigError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::LayoutSeed;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[vehicle]
bob_amplitude = 0.9
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.vehicle.bob_amplitude, 0.9);
        // Everything else should be default
        assert_eq!(opts.vehicle.start, 0.54);
        assert_eq!(opts.track.pages, 6);
        assert_eq!(opts.layout.building_count, 120);
        assert_eq!(opts.layout.seed, LayoutSeed::Entropy);
    }

    #[test]
    fn fixed_seed_survives_round_trip() {
        let opts = Options {
            layout: LayoutOptions {
                seed: LayoutSeed::Fixed(1234),
                ..LayoutOptions::default()
            },
            ..Options::default()
        };
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.layout.seed, LayoutSeed::Fixed(1234));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value = serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("track"));
        assert!(props.contains_key("skyline"));
        assert!(props.contains_key("planet"));
        assert!(props.contains_key("vehicle"));
        assert!(props.contains_key("layout"));
    }

    #[test]
    fn schema_string_is_valid_json() {
        let s = Options::json_schema_string().unwrap();
        let value: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert!(value.is_object());
    }
}
