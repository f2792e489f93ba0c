//! `[macos]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [macos]
//! output_dir = "icons"     # Icon set directory (relative to project root)
//! inset = 128              # Transparent margin per side at 1024px
//! radius_factor = 0.22     # Plate corner radius / plate side
//! supersample = 4          # Mask drawing resolution multiplier
//! corner_sample = 16       # Corner square side for backdrop sampling
//! alpha_threshold = 12     # Minimum alpha of sampled backdrop pixels
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, util::ratio_in_range};
use crate::image::color::{DEFAULT_ALPHA_THRESHOLD, DEFAULT_SAMPLE_SIZE};
use crate::image::macos::{DEFAULT_INSET, DEFAULT_SUPERSAMPLE, MacosOptions, PLATE_RADIUS_FACTOR};

const MAX_SUPERSAMPLE: u32 = 8;

/// macOS icon set settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacosConfig {
    /// Directory receiving the icon set.
    pub output_dir: PathBuf,

    /// Transparent margin per side, validated at export time.
    pub inset: i64,

    /// Plate corner radius relative to the plate side, in [0, 0.5].
    pub radius_factor: f32,

    /// Mask drawing resolution multiplier, 1..=8.
    pub supersample: u32,

    /// Side of each sampled corner square.
    pub corner_sample: u32,

    /// Minimum alpha of sampled corner pixels.
    pub alpha_threshold: u8,
}

impl Default for MacosConfig {
    fn default() -> Self {
        Self {
            output_dir: "icons".into(),
            inset: DEFAULT_INSET,
            radius_factor: PLATE_RADIUS_FACTOR,
            supersample: DEFAULT_SUPERSAMPLE,
            corner_sample: DEFAULT_SAMPLE_SIZE,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
        }
    }
}

impl MacosConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !ratio_in_range(self.radius_factor, 0.0, 0.5, true) {
            return Err(ConfigError::validation("macos.radius_factor", "must be in [0, 0.5]"));
        }
        if !(1..=MAX_SUPERSAMPLE).contains(&self.supersample) {
            return Err(ConfigError::validation(
                "macos.supersample",
                format!("must be in [1, {MAX_SUPERSAMPLE}]"),
            ));
        }
        if self.corner_sample == 0 {
            return Err(ConfigError::validation("macos.corner_sample", "must be greater than 0"));
        }
        Ok(())
    }

    pub fn options(&self) -> MacosOptions {
        MacosOptions {
            inset: self.inset,
            radius_factor: self.radius_factor,
            supersample: self.supersample,
            corner_sample: self.corner_sample,
            alpha_threshold: self.alpha_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::config::test_parse_config;
    use crate::image::macos::MacosOptions;

    #[test]
    fn test_macos_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.macos.output_dir, Path::new("icons"));
        assert_eq!(config.macos.options(), MacosOptions::default());
        assert!(config.macos.validate().is_ok());
    }

    #[test]
    fn test_macos_overrides() {
        let config = test_parse_config("[macos]\ninset = 100\nsupersample = 2\nalpha_threshold = 0");
        let opts = config.macos.options();
        assert_eq!(opts.inset, 100);
        assert_eq!(opts.supersample, 2);
        assert_eq!(opts.alpha_threshold, 0);
    }

    #[test]
    fn test_macos_negative_inset_parses() {
        // Range checking happens at export so the CLI and config report it the same way.
        let config = test_parse_config("[macos]\ninset = -4");
        assert_eq!(config.macos.inset, -4);
        assert!(config.macos.validate().is_ok());
    }

    #[test]
    fn test_macos_rejects_bad_values() {
        for extra in [
            "[macos]\nradius_factor = -0.1",
            "[macos]\nsupersample = 0",
            "[macos]\nsupersample = 9",
            "[macos]\ncorner_sample = 0",
        ] {
            let config = test_parse_config(extra);
            assert!(config.macos.validate().is_err(), "{extra}");
        }
    }
}
