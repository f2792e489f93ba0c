//! `[preview]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [preview]
//! input = "app-icon.png"        # Source artwork (relative to project root)
//! output = "icon-preview.png"   # Written preview (relative to project root)
//! size = 1024                   # Canvas side in pixels
//! icon_scale = 0.847            # Rounded square side / canvas side
//! content_scale = 0.72          # Longest artwork side / rounded square side
//! corner_radius = 0.225         # Corner radius / rounded square side
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, util::ratio_in_range};
use crate::image::preview::{
    DEFAULT_CONTENT_SCALE, DEFAULT_CORNER_RADIUS, DEFAULT_ICON_SCALE, DEFAULT_SIZE, PreviewOptions,
};

/// Preview icon settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Source artwork path.
    pub input: PathBuf,

    /// Output PNG path.
    pub output: PathBuf,

    /// Canvas side in pixels.
    pub size: u32,

    /// Rounded square side relative to the canvas, in (0, 1].
    pub icon_scale: f32,

    /// Longest artwork side relative to the rounded square, in (0, 1].
    pub content_scale: f32,

    /// Corner radius relative to the rounded square, in [0, 0.5].
    pub corner_radius: f32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            input: "app-icon.png".into(),
            output: "icon-preview.png".into(),
            size: DEFAULT_SIZE,
            icon_scale: DEFAULT_ICON_SCALE,
            content_scale: DEFAULT_CONTENT_SCALE,
            corner_radius: DEFAULT_CORNER_RADIUS,
        }
    }
}

impl PreviewConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::validation("preview.size", "must be greater than 0"));
        }
        if !ratio_in_range(self.icon_scale, 0.0, 1.0, false) {
            return Err(ConfigError::validation("preview.icon_scale", "must be in (0, 1]"));
        }
        if !ratio_in_range(self.content_scale, 0.0, 1.0, false) {
            return Err(ConfigError::validation("preview.content_scale", "must be in (0, 1]"));
        }
        if !ratio_in_range(self.corner_radius, 0.0, 0.5, true) {
            return Err(ConfigError::validation("preview.corner_radius", "must be in [0, 0.5]"));
        }
        // A tiny canvas can floor the rounded square to nothing.
        if self.options().icon_size() == 0 {
            return Err(ConfigError::validation(
                "preview.size",
                format!("{} is too small for icon_scale {}", self.size, self.icon_scale),
            ));
        }
        Ok(())
    }

    pub fn options(&self) -> PreviewOptions {
        PreviewOptions {
            size: self.size,
            icon_scale: self.icon_scale,
            content_scale: self.content_scale,
            corner_radius: self.corner_radius,
        }
    }
}
