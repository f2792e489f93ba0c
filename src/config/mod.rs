//! Project configuration management for `iconplate.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── preview    # [preview]
//! │   └── macos      # [macos]
//! ├── error          # ConfigError
//! ├── util           # Config file lookup, range checks
//! └── mod.rs         # IconConfig (this file)
//! ```
//!
//! The file is optional. Without one every setting takes its built-in
//! default and relative paths resolve against the current directory.
//! Command-line arguments override the file.

mod error;
pub mod section;
mod util;

pub use error::ConfigError;
pub use section::{MacosConfig, PreviewConfig};

use util::find_config_file;

use crate::cli::{Cli, Commands, MacosArgs, PreviewArgs};
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing iconplate.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IconConfig {
    /// Project root directory - parent of config file or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Preview icon settings
    #[serde(default)]
    pub preview: PreviewConfig,

    /// macOS icon set settings
    #[serde(default)]
    pub macos: MacosConfig,
}

impl IconConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's parent directory, or cwd when no file exists.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                config
            }
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.normalize_paths();
        config.apply_command_options(cli);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    /// Resolve config-relative paths against the project root.
    fn normalize_paths(&mut self) {
        let root = self.root.clone();
        for path in [
            &mut self.preview.input,
            &mut self.preview.output,
            &mut self.macos.output_dir,
        ] {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    ///
    /// Paths given on the command line stay relative to cwd.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Preview { args } => self.apply_preview_args(args),
            Commands::Macos { args } => self.apply_macos_args(args),
        }
    }

    fn apply_preview_args(&mut self, args: &PreviewArgs) {
        Self::update_option(&mut self.preview.input, args.input.as_ref());
        Self::update_option(&mut self.preview.output, args.output.as_ref());
        Self::update_option(&mut self.preview.size, args.size.as_ref());
    }

    fn apply_macos_args(&mut self, args: &MacosArgs) {
        Self::update_option(&mut self.macos.output_dir, args.output_dir.as_ref());
        Self::update_option(&mut self.macos.inset, args.inset.as_ref());
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.preview.validate()?;
        self.macos.validate()
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> IconConfig {
    let (parsed, ignored) = IconConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("iconplate").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let (config, ignored) =
            IconConfig::parse_with_ignored("[preview]\nsize = 256\nshape = \"circle\"").unwrap();
        assert_eq!(config.preview.size, 256);
        assert_eq!(ignored, vec!["preview.shape".to_string()]);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            IconConfig::parse_with_ignored("[preview\nsize = 1"),
            Err(ConfigError::Toml(_))
        ));
        assert!(IconConfig::parse_with_ignored("[macos]\ninset = \"wide\"").is_err());
    }

    #[test]
    fn test_paths_resolve_against_root() {
        let mut config = test_parse_config("[preview]\ninput = \"/abs/art.png\"");
        config.root = PathBuf::from("/project");
        config.normalize_paths();

        assert_eq!(config.preview.input, Path::new("/abs/art.png"));
        assert_eq!(config.preview.output, Path::new("/project/icon-preview.png"));
        assert_eq!(config.macos.output_dir, Path::new("/project/icons"));
    }

    #[test]
    fn test_cli_overrides_preview() {
        let mut config = test_parse_config("[preview]\nsize = 2048");
        config.apply_command_options(&cli(&["preview", "-i", "in.png", "--size", "256"]));

        assert_eq!(config.preview.input, Path::new("in.png"));
        assert_eq!(config.preview.output, Path::new("icon-preview.png"));
        assert_eq!(config.preview.size, 256);
    }

    #[test]
    fn test_cli_overrides_macos() {
        let mut config = test_parse_config("[macos]\ninset = 100\noutput_dir = \"out\"");
        config.apply_command_options(&cli(&["macos", "logo.png", "./set", "140"]));
        assert_eq!(config.macos.output_dir, Path::new("./set"));
        assert_eq!(config.macos.inset, 140);

        let mut config = test_parse_config("[macos]\ninset = 100");
        config.apply_command_options(&cli(&["macos", "logo.png"]));
        assert_eq!(config.macos.inset, 100);
        assert_eq!(config.macos.output_dir, Path::new("icons"));
    }

    #[test]
    fn test_validate_reports_field() {
        let config = test_parse_config("[macos]\nsupersample = 0");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("macos.supersample"));
    }
}
