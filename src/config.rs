//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `$XDG_CONFIG_HOME/pathtree/pathtree.toml`, or the file given with `--config`
//! 3. Environment variables: `PATHTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::expand_env_vars;
use crate::infrastructure::traits::WalkOptions;

/// Structure printer default, matching the classic three-level dump.
pub const DEFAULT_DISPLAY_DEPTH: usize = 3;

/// Unified configuration for pathtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory loaded when none is given on the command line (default: ".")
    pub default_dir: PathBuf,
    /// Levels shown by `tree` (default: 3)
    pub display_depth: usize,
    /// Maximum load depth below the base directory (default: unlimited)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    /// Skip dot-files and dot-directories while loading (default: false)
    pub skip_hidden: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_dir: PathBuf::from("."),
            display_depth: DEFAULT_DISPLAY_DEPTH,
            max_depth: None,
            skip_hidden: false,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub default_dir: Option<PathBuf>,
    pub display_depth: Option<usize>,
    pub max_depth: Option<usize>,
    pub skip_hidden: Option<bool>,
}

/// Get the XDG config directory for pathtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pathtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("pathtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Walk options derived from the load-related fields.
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            max_depth: self.max_depth,
            skip_hidden: self.skip_hidden,
        }
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.default_dir.to_string_lossy().as_ref());
        self.default_dir = PathBuf::from(expanded);
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            default_dir: overlay
                .default_dir
                .clone()
                .unwrap_or_else(|| self.default_dir.clone()),
            display_depth: overlay.display_depth.unwrap_or(self.display_depth),
            max_depth: overlay.max_depth.or(self.max_depth),
            skip_hidden: overlay.skip_hidden.unwrap_or(self.skip_hidden),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit config file; replaces the global file lookup.
    ///   An explicit file must exist.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Config file
        match config_file {
            Some(path) => {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        let raw = load_raw_settings(&global_path)?;
                        current = current.merge_with(&raw);
                    }
                }
            }
        }

        // 3. Apply environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();

        Ok(current)
    }

    /// Apply PATHTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("PATHTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("default_dir") {
            settings.default_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get_int("display_depth") {
            settings.display_depth = to_usize("PATHTREE_DISPLAY_DEPTH", val)?;
        }
        if let Ok(val) = config.get_int("max_depth") {
            settings.max_depth = Some(to_usize("PATHTREE_MAX_DEPTH", val)?);
        }
        if let Ok(val) = config.get_bool("skip_hidden") {
            settings.skip_hidden = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# pathtree configuration
#
# Locations (by precedence, lowest to highest):
#   File: ~/.config/pathtree/pathtree.toml  (or --config <file>)
#   Env:  PATHTREE_* environment variables (explicit overrides)

# Directory loaded when none is given with -C
# default_dir = "."

# Levels printed by `pathtree tree`
# display_depth = 3

# Maximum depth mirrored below the loaded directory (unset = unlimited)
# max_depth = 10

# Skip dot-files and dot-directories while loading
# skip_hidden = false
"#
        .to_string()
    }
}

fn to_usize(name: &str, value: i64) -> Result<usize, ApplicationError> {
    usize::try_from(value).map_err(|_| ApplicationError::Config {
        message: format!("{name} must be non-negative, got {value}"),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_overlay_when_merging_then_keeps_defaults() {
        let settings = Settings::default().merge_with(&RawSettings::default());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn given_overlay_when_merging_then_overlay_wins() {
        let overlay = RawSettings {
            default_dir: Some(PathBuf::from("/data")),
            display_depth: Some(5),
            max_depth: Some(2),
            skip_hidden: Some(true),
        };
        let settings = Settings::default().merge_with(&overlay);
        assert_eq!(settings.default_dir, PathBuf::from("/data"));
        assert_eq!(settings.display_depth, 5);
        assert_eq!(settings.max_depth, Some(2));
        assert!(settings.skip_hidden);
    }

    #[test]
    fn given_settings_when_walk_options_then_carries_load_fields() {
        let settings = Settings {
            max_depth: Some(4),
            skip_hidden: true,
            ..Settings::default()
        };
        assert_eq!(
            settings.walk_options(),
            WalkOptions {
                max_depth: Some(4),
                skip_hidden: true
            }
        );
    }

    #[test]
    fn given_tilde_in_default_dir_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            default_dir: PathBuf::from("~/projects"),
            ..Settings::default()
        };
        settings.expand_paths();
        assert!(!settings.default_dir.to_string_lossy().starts_with('~'));
        assert!(settings.default_dir.ends_with("projects"));
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.default_dir.is_none());
        assert!(raw.max_depth.is_none());
    }

    #[test]
    fn given_default_settings_when_to_toml_then_omits_unset_max_depth() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("display_depth = 3"));
        assert!(!toml.contains("max_depth"));
    }

    #[test]
    fn given_negative_value_when_to_usize_then_config_error() {
        assert!(matches!(
            to_usize("X", -1),
            Err(ApplicationError::Config { .. })
        ));
        assert_eq!(to_usize("X", 7).unwrap(), 7);
    }
}
