// SPDX-License-Identifier: MPL-2.0
//! Persistent settings, stored as `settings.toml`.
//!
//! Two sections are recognized: `[general]` for look-and-feel and
//! `[gallery]` for sort order and neighbor-preload sizing. Missing keys
//! and missing sections fall back to defaults, so old files keep working
//! across upgrades.
//!
//! The directory holding the file is resolved in priority order: an
//! explicit path handed to [`load_from_path`]/[`save_to_path`], the
//! `--config-dir` flag, the `ICED_MOSAIC_CONFIG_DIR` environment
//! variable, then the platform config directory.
//!
//! ```no_run
//! use iced_mosaic::config::{self, SortOrder};
//!
//! let (mut settings, _warning) = config::load();
//! settings.gallery.sort_order = Some(SortOrder::CreatedDate);
//! config::save(&settings)?;
//! # Ok::<(), iced_mosaic::error::Error>(())
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const CONFIG_FILE: &str = "settings.toml";

/// Directory name under the platform config root.
const APP_NAME: &str = "IcedMosaic";

/// Overrides the config directory when set, mainly for tests.
pub const ENV_CONFIG_DIR: &str = "ICED_MOSAIC_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the `--config-dir` CLI override.
///
/// Must be called at most once, before any load/save goes through the
/// default path resolution.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init_cli_override(config_dir: Option<String>) {
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("config dir override set twice");
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var(ENV_CONFIG_DIR).ok().map(PathBuf::from)
}

/// Resolves the directory holding `settings.toml`.
///
/// Priority: explicit override > CLI flag > environment variable >
/// platform config directory.
fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir
        .or_else(cli_config_dir)
        .or_else(env_config_dir)
        .or_else(|| dirs::config_dir().map(|p| p.join(APP_NAME)))
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Ordering applied to scanned image files before a batch is imported.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

impl SortOrder {
    /// Parses the CLI spelling of a sort order (`alphabetical`,
    /// `modified-date`, `created-date`).
    #[must_use]
    pub fn from_cli(value: &str) -> Option<Self> {
        match value {
            "alphabetical" => Some(Self::Alphabetical),
            "modified-date" => Some(Self::ModifiedDate),
            "created-date" => Some(Self::CreatedDate),
            _ => None,
        }
    }
}

/// Top-level look-and-feel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Light, dark, or follow the desktop.
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Gallery behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Image file ordering within a scanned folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    /// Whether full-resolution neighbor preloading is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preload_enabled: Option<bool>,

    /// Maximum number of decoded images kept by the preload cache.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preload_max_images: Option<usize>,

    /// Preload cache budget in megabytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preload_cache_mb: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            sort_order: Some(SortOrder::default()),
            preload_enabled: Some(true),
            preload_max_images: None,
            preload_cache_mb: None,
        }
    }
}

/// Root configuration document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

/// Reads the settings from the resolved default location.
///
/// Returns `(config, optional_warning)`. A missing file is normal and
/// yields defaults silently; a file that exists but cannot be read or
/// parsed yields defaults plus a message worth showing the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Like [`load`], with `base_dir` taking priority over every other
/// location.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some("Could not read settings; defaults are in use".to_string()),
        ),
    }
}

/// Reads settings from a specific file.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] when the file cannot be read and
/// [`crate::error::Error::Config`] when it does not parse.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Writes the settings to the resolved default location.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] when the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Like [`save`], with `base_dir` taking priority over every other
/// location. With no resolvable directory at all, the save is skipped.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] when the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Writes settings to a specific file, creating missing parent
/// directories first.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] when directories or the file
/// cannot be written, and [`crate::error::Error::Config`] on
/// serialization failure.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn scratch_dir() -> tempfile::TempDir {
        tempdir().expect("temp dir")
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
            },
            gallery: GalleryConfig {
                sort_order: Some(SortOrder::ModifiedDate),
                preload_enabled: Some(false),
                preload_max_images: Some(8),
                preload_cache_mb: Some(64),
            },
        };

        let temp_dir = scratch_dir();
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("save settings");
        let loaded = load_from_path(&config_path).expect("load settings");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_with_override_missing_file_returns_default_without_warning() {
        let temp_dir = scratch_dir();
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none(), "missing file should not warn");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_corrupted_file_returns_default_with_warning() {
        let temp_dir = scratch_dir();
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "this is { not toml").expect("write corrupted file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_some(), "corrupted file should warn");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_round_trips_through_directory() {
        let temp_dir = scratch_dir();
        let base = temp_dir.path().to_path_buf();

        let mut config = Config::default();
        config.gallery.sort_order = Some(SortOrder::CreatedDate);
        save_with_override(&config, Some(base.clone())).expect("save settings");

        let (loaded, warning) = load_with_override(Some(base));
        assert!(warning.is_none());
        assert_eq!(loaded.gallery.sort_order, Some(SortOrder::CreatedDate));
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = scratch_dir();
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\ntheme_mode = \"light\"\n").expect("write partial file");

        let config = load_from_path(&path).expect("partial file should parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
        assert_eq!(config.gallery, GalleryConfig::default());
    }

    #[test]
    fn sort_order_uses_kebab_case_spelling() {
        let toml = "[gallery]\nsort_order = \"modified-date\"\n";
        let config: Config = toml::from_str(toml).expect("kebab-case should parse");
        assert_eq!(config.gallery.sort_order, Some(SortOrder::ModifiedDate));
    }

    #[test]
    fn sort_order_from_cli_accepts_known_spellings() {
        assert_eq!(
            SortOrder::from_cli("alphabetical"),
            Some(SortOrder::Alphabetical)
        );
        assert_eq!(
            SortOrder::from_cli("modified-date"),
            Some(SortOrder::ModifiedDate)
        );
        assert_eq!(
            SortOrder::from_cli("created-date"),
            Some(SortOrder::CreatedDate)
        );
        assert_eq!(SortOrder::from_cli("random"), None);
    }
}
