// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[server]` - Backend base URL, auth token, request timeout
//! - `[inbox]` - Automatic refresh interval
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_INBOX_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_inbox::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning key)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::{DEFAULT_BASE_URL, DEFAULT_REFRESH_INTERVAL_SECS, DEFAULT_TIMEOUT_SECS};

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use defaults::{
    default_base_url, default_refresh_interval_secs, default_theme_mode, default_timeout_secs,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedInbox";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_INBOX_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ServerConfig {
    /// Base URL of the backend API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Optional bearer token forwarded on every request. Token *lifecycle*
    /// (login, refresh) is not handled here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Inbox behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct InboxConfig {
    /// Seconds between automatic refreshes. Zero disables auto-refresh.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

impl Default for InboxConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

/// Root configuration, persisted as `settings.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub inbox: InboxConfig,
}

// =============================================================================
// Path resolution
// =============================================================================

/// Returns the directory where the config file lives.
///
/// Resolution order: `ICED_INBOX_CONFIG_DIR` environment variable (if set and
/// non-empty), then the platform config directory with the app name appended.
pub fn get_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_default_config_path() -> Option<PathBuf> {
    get_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default location.
///
/// Never fails: an unreadable or invalid file yields the default config plus
/// a warning key the caller can surface as a toast.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = get_default_config_path() else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            log::warn!("failed to load config from {}: {}", path.display(), err);
            (Config::default(), Some("toast-config-load-warning".into()))
        }
    }
}

/// Saves the configuration to the default location.
///
/// # Errors
///
/// Returns an error if the file cannot be serialized or written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads the configuration from an explicit path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to an explicit path, creating parent directories.
///
/// # Errors
///
/// Returns an error if the file cannot be serialized or written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
