// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.
//!
//! Centralizing defaults here keeps `serde(default = ...)` attributes and
//! the `Default` impls in `config` from drifting apart.

use crate::ui::theming::ThemeMode;

/// Base URL of the backend when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Request timeout for API calls, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Interval between automatic inbox refreshes, in seconds. Zero disables
/// automatic refresh entirely.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;

pub(super) fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

pub(super) fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

pub(super) fn default_refresh_interval_secs() -> u64 {
    DEFAULT_REFRESH_INTERVAL_SECS
}

pub(super) fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}
