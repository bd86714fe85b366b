// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::ApiError;
use crate::store::Notification;
use crate::ui::theming::ThemeMode;
use crate::ui::toasts;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Start a fetch of the notification list (startup, refresh button, or
    /// auto-refresh tick).
    FetchRequested,
    /// The fetch settled. On success the store is fully replaced; on failure
    /// it is left untouched and the failure is surfaced to the user.
    FetchCompleted(Result<Vec<Notification>, ApiError>),
    /// Mark one notification read (dispatched by the clicked inbox row).
    MarkRead(u64),
    /// The mark-read call settled for the given id.
    MarkReadCompleted {
        id: u64,
        result: Result<(), ApiError>,
    },
    SwitchScreen(Screen),
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    RefreshIntervalSelected(u64),
    Toast(toasts::Message),
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional backend base URL override (takes precedence over the config
    /// file's `[server] base-url`).
    pub server: Option<String>,
}
