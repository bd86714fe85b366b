// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the handlers `App::update` dispatches to. All store
//! mutations happen here, synchronously, after the corresponding network
//! task resolved — the view only ever observes a fully replaced map or a
//! single in-place read flip.

use super::{Message, Screen};
use crate::api::{self, ApiClient, ApiError};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::store::{Notification, NotificationStore};
use crate::ui::theming::ThemeMode;
use crate::ui::toasts::{self, Toast};
use iced::Task;
use unic_langid::LanguageIdentifier;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub config: &'a mut Config,
    pub client: &'a mut ApiClient,
    pub store: &'a mut NotificationStore,
    pub toasts: &'a mut toasts::Manager,
    /// Fetches currently in flight. Racing fetches are deliberately allowed
    /// (last completion wins); the counter only drives the UI indicator.
    pub fetches_in_flight: &'a mut u32,
}

/// Starts a fetch of the notification list.
///
/// Concurrent fetches are not mutually excluded: if two race, the store
/// reflects whichever resolves last. Callers needing strict ordering must
/// serialize their requests themselves.
pub fn handle_fetch_requested(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.fetches_in_flight += 1;

    let client = ctx.client.clone();
    Task::perform(
        async move { api::notifications::fetch_notifications(&client).await },
        Message::FetchCompleted,
    )
}

/// Applies the result of a settled fetch.
///
/// Exactly one store replacement happens per successful fetch; a failed
/// fetch leaves the store untouched, logs the error, and re-signals it to
/// this layer's caller-facing surface (an error toast).
pub fn handle_fetch_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<Notification>, ApiError>,
) -> Task<Message> {
    *ctx.fetches_in_flight = ctx.fetches_in_flight.saturating_sub(1);

    match result {
        Ok(notifications) => {
            log::debug!("fetched {} notifications", notifications.len());
            ctx.store.replace_all(notifications);
        }
        Err(err) => {
            log::error!("failed to fetch notifications: {err}");
            ctx.toasts.push(Toast::error("toast-fetch-failed"));
        }
    }

    Task::none()
}

/// Dispatches the mark-read command for one notification.
///
/// Always issues the network call, even for entries already read — the
/// server treats the operation as idempotent.
pub fn handle_mark_read(ctx: &mut UpdateContext<'_>, id: u64) -> Task<Message> {
    let client = ctx.client.clone();
    Task::perform(
        async move {
            let result = api::notifications::read_notification(&client, id).await;
            (id, result)
        },
        |(id, result)| Message::MarkReadCompleted { id, result },
    )
}

/// Applies the result of a settled mark-read call.
///
/// On success the entry's read flag is flipped in place, leaving all other
/// entries untouched. If an intervening fetch purged the entry the flip is a
/// silent no-op. On failure a warning toast is shown and the store is left
/// untouched; the failure is terminal here and not re-signaled.
pub fn handle_mark_read_completed(
    ctx: &mut UpdateContext<'_>,
    id: u64,
    result: Result<(), ApiError>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            if !ctx.store.mark_read(&id.to_string()) {
                log::debug!("notification {id} no longer in store, ignoring read confirmation");
            }
        }
        Err(err) => {
            log::error!("failed to mark notification {id} as read: {err}");
            ctx.toasts.push(Toast::warning("toast-mark-read-failed"));
        }
    }

    Task::none()
}

/// Switches the active screen.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    *ctx.screen = target;
    Task::none()
}

/// Applies a language selection and persists it.
pub fn handle_language_selected(
    ctx: &mut UpdateContext<'_>,
    locale: LanguageIdentifier,
) -> Task<Message> {
    ctx.i18n.set_locale(locale.clone());
    ctx.config.general.language = Some(locale.to_string());
    persist_config(ctx);
    Task::none()
}

/// Applies a theme mode selection and persists it.
pub fn handle_theme_mode_selected(ctx: &mut UpdateContext<'_>, mode: ThemeMode) -> Task<Message> {
    ctx.config.general.theme_mode = mode;
    persist_config(ctx);
    Task::none()
}

/// Applies an auto-refresh interval selection and persists it.
pub fn handle_refresh_interval_selected(
    ctx: &mut UpdateContext<'_>,
    secs: u64,
) -> Task<Message> {
    ctx.config.inbox.refresh_interval_secs = secs;
    persist_config(ctx);
    Task::none()
}

/// Forwards a toast message to the manager.
pub fn handle_toast_message(ctx: &mut UpdateContext<'_>, message: &toasts::Message) -> Task<Message> {
    ctx.toasts.handle_message(message);
    Task::none()
}

/// Processes the periodic tick, driving toast auto-dismiss.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.toasts.tick();
    Task::none()
}

/// Saves the current config, surfacing the outcome as a toast.
fn persist_config(ctx: &mut UpdateContext<'_>) {
    match config::save(ctx.config) {
        Ok(()) => ctx.toasts.push(Toast::success("toast-settings-saved")),
        Err(err) => {
            log::error!("failed to save settings: {err}");
            ctx.toasts.push(Toast::warning("toast-settings-save-failed"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::ui::toasts::Severity;
    use chrono::{TimeZone, Utc};

    struct TestState {
        i18n: I18n,
        screen: Screen,
        config: Config,
        client: ApiClient,
        store: NotificationStore,
        toasts: toasts::Manager,
        fetches_in_flight: u32,
    }

    impl TestState {
        fn new() -> Self {
            let config = Config::default();
            let client = ApiClient::new(&ServerConfig::default()).expect("client builds");
            Self {
                i18n: I18n::default(),
                screen: Screen::Inbox,
                config,
                client,
                store: NotificationStore::new(),
                toasts: toasts::Manager::new(),
                fetches_in_flight: 0,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                i18n: &mut self.i18n,
                screen: &mut self.screen,
                config: &mut self.config,
                client: &mut self.client,
                store: &mut self.store,
                toasts: &mut self.toasts,
                fetches_in_flight: &mut self.fetches_in_flight,
            }
        }
    }

    fn notification(id: u64, is_read: bool) -> Notification {
        Notification {
            id,
            summary: format!("notification {id}"),
            body: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            is_read,
        }
    }

    #[test]
    fn fetch_requested_increments_in_flight_counter() {
        let mut state = TestState::new();
        let _task = handle_fetch_requested(&mut state.ctx());
        assert_eq!(state.fetches_in_flight, 1);

        // Racing fetches are allowed and tracked
        let _task = handle_fetch_requested(&mut state.ctx());
        assert_eq!(state.fetches_in_flight, 2);
    }

    #[test]
    fn successful_fetch_replaces_store_contents() {
        let mut state = TestState::new();
        state.fetches_in_flight = 1;

        let _task = handle_fetch_completed(
            &mut state.ctx(),
            Ok(vec![notification(1, false), notification(2, false)]),
        );

        assert_eq!(state.fetches_in_flight, 0);
        assert_eq!(state.store.len(), 2);
        assert!(state.store.get("1").is_some());
        assert!(state.store.get("2").is_some());
        assert_eq!(state.toasts.visible_count(), 0);
    }

    #[test]
    fn failed_fetch_leaves_store_untouched_and_surfaces_error() {
        let mut state = TestState::new();
        state.store.replace_all(vec![notification(1, false)]);
        state.fetches_in_flight = 1;

        let _task = handle_fetch_completed(&mut state.ctx(), Err(ApiError::Status(500)));

        assert_eq!(state.fetches_in_flight, 0);
        assert_eq!(state.store.len(), 1);
        assert!(!state.store.get("1").unwrap().is_read);

        let toast = state.toasts.visible().next().expect("error toast shown");
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.message_key(), "toast-fetch-failed");
    }

    #[test]
    fn successful_mark_read_flips_only_the_target_entry() {
        let mut state = TestState::new();
        state
            .store
            .replace_all(vec![notification(1, false), notification(2, false)]);

        let _task = handle_mark_read_completed(&mut state.ctx(), 1, Ok(()));

        assert!(state.store.get("1").unwrap().is_read);
        assert!(!state.store.get("2").unwrap().is_read);
        assert_eq!(state.toasts.visible_count(), 0);
    }

    #[test]
    fn failed_mark_read_shows_exactly_one_warning_and_leaves_store() {
        let mut state = TestState::new();
        state
            .store
            .replace_all(vec![notification(1, false), notification(2, false)]);

        let _task = handle_mark_read_completed(
            &mut state.ctx(),
            1,
            Err(ApiError::Transport("connection reset".into())),
        );

        assert!(!state.store.get("1").unwrap().is_read);
        assert!(!state.store.get("2").unwrap().is_read);
        assert_eq!(state.toasts.visible_count(), 1);

        let toast = state.toasts.visible().next().unwrap();
        assert_eq!(toast.severity(), Severity::Warning);
        assert_eq!(toast.message_key(), "toast-mark-read-failed");
    }

    #[test]
    fn mark_read_on_already_read_entry_is_idempotent() {
        let mut state = TestState::new();
        state.store.replace_all(vec![notification(1, true)]);

        let _task = handle_mark_read_completed(&mut state.ctx(), 1, Ok(()));

        assert!(state.store.get("1").unwrap().is_read);
        assert_eq!(state.toasts.visible_count(), 0);
    }

    #[test]
    fn mark_read_confirmation_for_purged_entry_is_a_silent_no_op() {
        let mut state = TestState::new();
        state.store.replace_all(vec![notification(1, false)]);

        // An intervening fetch purged entry 1 before the confirmation landed.
        state.store.replace_all(vec![notification(2, false)]);

        let _task = handle_mark_read_completed(&mut state.ctx(), 1, Ok(()));

        assert!(state.store.get("1").is_none());
        assert!(!state.store.get("2").unwrap().is_read);
        assert_eq!(state.toasts.visible_count(), 0);
    }

    #[test]
    fn fetch_click_fetch_scenario() {
        let mut state = TestState::new();

        // Fetch returns two unread notifications
        let _ = handle_fetch_completed(
            &mut state.ctx(),
            Ok(vec![notification(1, false), notification(2, false)]),
        );
        assert_eq!(state.store.len(), 2);

        // Click on "1" succeeds
        let _ = handle_mark_read_completed(&mut state.ctx(), 1, Ok(()));
        assert!(state.store.get("1").unwrap().is_read);
        assert!(!state.store.get("2").unwrap().is_read);

        // A second fetch returns only "2": key "1" is gone
        let _ = handle_fetch_completed(&mut state.ctx(), Ok(vec![notification(2, false)]));
        assert_eq!(state.store.len(), 1);
        assert!(state.store.get("1").is_none());
        assert!(state.store.get("2").is_some());
    }

    #[test]
    fn screen_switch_changes_active_screen() {
        let mut state = TestState::new();
        let _ = handle_screen_switch(&mut state.ctx(), Screen::Settings);
        assert_eq!(state.screen, Screen::Settings);
    }
}
