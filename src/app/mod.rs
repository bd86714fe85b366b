// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the inbox and settings views.
//!
//! The `App` struct wires together the domains (notification store, API
//! client, localization, toasts) and translates messages into side effects
//! like network fetches or config persistence. This file intentionally keeps
//! policy decisions (window sizing, startup fetch, theme resolution) close
//! to the main update loop so it is easy to audit user-facing behavior.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::ApiClient;
use crate::config::{self, Config, ServerConfig};
use crate::i18n::fluent::I18n;
use crate::store::NotificationStore;
use crate::ui::toasts::{self, Toast};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges the notification store, the
/// backend client, localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    client: ApiClient,
    store: NotificationStore,
    /// Toast manager for transient user feedback.
    toasts: toasts::Manager,
    /// Number of notification fetches currently in flight.
    fetches_in_flight: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("notifications", &self.store.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 520;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the startup fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(server) = flags.server {
            config.server.base_url = server;
        }

        let i18n = I18n::new(flags.lang, &config);

        let mut toasts = toasts::Manager::new();
        if let Some(key) = config_warning {
            toasts.push(Toast::warning(&key));
        }

        let client = match ApiClient::new(&config.server) {
            Ok(client) => client,
            Err(err) => {
                log::error!("failed to build API client from config: {err}");
                toasts.push(Toast::warning("toast-client-init-failed"));
                ApiClient::new(&ServerConfig::default())
                    .expect("default HTTP client must build")
            }
        };

        let mut app = App {
            i18n,
            screen: Screen::Inbox,
            config,
            client,
            store: NotificationStore::new(),
            toasts,
            fetches_in_flight: 0,
        };

        // Load the inbox immediately on startup.
        let task = update::handle_fetch_requested(&mut app.update_context());

        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            config: &mut self.config,
            client: &mut self.client,
            store: &mut self.store,
            toasts: &mut self.toasts,
            fetches_in_flight: &mut self.fetches_in_flight,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let unread = self.store.unread_count();
        if unread > 0 {
            format!("({unread}) {app_name}")
        } else {
            app_name
        }
    }

    fn theme(&self) -> Theme {
        if self.config.general.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub = subscription::create_tick_subscription(self.toasts.has_toasts());
        let refresh_sub =
            subscription::create_refresh_subscription(self.config.inbox.refresh_interval_secs);

        Subscription::batch([tick_sub, refresh_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::FetchRequested => update::handle_fetch_requested(&mut ctx),
            Message::FetchCompleted(result) => update::handle_fetch_completed(&mut ctx, result),
            Message::MarkRead(id) => update::handle_mark_read(&mut ctx, id),
            Message::MarkReadCompleted { id, result } => {
                update::handle_mark_read_completed(&mut ctx, id, result)
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::LanguageSelected(locale) => {
                update::handle_language_selected(&mut ctx, locale)
            }
            Message::ThemeModeSelected(mode) => {
                update::handle_theme_mode_selected(&mut ctx, mode)
            }
            Message::RefreshIntervalSelected(secs) => {
                update::handle_refresh_interval_selected(&mut ctx, secs)
            }
            Message::Toast(toast_message) => {
                update::handle_toast_message(&mut ctx, &toast_message)
            }
            Message::Tick(_) => update::handle_tick(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            store: &self.store,
            toasts: &self.toasts,
            theme_mode: self.config.general.theme_mode,
            refresh_interval_secs: self.config.inbox.refresh_interval_secs,
            fetches_in_flight: self.fetches_in_flight,
        })
    }
}
