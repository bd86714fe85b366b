// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, with the toast overlay stacked on top.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::store::NotificationStore;
use crate::ui::inbox::{self, ViewContext as InboxViewContext};
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::theming::ThemeMode;
use crate::ui::toasts;
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub store: &'a NotificationStore,
    pub toasts: &'a toasts::Manager,
    pub theme_mode: ThemeMode,
    pub refresh_interval_secs: u64,
    pub fetches_in_flight: u32,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Inbox => inbox::view(InboxViewContext {
            i18n: ctx.i18n,
            store: ctx.store,
            fetches_in_flight: ctx.fetches_in_flight,
        }),
        Screen::Settings => settings::view(SettingsViewContext {
            i18n: ctx.i18n,
            theme_mode: ctx.theme_mode,
            refresh_interval_secs: ctx.refresh_interval_secs,
        }),
    };

    let content = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    let overlay = toasts::widget::view_overlay(ctx.toasts, ctx.i18n).map(Message::Toast);

    Stack::new()
        .push(content)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
