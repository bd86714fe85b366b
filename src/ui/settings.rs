// SPDX-License-Identifier: MPL-2.0
//! This module defines the UI components for the application's settings view.
//! It provides language, theme, and automatic-refresh selection; every change
//! is applied immediately and persisted to the config file.

use crate::app::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Horizontal,
    widget::{button, Button, Column, Container, Row, Text},
    Element, Length,
};

/// Selectable auto-refresh intervals, in seconds. Zero disables auto-refresh.
pub const REFRESH_CHOICES_SECS: [u64; 4] = [0, 30, 60, 300];

/// Context required to render the settings view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub refresh_interval_secs: u64,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let back_button = Button::new(Text::new(ctx.i18n.tr("settings-back")).size(typography::BODY))
        .on_press(Message::SwitchScreen(Screen::Inbox))
        .style(button::secondary);

    let content = Column::new()
        .push(title)
        .push(view_language_section(ctx.i18n))
        .push(view_theme_section(ctx.i18n, ctx.theme_mode))
        .push(view_refresh_section(ctx.i18n, ctx.refresh_interval_secs))
        .push(back_button)
        .spacing(spacing::LG)
        .width(Length::Fixed(sizing::SETTINGS_COLUMN_WIDTH))
        .align_x(Horizontal::Center);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::XL)
        .into()
}

fn view_language_section(i18n: &I18n) -> Element<'_, Message> {
    let mut section = Column::new()
        .push(Text::new(i18n.tr("select-language-label")).size(typography::TITLE_SM))
        .spacing(spacing::XS);

    for locale in &i18n.available_locales {
        let display_name = locale.to_string();

        // Check for a translated language name, e.g. "language-name-en-US"
        let translated_name_key = format!("language-name-{}", locale);
        let translated_name = i18n.tr(&translated_name_key);
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone()
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let is_current_locale = i18n.current_locale() == locale;
        let style = if is_current_locale {
            button::primary
        } else {
            button::secondary
        };

        section = section.push(
            Button::new(Text::new(button_text).size(typography::BODY))
                .on_press(Message::LanguageSelected(locale.clone()))
                .style(style),
        );
    }

    section.into()
}

fn view_theme_section(i18n: &I18n, current: ThemeMode) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for mode in ThemeMode::ALL {
        let style = if mode == current {
            button::primary
        } else {
            button::secondary
        };
        row = row.push(
            Button::new(Text::new(i18n.tr(mode.i18n_key())).size(typography::BODY))
                .on_press(Message::ThemeModeSelected(mode))
                .style(style),
        );
    }

    Column::new()
        .push(Text::new(i18n.tr("settings-theme-label")).size(typography::TITLE_SM))
        .push(row)
        .spacing(spacing::XS)
        .into()
}

fn view_refresh_section(i18n: &I18n, current_secs: u64) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for secs in REFRESH_CHOICES_SECS {
        let label = if secs == 0 {
            i18n.tr("refresh-off")
        } else {
            i18n.tr_with_args("refresh-every", &[("seconds", secs.to_string().as_str())])
        };
        let style = if secs == current_secs {
            button::primary
        } else {
            button::secondary
        };
        row = row.push(
            Button::new(Text::new(label).size(typography::BODY))
                .on_press(Message::RefreshIntervalSelected(secs))
                .style(style),
        );
    }

    Column::new()
        .push(Text::new(i18n.tr("settings-refresh-label")).size(typography::TITLE_SM))
        .push(row)
        .spacing(spacing::XS)
        .into()
}
