// SPDX-License-Identifier: MPL-2.0
//! Inbox screen: renders the notification store as a list.
//!
//! Each row is a clickable card; clicking an unread notification dispatches
//! the mark-read command for that entry. The view is a pure function of the
//! store, so every store replacement is observed on the next render.

use crate::app::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::store::{Notification, NotificationStore};
use crate::ui::design_tokens::{border, palette, radius, shadow, spacing, typography};
use iced::widget::{button, scrollable, text, Button, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Context required to render the inbox view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a NotificationStore,
    /// Number of fetches currently in flight. Racing fetches are allowed;
    /// this only drives the "Refreshing…" indicator.
    pub fetches_in_flight: u32,
}

/// Renders the inbox screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = view_header(&ctx);

    let body: Element<'_, Message> = if ctx.store.is_empty() {
        Container::new(
            Text::new(ctx.i18n.tr("inbox-empty"))
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        )
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .into()
    } else {
        let mut list = Column::new().spacing(spacing::XS).padding(spacing::MD);
        for notification in ctx.store.sorted_for_display() {
            list = list.push(view_row(notification, ctx.i18n));
        }
        scrollable(list).width(Length::Fill).height(Length::Fill).into()
    };

    Column::new()
        .push(header)
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("inbox-title")).size(typography::TITLE_LG);

    let unread = ctx.store.unread_count().to_string();
    let total = ctx.store.len().to_string();
    let counter = Text::new(ctx.i18n.tr_with_args(
        "inbox-unread-count",
        &[("unread", unread.as_str()), ("total", total.as_str())],
    ))
    .size(typography::BODY_SM)
    .style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.weak.text),
    });

    let refresh_key = if ctx.fetches_in_flight > 0 {
        "inbox-refreshing"
    } else {
        "inbox-refresh"
    };
    let refresh_button = Button::new(Text::new(ctx.i18n.tr(refresh_key)).size(typography::BODY))
        .on_press(Message::FetchRequested)
        .style(button::secondary);

    let settings_button =
        Button::new(Text::new(ctx.i18n.tr("settings-title")).size(typography::BODY))
            .on_press(Message::SwitchScreen(Screen::Settings))
            .style(button::secondary);

    Row::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(
            Container::new(counter)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left)
                .padding(spacing::XXS),
        )
        .push(refresh_button)
        .push(settings_button)
        .into()
}

fn view_row<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let is_read = notification.is_read;

    let summary = Text::new(notification.summary.as_str()).size(typography::BODY);

    let mut details = Column::new().spacing(spacing::XXS).push(summary);
    if let Some(body) = &notification.body {
        details = details.push(
            Text::new(body.as_str())
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        );
    }

    let timestamp = Text::new(notification.created_at.format("%Y-%m-%d %H:%M").to_string())
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.weak.text),
        });

    let badge_key = if is_read {
        "inbox-read-label"
    } else {
        "inbox-unread-label"
    };
    let badge = Text::new(i18n.tr(badge_key))
        .size(typography::CAPTION)
        .style(move |theme: &Theme| text::Style {
            color: Some(if is_read {
                theme.extended_palette().background.weak.text
            } else {
                palette::PRIMARY_500
            }),
        });

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(details).width(Length::Fill))
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .align_x(alignment::Horizontal::Right)
                .push(badge)
                .push(timestamp),
        );

    Button::new(content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .on_press(Message::MarkRead(notification.id))
        .style(move |theme, status| row_style(theme, status, is_read))
        .into()
}

/// Style function for a notification row. Unread rows carry the brand accent
/// on their left-leaning border; read rows fade into the background.
fn row_style(theme: &Theme, status: button::Status, is_read: bool) -> button::Style {
    let base = theme.extended_palette().background;

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => base.weak.color,
        _ => base.base.color,
    };

    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: base.base.text,
        border: iced::Border {
            color: if is_read {
                base.weak.color
            } else {
                palette::PRIMARY_500
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
