// SPDX-License-Identifier: MPL-2.0
//! Widget rendering for toasts.
//!
//! Toasts are rendered as small cards with a severity-colored accent border
//! and a dismiss button, stacked in the bottom-right corner.

use super::manager::{Manager, Message};
use super::toast::Toast;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders a single toast.
pub fn view<'a>(toast: &'a Toast, i18n: &'a I18n) -> Element<'a, Message> {
    let severity = toast.severity();
    let accent_color = severity.color();

    // Resolve the message text using i18n with optional arguments
    let message_text = if toast.message_args().is_empty() {
        i18n.tr(toast.message_key())
    } else {
        let args: Vec<(&str, &str)> = toast
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(toast.message_key(), &args)
    };

    // Severity marker, colored like the accent border
    let marker = Text::new("●")
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent_color),
        });

    let message_widget = Text::new(message_text)
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let toast_id = toast.id();
    let dismiss_button = button(Text::new("✕").size(typography::BODY_SM))
        .on_press(Message::Dismiss(toast_id))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    // Layout: [marker] [message] [dismiss]
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(marker).padding(spacing::XXS))
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent_color))
        .into()
}

/// Renders the toast overlay with all visible toasts.
///
/// Positions toasts in the bottom-right corner, stacked vertically.
pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let toasts: Vec<Element<'a, Message>> =
        manager.visible().map(|toast| view(toast, i18n)).collect();

    if toasts.is_empty() {
        // Return an empty container that takes no space
        Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into()
    } else {
        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
