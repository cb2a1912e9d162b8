// SPDX-License-Identifier: MPL-2.0
//! Toast cards and the overlay that stacks them.
//!
//! Severity is carried by color alone: a dot and the card's accent
//! border, no icon set. The overlay pins the stack to the bottom-right
//! corner, oldest toast on top.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::ui::design_tokens::{alpha, palette, radius, shadow, sizing, spacing, stroke, typography};
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, border, Background, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// The full toast overlay for the currently visible notifications.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        if manager.visible_count() == 0 {
            return Space::new().into();
        }

        let mut stack = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);
        for notification in manager.visible() {
            stack = stack.push(Self::card(notification));
        }

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }

    /// One toast card: dot, message, dismiss button.
    fn card(notification: &Notification) -> Element<'_, Message> {
        let accent = notification.severity().accent();

        let message = Text::new(notification.message())
            .size(typography::BODY)
            .width(Length::Fill);

        let dismiss = button(
            Text::new("\u{00D7}")
                .size(typography::BODY_LARGE)
                .align_x(alignment::Horizontal::Center),
        )
        .on_press(Message::Dismiss(notification.id()))
        .padding(spacing::XXS)
        .width(Length::Fixed(sizing::ICON))
        .style(dismiss_style);

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(severity_dot(accent))
            .push(message)
            .push(dismiss);

        Container::new(row)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| card_style(theme, accent))
            .into()
    }
}

fn severity_dot(accent: Color) -> Element<'static, Message> {
    Container::new(Space::new().width(spacing::XS).height(spacing::XS))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(accent)),
            border: border::rounded(radius::PILL),
            ..container::Style::default()
        })
        .into()
}

fn card_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: border::rounded(radius::CARD)
            .color(accent)
            .width(stroke::ACCENT),
        shadow: shadow::FLOATING,
        text_color: Some(theme.palette().text),
        ..container::Style::default()
    }
}

fn dismiss_style(theme: &Theme, status: button::Status) -> button::Style {
    let tint = match status {
        button::Status::Hovered => Some(alpha::FAINT),
        button::Status::Pressed => Some(alpha::HALF),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: tint.map(|a| Background::Color(Color { a, ..palette::GRAY })),
        text_color: theme.extended_palette().background.base.text,
        border: border::rounded(radius::CHIP),
        shadow: shadow::NONE,
        snap: true,
    }
}
