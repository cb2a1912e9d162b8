// SPDX-License-Identifier: MPL-2.0
//! Container styles for the viewer overlay's backdrop and chrome.

use crate::ui::design_tokens::{alpha, palette};
use iced::widget::container;
use iced::{border, Background, Color, Theme};

/// The dimming layer between the grid and the viewed image.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: alpha::STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Rounded translucent chrome for the caption and position counter.
pub fn indicator(corner: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha::DIM,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: border::rounded(corner)
            .color(Color {
                a: alpha::FAINT,
                ..palette::WHITE
            })
            .width(1.0),
        ..container::Style::default()
    }
}
