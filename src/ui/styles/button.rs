// SPDX-License-Identifier: MPL-2.0
//! Shared button styles: the accent call-to-action and the translucent
//! pill buttons that float over the viewer.

use crate::ui::design_tokens::{alpha, palette, radius, shadow};
use iced::widget::button;
use iced::{border, Background, Color, Theme};

/// The accent-filled call-to-action, used by the empty state's folder
/// picker.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (fill, edge, lift) = match status {
        button::Status::Hovered => (palette::ACCENT_BRIGHT, palette::ACCENT, shadow::FLOATING),
        button::Status::Active | button::Status::Pressed => {
            (palette::ACCENT, palette::ACCENT_DIM, shadow::RAISED)
        }
        button::Status::Disabled => return button::Style::default(),
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color: palette::WHITE,
        border: border::rounded(radius::CHIP).color(edge).width(1.0),
        shadow: lift,
        snap: true,
    }
}

/// Translucent black pill for controls floating over the viewer
/// backdrop. `idle` and `hover` pick the backdrop alpha per state.
pub fn overlay(
    text_color: Color,
    idle: f32,
    hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let a = match status {
            button::Status::Hovered => hover,
            button::Status::Pressed => alpha::INTENSE,
            button::Status::Active | button::Status::Disabled => idle,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a,
                ..palette::BLACK
            })),
            text_color,
            border: border::rounded(radius::PILL),
            shadow: shadow::FLOATING,
            snap: true,
        }
    }
}
