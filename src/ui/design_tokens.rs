// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the gallery UI.
//!
//! Every color, size, and alpha the widgets use lives here so the grid,
//! the viewer overlay, and the toasts stay visually consistent. Spacing
//! derives from an 8 px base unit.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Neutral ramp, dark to light
    pub const GRAY_DARK: Color = Color::from_rgb(0.30, 0.30, 0.32);
    pub const GRAY: Color = Color::from_rgb(0.45, 0.45, 0.47);
    pub const GRAY_LIGHT: Color = Color::from_rgb(0.76, 0.76, 0.78);

    // Accent ramp, matches the branding tiles
    pub const ACCENT_BRIGHT: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const ACCENT: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const ACCENT_DIM: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Toast accents
    pub const SUCCESS: Color = Color::from_rgb(0.22, 0.66, 0.37);
    pub const INFO: Color = Color::from_rgb(0.36, 0.61, 0.96);
    pub const WARNING: Color = Color::from_rgb(0.93, 0.62, 0.14);
    pub const ERROR: Color = Color::from_rgb(0.86, 0.25, 0.22);
}

pub mod alpha {
    /// Hover tints behind small controls, hairline borders.
    pub const FAINT: f32 = 0.2;
    /// Idle overlay buttons, pressed tints.
    pub const HALF: f32 = 0.5;
    /// The caption pill and position counter chrome.
    pub const DIM: f32 = 0.72;
    /// The viewer backdrop and hovered overlay buttons.
    pub const STRONG: f32 = 0.85;
    /// Pressed overlay buttons.
    pub const INTENSE: f32 = 0.92;

    // Placeholder cells pulse between these two
    pub const PULSE_FLOOR: f32 = 0.35;
    pub const PULSE_CEIL: f32 = 0.6;
}

pub mod spacing {
    const UNIT: f32 = 8.0;

    pub const XXS: f32 = UNIT / 2.0;
    pub const XS: f32 = UNIT;
    pub const SM: f32 = UNIT * 1.5;
    pub const MD: f32 = UNIT * 2.0;
    pub const LG: f32 = UNIT * 3.0;
    pub const XL: f32 = UNIT * 4.0;
}

pub mod sizing {
    /// Square icons inside buttons.
    pub const ICON: f32 = 24.0;
    /// Viewer previous/next hit targets.
    pub const NAV_BUTTON: f32 = 48.0;
    /// Fixed toast card width.
    pub const TOAST_WIDTH: f32 = 320.0;
}

pub mod typography {
    /// App name and the empty-state headline.
    pub const TITLE: f32 = 20.0;
    /// Emphasis text.
    pub const BODY_LARGE: f32 = 16.0;
    /// Default UI text.
    pub const BODY: f32 = 14.0;
    /// Progress readout and the position indicator.
    pub const CAPTION: f32 = 12.0;
}

pub mod stroke {
    /// Severity accent border around a toast card.
    pub const ACCENT: f32 = 2.0;
}

pub mod radius {
    /// Small chrome: dismiss buttons, severity dots.
    pub const CHIP: f32 = 4.0;
    /// Cards: toasts, placeholder cells.
    pub const CARD: f32 = 8.0;
    /// Large surfaces: the viewer's image frame.
    pub const SHEET: f32 = 12.0;
    /// Pill-shaped buttons.
    pub const PILL: f32 = 9999.0;
}

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    const TINT: Color = Color {
        a: 0.35,
        ..Color::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Slight lift for buttons.
    pub const RAISED: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Cards floating over content.
    pub const FLOATING: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);
    assert!(spacing::LG < spacing::XL);

    assert!(alpha::PULSE_FLOOR < alpha::PULSE_CEIL);
    assert!(alpha::PULSE_CEIL < 1.0);
    assert!(alpha::FAINT < alpha::HALF);
    assert!(alpha::HALF < alpha::DIM);
    assert!(alpha::DIM < alpha::STRONG);
    assert!(alpha::STRONG < alpha::INTENSE);

    assert!(typography::CAPTION < typography::BODY);
    assert!(typography::BODY < typography::BODY_LARGE);
    assert!(typography::BODY_LARGE < typography::TITLE);

    assert!(radius::CHIP < radius::CARD);
    assert!(radius::CARD < radius::SHEET);
};
