// SPDX-License-Identifier: MPL-2.0
//! Resolving the persisted theme preference to a renderer theme.

use serde::{Deserialize, Serialize};

/// Theme preference as it appears in the settings file.
///
/// Serialized lowercase, so `theme_mode = "system"` on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Whether the mode resolves to the dark palette right now.
    ///
    /// `System` asks the desktop and falls back to dark when detection
    /// fails.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !system_prefers_light(),
        }
    }

    /// Resolves the preference to a renderer theme.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

fn system_prefers_light() -> bool {
    matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
}
