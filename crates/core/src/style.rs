//! Style configuration
//!
//! Named-field palettes for the application stylesheet and for individual
//! chrome controls. The active `StyleConfig` is converted into the single
//! iced `Theme` the whole application renders with.

use iced::theme::Palette;
use iced::{Color, Theme};

/// Colour theme of the window chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "Light"),
            ThemeMode::Dark => write!(f, "Dark"),
        }
    }
}

/// Application-wide stylesheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleConfig {
    pub mode: ThemeMode,
    pub background_color: Color,
    pub foreground_color: Color,
    pub accent_color: Color,
    pub success_color: Color,
    pub danger_color: Color,
}

impl StyleConfig {
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background_color: Color::from_rgb8(0xF3, 0xF3, 0xF3),
            foreground_color: Color::from_rgb8(0x1B, 0x1B, 0x1B),
            accent_color: Color::from_rgb8(0x00, 0x67, 0xC0),
            success_color: Color::from_rgb8(0x0F, 0x7B, 0x0F),
            danger_color: Color::from_rgb8(0xC4, 0x2B, 0x1C),
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background_color: Color::from_rgb8(0x20, 0x20, 0x20),
            foreground_color: Color::from_rgb8(0xE4, 0xE4, 0xE4),
            accent_color: Color::from_rgb8(0x4C, 0xC2, 0xFF),
            success_color: Color::from_rgb8(0x6C, 0xCB, 0x5F),
            danger_color: Color::from_rgb8(0xFF, 0x99, 0xA4),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Build the iced theme rendering this stylesheet
    pub fn to_theme(&self) -> Theme {
        Theme::custom(
            format!("Modern {}", self.mode),
            Palette {
                background: self.background_color,
                text: self.foreground_color,
                primary: self.accent_color,
                success: self.success_color,
                danger: self.danger_color,
            },
        )
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::light()
    }
}

/// Colours of a single chrome button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub background_color: Color,
    pub foreground_color: Color,
}

impl ButtonStyle {
    /// "Download available" version badge
    pub fn download() -> Self {
        Self {
            background_color: Color::from_rgb8(0xFF, 0x92, 0x24),
            foreground_color: Color::from_rgb8(0x00, 0x00, 0x00),
        }
    }
}
