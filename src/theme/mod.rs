//! Theme configuration for the keypad
//!
//! Centralizes the light and dark palettes and the logic that decides which
//! one to start with.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod tui;

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Error for theme names other than `light` and `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme mode '{0}' (expected 'light' or 'dark')")]
pub struct ThemeModeParseError(pub String);

impl ThemeMode {
    /// The other mode.
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Guess the terminal's appearance from a `COLORFGBG` value.
    ///
    /// The variable looks like `"15;0"` or `"15;default;0"`; the last field
    /// is the background palette index. Indices 0-6 and 8 are dark colours.
    pub fn from_colorfgbg(value: &str) -> Option<Self> {
        let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        match background {
            0..=6 | 8 => Some(ThemeMode::Dark),
            7 | 9..=15 => Some(ThemeMode::Light),
            _ => None,
        }
    }

    /// System preference, read from the environment.
    pub fn detect_system() -> Option<Self> {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|value| Self::from_colorfgbg(&value))
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ThemeModeParseError(s.to_string())),
        }
    }
}

/// Pick the starting mode: explicit override, then saved preference, then
/// the system preference, then light.
pub fn resolve_mode(
    overridden: Option<ThemeMode>,
    saved: Option<ThemeMode>,
    system: Option<ThemeMode>,
) -> ThemeMode {
    overridden.or(saved).or(system).unwrap_or_default()
}

/// Colour palette for one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    /// Screen background
    pub background: Color,
    /// Display and keypad panels
    pub panel: Color,
    /// Primary text color (display digits, key labels)
    pub text_primary: Color,
    /// Secondary/dimmed text color (hint line, footer)
    pub text_secondary: Color,
    /// Accent color for operator keys
    pub accent: Color,
    /// Text drawn on accent-coloured keys
    pub on_accent: Color,
    /// Digit key fill
    pub key: Color,
    /// Error color (status messages)
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background: Color::Rgb(0xf8, 0xfa, 0xfc),
            panel: Color::Rgb(0xff, 0xff, 0xff),
            text_primary: Color::Rgb(0x00, 0x00, 0x00),
            text_secondary: Color::Rgb(0x66, 0x66, 0x66),
            accent: Color::Rgb(0x19, 0x76, 0xd2),
            on_accent: Color::Rgb(0xff, 0xff, 0xff),
            key: Color::Rgb(0xf0, 0xf0, 0xf0),
            error: Color::Rgb(0xd3, 0x2f, 0x2f),
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background: Color::Rgb(0x0a, 0x0a, 0x0a),
            panel: Color::Rgb(0x0f, 0x11, 0x15),
            text_primary: Color::Rgb(0xff, 0xff, 0xff),
            text_secondary: Color::Rgb(0xcc, 0xcc, 0xcc),
            accent: Color::Rgb(0x90, 0xca, 0xf9),
            on_accent: Color::Rgb(0x00, 0x00, 0x00),
            key: Color::Rgb(0x2a, 0x2a, 0x2a),
            error: Color::Rgb(0xf4, 0x43, 0x36),
        }
    }

    /// Palette for `mode`.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}
