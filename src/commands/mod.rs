//! Command handlers for the termcalc CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod keypad;
pub mod press;
pub mod theme;

use termcalc::theme::{resolve_mode, ThemeMode};
use termcalc::Config;

/// Where the starting theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    Flag,
    Saved,
    System,
    Default,
}

impl ThemeSource {
    pub fn label(self) -> &'static str {
        match self {
            ThemeSource::Flag => "flag",
            ThemeSource::Saved => "saved",
            ThemeSource::System => "system",
            ThemeSource::Default => "default",
        }
    }
}

/// Resolve the starting theme and report which source won.
pub fn starting_theme(
    overridden: Option<ThemeMode>,
    config: &Config,
    system: Option<ThemeMode>,
) -> (ThemeMode, ThemeSource) {
    let saved = config.theme_mode();
    let source = if overridden.is_some() {
        ThemeSource::Flag
    } else if saved.is_some() {
        ThemeSource::Saved
    } else if system.is_some() {
        ThemeSource::System
    } else {
        ThemeSource::Default
    };
    (resolve_mode(overridden, saved, system), source)
}
