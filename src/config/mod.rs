//! Configuration management for termcalc

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::theme::ThemeMode;

impl Config {
    /// Get the config file path (~/.config/termcalc/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load_from(&io::config_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save_to(self, &io::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Saved theme preference, if any
    pub fn theme_mode(&self) -> Option<ThemeMode> {
        self.theme.mode
    }

    /// Remember a theme preference
    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.theme.mode = Some(mode);
    }
}
