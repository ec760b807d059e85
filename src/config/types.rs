//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::calculator::DEFAULT_GROUPING_SEPARATOR;
use crate::theme::ThemeMode;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Theme preference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Saved light/dark choice; absent means follow the system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ThemeMode>,
}

/// Display formatting options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Character inserted between thousands groups
    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: char,
    /// Show the pending expression ("12 ×") above the display
    #[serde(default = "default_show_hint")]
    pub show_hint: bool,
}

pub fn default_grouping_separator() -> char {
    DEFAULT_GROUPING_SEPARATOR
}

pub fn default_show_hint() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            grouping_separator: default_grouping_separator(),
            show_hint: default_show_hint(),
        }
    }
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("grouping_separator '{0}' conflicts with number characters")]
    InvalidGroupingSeparator(char),
}

impl DisplayConfig {
    /// Reject separators that would make the display ambiguous.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sep = self.grouping_separator;
        if sep.is_ascii_digit() || matches!(sep, '.' | '-' | '+') || sep.is_control() {
            return Err(ConfigError::InvalidGroupingSeparator(sep));
        }
        Ok(())
    }
}
