//! Interactive keypad handler

use anyhow::Result;
use tracing::{debug, info};

use termcalc::theme::ThemeMode;
use termcalc::tui::{CalculatorApp, CalculatorScreen};
use termcalc::Config;

use super::starting_theme;

/// Open the interactive keypad.
///
/// `theme` overrides the saved and system preference for this session only;
/// toggling with `t` still saves.
#[cfg(not(tarpaulin_include))]
pub fn handle(theme: Option<ThemeMode>) -> Result<()> {
    let config = Config::load()?;
    let (mode, source) = starting_theme(theme, &config, ThemeMode::detect_system());
    info!(%mode, source = source.label(), "starting keypad");

    let config_path = Config::config_path().ok();
    let screen = CalculatorScreen::new(config, mode, config_path);
    let screen = CalculatorApp::new(screen)?.run()?;

    debug!(
        display = screen.calculator().display(),
        "keypad closed"
    );
    Ok(())
}
