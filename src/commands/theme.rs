//! Theme subcommands handler

use anyhow::Result;
use tracing::info;

use termcalc::theme::ThemeMode;
use termcalc::Config;

use super::starting_theme;

/// Print the theme the keypad would start with and where it comes from.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let (mode, source) = starting_theme(None, &config, ThemeMode::detect_system());
    println!("{} ({})", mode, source.label());
    Ok(())
}

/// Save `mode` as the preferred theme.
#[cfg(not(tarpaulin_include))]
pub fn handle_set(mode: ThemeMode) -> Result<()> {
    let mut config = Config::load()?;
    config.set_theme_mode(mode);
    config.save()?;
    info!(%mode, "theme preference saved");
    println!("Theme set to {}", mode);
    Ok(())
}

/// Flip the current starting theme and save the result.
#[cfg(not(tarpaulin_include))]
pub fn handle_toggle() -> Result<()> {
    let mut config = Config::load()?;
    let (current, _) = starting_theme(None, &config, ThemeMode::detect_system());
    let next = current.toggle();
    config.set_theme_mode(next);
    config.save()?;
    info!(from = %current, to = %next, "theme preference toggled");
    println!("Theme set to {}", next);
    Ok(())
}
