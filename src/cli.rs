//! CLI definitions for termcalc
//!
//! This module contains the clap CLI structure definitions, separated from
//! main.rs so the command handlers and completions can share them.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use termcalc::theme::ThemeMode;

/// Version string; dev builds carry the git SHA from build.rs.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ")"
);
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build clap styles matching the keypad's accent colour.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Blue.on_default() | Effects::BOLD)
        .usage(AnsiColor::Blue.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "termcalc")]
#[command(about = "A four-function keypad calculator for the terminal")]
#[command(
    long_about = "termcalc - a four-function keypad calculator for the terminal.

Run without a subcommand to open the interactive keypad. Type digits and
operators, or click the keys with the mouse.

KEYS:
    0-9 .          enter digits
    + - * x /      operators (x and * multiply, / divides)
    Enter =        equals
    c Del          clear
    Backspace b    delete the last digit
    n ~            toggle sign
    %              percent
    t              toggle dark/light (saved)
    q Esc          quit

HEADLESS:
    termcalc press '12+30='        Prints 42
    termcalc press '1/0='          Prints NaN"
)]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Start in this theme instead of the saved or system preference
    #[arg(long, value_name = "light|dark")]
    pub theme: Option<ThemeMode>,

    /// Write debug-level logs
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a key sequence without the keypad and print the display
    #[command(long_about = "Feed a key sequence through the calculator and print the display.

Keys use the keypad labels or their ASCII aliases; whitespace is ignored.

EXAMPLES:
    termcalc press '5+3='                Prints 8
    termcalc press '1234567' --formatted Prints 1,234,567
    termcalc press '12x' --json          Prints the full state as JSON")]
    Press {
        /// Keys to press, e.g. "12+30="
        keys: String,
        /// Print with grouping separators, as the keypad shows it
        #[arg(long, conflicts_with = "json")]
        formatted: bool,
        /// Print the full calculator state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change the saved theme preference
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Show the theme the keypad would start with, and why
    Show,
    /// Save a theme preference
    Set {
        /// light or dark
        mode: ThemeMode,
    },
    /// Flip the current theme and save it
    Toggle,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
}
