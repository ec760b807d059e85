//! termcalc - CLI entry point

mod cli;
mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use cli::{Cli, Commands, ConfigCommands, ThemeCommands, VERSION};

/// Directory the log file is written to.
fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("termcalc")
}

/// Route tracing output to a log file.
///
/// The keypad owns the terminal, so nothing is written to stderr. Returns
/// `None` when the log file cannot be opened; the app still runs.
fn setup_logging(debug_flag: bool) -> Option<WorkerGuard> {
    let level = if debug_flag { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("termcalc")
        .filename_suffix("log")
        .build(log_dir())
        .ok()?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init()
        .ok()?;

    Some(guard)
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard = setup_logging(cli.debug);
    info!(version = VERSION, "termcalc starting");

    match cli.command {
        None => commands::keypad::handle(cli.theme),
        Some(Commands::Press {
            keys,
            formatted,
            json,
        }) => commands::press::handle(&keys, formatted, json),
        Some(Commands::Theme(cmd)) => match cmd {
            ThemeCommands::Show => commands::theme::handle_show(),
            ThemeCommands::Set { mode } => commands::theme::handle_set(mode),
            ThemeCommands::Toggle => commands::theme::handle_toggle(),
        },
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Some(Commands::Completions { shell }) => commands::completions::handle::<Cli>(shell),
    }
}
