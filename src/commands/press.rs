//! Headless key-sequence runner

use anyhow::{Context, Result};
use serde::Serialize;

use termcalc::calculator::{parse_keys, Calculator};
use termcalc::Config;

/// Everything `press --json` reports.
#[derive(Debug, Serialize)]
pub struct PressReport<'a> {
    #[serde(flatten)]
    pub state: &'a Calculator,
    pub formatted: String,
    pub hint: Option<String>,
}

/// How to print the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Raw,
    Formatted,
    Json,
}

impl OutputFormat {
    pub fn from_flags(formatted: bool, json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else if formatted {
            OutputFormat::Formatted
        } else {
            OutputFormat::Raw
        }
    }
}

/// Run `keys` through a fresh calculator and render the outcome.
pub fn run(keys: &str, format: OutputFormat, separator: char) -> Result<String> {
    let keys = parse_keys(keys).context("Invalid key sequence")?;

    let mut calculator = Calculator::new();
    for key in keys {
        calculator.press(key);
    }

    let output = match format {
        OutputFormat::Raw => calculator.display().to_string(),
        OutputFormat::Formatted => calculator.formatted_display(separator),
        OutputFormat::Json => {
            let report = PressReport {
                state: &calculator,
                formatted: calculator.formatted_display(separator),
                hint: calculator.pending_hint(),
            };
            serde_json::to_string_pretty(&report).context("Failed to serialize state")?
        }
    };
    Ok(output)
}

/// Handle the press command.
#[cfg(not(tarpaulin_include))]
pub fn handle(keys: &str, formatted: bool, json: bool) -> Result<()> {
    let config = Config::load()?;
    let output = run(
        keys,
        OutputFormat::from_flags(formatted, json),
        config.display.grouping_separator,
    )?;
    println!("{}", output);
    Ok(())
}
