//! TUI (Text User Interface) module for termcalc
//!
//! Terminal-based keypad built on ratatui/crossterm. The screen logic in
//! [`screen`] is independent of the terminal; [`CalculatorApp`] wires it to
//! one.

pub mod app;
pub mod calculator_app;
pub mod event;
pub mod keymap;
pub mod screen;
pub mod ui;
pub mod widgets;

pub use calculator_app::CalculatorApp;
pub use screen::CalculatorScreen;
