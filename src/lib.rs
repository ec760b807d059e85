//! termcalc library
//!
//! A four-function keypad calculator: the arithmetic state machine, its
//! display formatting, theme and config handling, and the terminal keypad.

pub mod calculator;
pub mod config;
pub mod theme;
pub mod tui;

pub use calculator::Calculator;
pub use config::Config;
