//! TUI widgets for termcalc
//!
//! Reusable UI components for the terminal interface.

pub mod display;
pub mod keypad;

pub use display::DisplayPanel;
pub use keypad::{key_at, keypad_cells, Keypad};
