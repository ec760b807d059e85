//! Keyboard bindings for the calculator screen

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::event::is_quit_key;
use crate::calculator::Key;

/// What a key press asks the screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Press a keypad key
    Press(Key),
    /// Switch between light and dark
    ToggleTheme,
    Quit,
}

/// Translate a terminal key event into an action.
///
/// Returns `None` for unbound keys and non-press events.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if is_quit_key(&key) {
        return Some(Action::Quit);
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    let action = match key.code {
        KeyCode::Char('t') | KeyCode::Char('T') => Action::ToggleTheme,
        KeyCode::Char(ch) => Action::Press(Key::from_char(ch)?),
        KeyCode::Enter => Action::Press(Key::Equals),
        KeyCode::Backspace => Action::Press(Key::Backspace),
        KeyCode::Delete => Action::Press(Key::Clear),
        _ => return None,
    };
    Some(action)
}

/// One-line help for the footer.
pub const FOOTER_HINT: &str = "t: toggle dark/light, q: quit";
