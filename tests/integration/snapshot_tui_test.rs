//! Rendering tests for the calculator screen
//!
//! Draws `CalculatorScreen` against ratatui's `TestBackend` and inspects the
//! resulting buffer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    backend::TestBackend, buffer::Buffer, layout::Rect, style::Modifier, widgets::Widget,
    Terminal,
};
use tempfile::TempDir;

use termcalc::calculator::Key;
use termcalc::config::Config;
use termcalc::theme::{Theme, ThemeMode};
use termcalc::tui::ui::{calculator_layout, CARD_HEIGHT, CARD_WIDTH};
use termcalc::tui::widgets::{keypad_cells, DisplayPanel};
use termcalc::tui::CalculatorScreen;

const WIDTH: u16 = 60;
const HEIGHT: u16 = 30;

/// Draw the screen into a `width` x `height` terminal and return the buffer.
fn render_sized(screen: &mut CalculatorScreen, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| screen.draw(frame)).unwrap();
    terminal.backend().buffer().clone()
}

fn render(screen: &mut CalculatorScreen) -> Buffer {
    render_sized(screen, WIDTH, HEIGHT)
}

/// Draw the screen into a terminal exactly the size of the card.
fn render_card(screen: &mut CalculatorScreen) -> Buffer {
    render_sized(screen, CARD_WIDTH, CARD_HEIGHT)
}

/// Buffer contents, one line per row.
fn buffer_to_string(buf: &Buffer) -> String {
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn type_keys(screen: &mut CalculatorScreen, keys: &str) {
    for ch in keys.chars() {
        screen.handle_key(KeyEvent::from(KeyCode::Char(ch)));
    }
}

fn light_screen() -> CalculatorScreen {
    CalculatorScreen::new(Config::default(), ThemeMode::Light, None)
}

#[test]
fn initial_screen_shows_title_keys_and_tip() {
    let mut screen = light_screen();
    let output = buffer_to_string(&render(&mut screen));

    assert!(output.contains("Calculator"));
    assert!(output.contains("light"));
    assert!(output.contains("t: toggle dark/light, q: quit"));
    for key in Key::KEYPAD {
        assert!(output.contains(key.label()), "missing key {}", key.label());
    }
}

#[test]
fn display_is_grouped() {
    let mut screen = light_screen();
    type_keys(&mut screen, "1234567.5");
    let output = buffer_to_string(&render(&mut screen));
    assert!(output.contains("1,234,567.5"));
}

#[test]
fn pending_hint_is_drawn() {
    let mut screen = light_screen();
    type_keys(&mut screen, "12x");
    let output = buffer_to_string(&render(&mut screen));
    assert!(output.contains("12 ×"));
}

#[test]
fn pending_hint_can_be_hidden() {
    let mut config = Config::default();
    config.display.show_hint = false;
    let mut screen = CalculatorScreen::new(config, ThemeMode::Light, None);
    type_keys(&mut screen, "12x");
    let output = buffer_to_string(&render(&mut screen));
    assert!(!output.contains("12 ×"));
}

#[test]
fn background_uses_theme_colours() {
    let mut screen = light_screen();
    let buf = render(&mut screen);
    assert_eq!(buf[(0, 0)].bg, Theme::light().background);

    screen.handle_key(KeyEvent::from(KeyCode::Char('t')));
    let buf = render(&mut screen);
    assert_eq!(buf[(0, 0)].bg, Theme::dark().background);
    assert!(buffer_to_string(&buf).contains("dark"));
}

#[test]
fn clicking_a_key_presses_it() {
    let mut screen = light_screen();
    render(&mut screen);

    let layout = calculator_layout(Rect::new(0, 0, WIDTH, HEIGHT));
    let cells = keypad_cells(layout.keypad);
    let click = |screen: &mut CalculatorScreen, key: Key| {
        let index = Key::KEYPAD.iter().position(|k| *k == key).unwrap();
        let cell = cells[index];
        screen.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: cell.x + cell.width / 2,
            row: cell.y + cell.height / 2,
            modifiers: KeyModifiers::NONE,
        });
    };

    click(&mut screen, Key::Digit(7));
    click(&mut screen, Key::Digit(0));
    assert_eq!(screen.calculator().display(), "70");

    click(&mut screen, Key::Percent);
    assert_eq!(screen.calculator().display(), "0.7");
}

#[test]
fn clicks_outside_keys_and_other_buttons_are_ignored() {
    let mut screen = light_screen();
    render(&mut screen);

    screen.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    });
    let layout = calculator_layout(Rect::new(0, 0, WIDTH, HEIGHT));
    let cell = keypad_cells(layout.keypad)[4];
    screen.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column: cell.x,
        row: cell.y,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(screen.calculator().display(), "0");
}

#[test]
fn theme_toggle_is_saved() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("termcalc").join("config.toml");
    let mut screen =
        CalculatorScreen::new(Config::default(), ThemeMode::Light, Some(path.clone()));

    screen.handle_key(KeyEvent::from(KeyCode::Char('t')));
    assert_eq!(screen.mode(), ThemeMode::Dark);
    assert_eq!(
        Config::load_from(&path).unwrap().theme_mode(),
        Some(ThemeMode::Dark)
    );

    screen.handle_key(KeyEvent::from(KeyCode::Char('T')));
    assert_eq!(
        Config::load_from(&path).unwrap().theme_mode(),
        Some(ThemeMode::Light)
    );
}

#[test]
fn failed_save_is_reported_in_footer() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();
    let path = blocker.join("config.toml");
    let mut screen = CalculatorScreen::new(Config::default(), ThemeMode::Light, Some(path));

    screen.handle_key(KeyEvent::from(KeyCode::Char('t')));
    assert_eq!(screen.mode(), ThemeMode::Dark);
    let message = screen.status_message().unwrap();
    assert!(message.starts_with("Could not save theme"));

    let output = buffer_to_string(&render(&mut screen));
    assert!(!output.contains("t: toggle"));
}

#[test]
fn keyboard_shortcuts() {
    let mut screen = light_screen();
    type_keys(&mut screen, "9n");
    assert_eq!(screen.calculator().display(), "-9");

    screen.handle_key(KeyEvent::from(KeyCode::Backspace));
    assert_eq!(screen.calculator().display(), "-");

    screen.handle_key(KeyEvent::from(KeyCode::Delete));
    assert_eq!(screen.calculator().display(), "0");

    type_keys(&mut screen, "6*7");
    screen.handle_key(KeyEvent::from(KeyCode::Enter));
    assert_eq!(screen.calculator().display(), "42");

    screen.handle_key(KeyEvent::from(KeyCode::Esc));
    assert!(screen.should_quit());
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut screen = light_screen();
    let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
    terminal.draw(|frame| screen.draw(frame)).unwrap();
}

// ============================================================================
// Layout snapshots
// ============================================================================

#[test]
fn snapshot_initial_light_screen() {
    let mut screen = light_screen();
    let buf = render_card(&mut screen);
    insta::assert_snapshot!(buffer_to_string(&buf), @r"
Calculator                        ☾ light
                                         
╭───────────────────────────────────────╮
│                                       │
│                                      0│
╰───────────────────────────────────────╯
                                         
╭───────────────────────────────────────╮
│╭───────╮ ╭───────╮ ╭───────╮          │
││   C   │ │   ±   │ │   %   │     ÷    │
│╰───────╯ ╰───────╯ ╰───────╯          │
│                                       │
│    7         8         9         ×    │
│                                       │
│                                       │
│    4         5         6         -    │
│                                       │
│                                       │
│    1         2         3         +    │
│                                       │
│╭───────╮                              │
││   ⌫   │     0         .         =    │
│╰───────╯                              │
╰───────────────────────────────────────╯
      t: toggle dark/light, q: quit      
    ");
}

#[test]
fn snapshot_pending_operation() {
    let mut screen = light_screen();
    type_keys(&mut screen, "12x");
    let buf = render_card(&mut screen);
    insta::assert_snapshot!(buffer_to_string(&buf), @r"
Calculator                        ☾ light
                                         
╭───────────────────────────────────────╮
│12 ×                                   │
│                                     12│
╰───────────────────────────────────────╯
                                         
╭───────────────────────────────────────╮
│╭───────╮ ╭───────╮ ╭───────╮          │
││   C   │ │   ±   │ │   %   │     ÷    │
│╰───────╯ ╰───────╯ ╰───────╯          │
│                                       │
│    7         8         9         ×    │
│                                       │
│                                       │
│    4         5         6         -    │
│                                       │
│                                       │
│    1         2         3         +    │
│                                       │
│╭───────╮                              │
││   ⌫   │     0         .         =    │
│╰───────╯                              │
╰───────────────────────────────────────╯
      t: toggle dark/light, q: quit      
    ");
}

#[test]
fn display_value_is_bold_and_hint_is_not() {
    let mut screen = light_screen();
    type_keys(&mut screen, "12x");
    let buf = render_card(&mut screen);
    let theme = Theme::light();

    // value "12" ends at the panel's last inner column on the second row
    for x in [CARD_WIDTH - 3, CARD_WIDTH - 2] {
        let cell = &buf[(x, 4)];
        assert!(cell.modifier.contains(Modifier::BOLD), "column {x}");
        assert_eq!(cell.fg, theme.text_primary);
    }
    // hint "12 ×" on the row above, left-aligned
    for x in 1..5 {
        let cell = &buf[(x, 3)];
        assert!(!cell.modifier.contains(Modifier::BOLD), "column {x}");
        assert_eq!(cell.fg, theme.text_secondary);
    }
}

#[test]
fn snapshot_long_value_is_cut_from_the_left() {
    let theme = Theme::light();
    let area = Rect::new(0, 0, 12, 4);
    let mut buf = Buffer::empty(area);
    DisplayPanel::new(&theme, "1,234,567,890").render(area, &mut buf);

    insta::assert_snapshot!(buffer_to_string(&buf), @r"
╭──────────╮
│          │
│…4,567,890│
╰──────────╯
    ");
    for x in 1..11 {
        assert!(buf[(x, 2)].modifier.contains(Modifier::BOLD), "column {x}");
    }
}
