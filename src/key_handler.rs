use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    Quit,
    Back,
    Help,
    ToggleTheme,
    NextField,
    PrevField,
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    ScrollPageUp,
    ScrollPageDown,
    Select,
    InputChar(char),
    Backspace,
    /// No input arrived within the tick interval.
    Tick,
    None,
}

#[derive(Debug, Default)]
pub struct KeyHandler;

impl KeyHandler {
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for a terminal event.
    pub fn next_action(&mut self, timeout: Duration) -> color_eyre::Result<KeyAction> {
        if !event::poll(timeout)? {
            return Ok(KeyAction::Tick);
        }
        match event::read()? {
            // it's important to check KeyEventKind::Press to avoid handling key release events
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.on_key_event(key)),
            Event::Resize(_, _) => Ok(KeyAction::None),
            _ => Ok(KeyAction::None),
        }
    }

    pub fn on_key_event(&mut self, key: KeyEvent) -> KeyAction {
        let typing = !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c' | 'C' | 'q' | 'Q')) => KeyAction::Quit,
            (KeyModifiers::CONTROL, KeyCode::Char('t' | 'T')) | (_, KeyCode::F(2)) => {
                KeyAction::ToggleTheme
            }
            (_, KeyCode::F(1)) => KeyAction::Help,
            (_, KeyCode::Esc) => KeyAction::Back,
            (_, KeyCode::BackTab) => KeyAction::PrevField,
            (KeyModifiers::NONE, KeyCode::Tab) => KeyAction::NextField,
            (_, KeyCode::Up) => KeyAction::NavigateUp,
            (_, KeyCode::Down) => KeyAction::NavigateDown,
            (_, KeyCode::Left) => KeyAction::NavigateLeft,
            (_, KeyCode::Right) => KeyAction::NavigateRight,
            (_, KeyCode::PageUp) => KeyAction::ScrollPageUp,
            (_, KeyCode::PageDown) => KeyAction::ScrollPageDown,
            (_, KeyCode::Enter) => KeyAction::Select,
            (_, KeyCode::Backspace) => KeyAction::Backspace,
            (_, KeyCode::Char(c)) if typing => KeyAction::InputChar(c),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
        KeyHandler::new().on_key_event(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_bindings() {
        assert_eq!(press(KeyCode::Char('c'), KeyModifiers::CONTROL), KeyAction::Quit);
        assert_eq!(press(KeyCode::Char('q'), KeyModifiers::CONTROL), KeyAction::Quit);
    }

    #[test]
    fn test_plain_q_is_text() {
        assert_eq!(press(KeyCode::Char('q'), KeyModifiers::NONE), KeyAction::InputChar('q'));
    }

    #[test]
    fn test_shifted_chars_are_text() {
        assert_eq!(press(KeyCode::Char('?'), KeyModifiers::SHIFT), KeyAction::InputChar('?'));
        assert_eq!(press(KeyCode::Char('('), KeyModifiers::SHIFT), KeyAction::InputChar('('));
    }

    #[test]
    fn test_theme_toggle_bindings() {
        assert_eq!(press(KeyCode::F(2), KeyModifiers::NONE), KeyAction::ToggleTheme);
        assert_eq!(press(KeyCode::Char('t'), KeyModifiers::CONTROL), KeyAction::ToggleTheme);
    }

    #[test]
    fn test_field_navigation() {
        assert_eq!(press(KeyCode::Tab, KeyModifiers::NONE), KeyAction::NextField);
        assert_eq!(press(KeyCode::BackTab, KeyModifiers::SHIFT), KeyAction::PrevField);
    }

    #[test]
    fn test_unbound_control_chord() {
        assert_eq!(press(KeyCode::Char('x'), KeyModifiers::CONTROL), KeyAction::None);
    }
}
