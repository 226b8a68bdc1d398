//! Centrally defined key bindings for the TUI.

use crossterm::event::KeyCode;

/// Actions the key handler can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleTheme,
    MoveUp,
    MoveDown,
    Select,
    Back,
    NextField,
    Char(char),
    DeleteChar,
}

pub const KEY_QUIT: KeyCode = KeyCode::Char('q');
pub const KEY_TOGGLE_THEME: KeyCode = KeyCode::Char('t');
pub const KEY_UP: KeyCode = KeyCode::Up;
pub const KEY_DOWN: KeyCode = KeyCode::Down;
pub const KEY_SELECT: KeyCode = KeyCode::Enter;
pub const KEY_BACK: KeyCode = KeyCode::Esc;
pub const KEY_NEXT_FIELD: KeyCode = KeyCode::Tab;
pub const KEY_DELETE_CHAR: KeyCode = KeyCode::Backspace;

/// Map a key code to an action for list-style screens (browse, detail).
pub fn list_action(code: KeyCode) -> Option<Action> {
    match code {
        KEY_QUIT => Some(Action::Quit),
        KEY_TOGGLE_THEME => Some(Action::ToggleTheme),
        KEY_UP => Some(Action::MoveUp),
        KEY_DOWN => Some(Action::MoveDown),
        KEY_SELECT => Some(Action::Select),
        KEY_BACK => Some(Action::Back),
        _ => None,
    }
}

/// Map a key code to an action for text-entry screens (login).
///
/// Printable characters feed the focused field, so the global bindings are
/// limited to keys that cannot appear in credentials.
pub fn form_action(code: KeyCode) -> Option<Action> {
    match code {
        KEY_BACK => Some(Action::Back),
        KEY_SELECT => Some(Action::Select),
        KEY_NEXT_FIELD | KEY_UP | KEY_DOWN => Some(Action::NextField),
        KEY_DELETE_CHAR => Some(Action::DeleteChar),
        KeyCode::Char(c) => Some(Action::Char(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_screens_bind_theme_toggle() {
        assert_eq!(list_action(KEY_TOGGLE_THEME), Some(Action::ToggleTheme));
    }

    #[test]
    fn form_screens_feed_characters_to_the_field() {
        assert_eq!(form_action(KeyCode::Char('t')), Some(Action::Char('t')));
        assert_eq!(form_action(KeyCode::Char('q')), Some(Action::Char('q')));
    }
}
