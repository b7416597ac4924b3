//! Key bindings for the form
//!
//! Keys map to a [`FormAction`] given the focused control. Printable keys
//! edit the credential field while it has focus, and act as shortcuts
//! everywhere else.

use super::state::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User action derived from key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Quit,
    ToggleHelp,
    FocusNext,
    FocusPrev,
    /// Enter on the focused control
    Activate,
    CategoryUp,
    CategoryDown,
    ScrollUp,
    ScrollDown,
    InsertChar(char),
    DeleteChar,
    ClearInput,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,
    None,
}

pub fn map_key(key: KeyEvent, focus: Focus, help_open: bool) -> FormAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => FormAction::Quit,
            KeyCode::Char('u') if focus == Focus::Credential => FormAction::ClearInput,
            _ => FormAction::None,
        };
    }

    if help_open {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('?') => FormAction::ToggleHelp,
            _ => FormAction::None,
        };
    }

    match key.code {
        KeyCode::Esc => FormAction::Quit,
        KeyCode::Tab => FormAction::FocusNext,
        KeyCode::BackTab => FormAction::FocusPrev,
        KeyCode::Enter => FormAction::Activate,
        KeyCode::PageUp => FormAction::ScrollUp,
        KeyCode::PageDown => FormAction::ScrollDown,
        _ if focus == Focus::Credential => map_field_key(key.code),
        KeyCode::Up | KeyCode::Char('k') if focus == Focus::Category => FormAction::CategoryUp,
        KeyCode::Down | KeyCode::Char('j') if focus == Focus::Category => {
            FormAction::CategoryDown
        }
        KeyCode::Up | KeyCode::Char('k') => FormAction::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => FormAction::ScrollDown,
        KeyCode::Char('?') => FormAction::ToggleHelp,
        KeyCode::Char('q') => FormAction::Quit,
        _ => FormAction::None,
    }
}

fn map_field_key(code: KeyCode) -> FormAction {
    match code {
        KeyCode::Char(c) => FormAction::InsertChar(c),
        KeyCode::Backspace => FormAction::DeleteChar,
        KeyCode::Left => FormAction::CursorLeft,
        KeyCode::Right => FormAction::CursorRight,
        KeyCode::Home => FormAction::CursorStart,
        KeyCode::End => FormAction::CursorEnd,
        _ => FormAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, Focus::Credential, false), FormAction::Quit);
        assert_eq!(map_key(ctrl_c, Focus::Search, true), FormAction::Quit);
    }

    #[test]
    fn test_credential_field_captures_printable_keys() {
        assert_eq!(
            map_key(key(KeyCode::Char('q')), Focus::Credential, false),
            FormAction::InsertChar('q')
        );
        assert_eq!(
            map_key(key(KeyCode::Char('?')), Focus::Credential, false),
            FormAction::InsertChar('?')
        );
        assert_eq!(
            map_key(key(KeyCode::Backspace), Focus::Credential, false),
            FormAction::DeleteChar
        );
        assert_eq!(map_key(key(KeyCode::Tab), Focus::Credential, false), FormAction::FocusNext);
    }

    #[test]
    fn test_shortcuts_outside_the_field() {
        assert_eq!(map_key(key(KeyCode::Char('q')), Focus::Search, false), FormAction::Quit);
        assert_eq!(
            map_key(key(KeyCode::Char('?')), Focus::Confirm, false),
            FormAction::ToggleHelp
        );
        assert_eq!(map_key(key(KeyCode::Up), Focus::Category, false), FormAction::CategoryUp);
        assert_eq!(map_key(key(KeyCode::Char('j')), Focus::Search, false), FormAction::ScrollDown);
        assert_eq!(map_key(key(KeyCode::BackTab), Focus::Search, false), FormAction::FocusPrev);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        assert_eq!(map_key(key(KeyCode::Enter), Focus::Search, true), FormAction::None);
        assert_eq!(map_key(key(KeyCode::Esc), Focus::Search, true), FormAction::ToggleHelp);
        assert_eq!(map_key(key(KeyCode::Esc), Focus::Search, false), FormAction::Quit);
    }
}
