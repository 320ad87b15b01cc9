//! Keymap
//!
//! Vim-style key bindings mapped to actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::Field;

/// Actions that can be triggered by key presses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Tree navigation
    MoveUp,
    MoveDown,
    MoveToTop,
    MoveToBottom,
    Select,

    // Toolbox
    Fetch,
    Save,
    Delete,
    Clear,

    // Account fields
    Edit(Field),
    Copy(Field),
    Paste(Field),
    TogglePasswordVisibility,

    // Mode changes
    EnterCommand,
    ExecuteCommand(String),
    Cancel,

    // Application
    Quit,
    Invalid(String),

    // Text input
    InsertChar(char),
    DeleteChar,
    DeleteCharForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearLine,
    Submit,

    // No action
    None,
}

fn field_key(c: char) -> Option<Field> {
    match c {
        's' => Some(Field::Service),
        'u' => Some(Field::Username),
        'p' => Some(Field::Password),
        _ => None,
    }
}

/// Resolve the second key of a field chord (`ys`, `pu`, `ip`, ...).
fn field_chord(prefix: char, c: char) -> Action {
    let Some(field) = field_key(c) else { return Action::None };
    match prefix {
        'y' => Action::Copy(field),
        'p' => Action::Paste(field),
        'i' => Action::Edit(field),
        _ => Action::None,
    }
}

/// Map key event to action in normal mode
pub fn normal_mode_action(key: KeyEvent, pending: Option<char>) -> (Action, Option<char>) {
    match (key.code, key.modifiers, pending) {
        // Chords waiting for a field key
        (KeyCode::Char(c), _, Some(prefix @ ('y' | 'p' | 'i'))) => (field_chord(prefix, c), None),

        // Control shortcuts
        (KeyCode::Char('s'), KeyModifiers::CONTROL, _) => (Action::Save, None),
        (KeyCode::Char('l'), KeyModifiers::CONTROL, _) => (Action::Clear, None),

        // Navigation
        (KeyCode::Char('j') | KeyCode::Down, _, _) => (Action::MoveDown, None),
        (KeyCode::Char('k') | KeyCode::Up, _, _) => (Action::MoveUp, None),
        (KeyCode::Char('g'), _, None) => (Action::None, Some('g')),
        (KeyCode::Char('g'), _, Some('g')) => (Action::MoveToTop, None),
        (KeyCode::Char('G'), _, _) => (Action::MoveToBottom, None),
        (KeyCode::Enter | KeyCode::Char('l') | KeyCode::Char(' ') | KeyCode::Right, _, _) => {
            (Action::Select, None)
        }

        // Toolbox
        (KeyCode::Char('f'), _, _) => (Action::Fetch, None),
        (KeyCode::Char('w'), _, _) => (Action::Save, None),
        (KeyCode::Char('d'), _, None) => (Action::None, Some('d')),
        (KeyCode::Char('d'), _, Some('d')) => (Action::Delete, None),
        (KeyCode::Char('x'), _, _) => (Action::Delete, None),
        (KeyCode::Char('c'), _, _) => (Action::Clear, None),

        // Account fields
        (KeyCode::Char(c @ ('y' | 'p' | 'i')), _, None) => (Action::None, Some(c)),
        (KeyCode::Char('r'), _, _) => (Action::TogglePasswordVisibility, None),

        // Mode changes
        (KeyCode::Char(':'), _, _) => (Action::EnterCommand, None),
        (KeyCode::Esc, _, _) => (Action::Cancel, None),

        // Application
        (KeyCode::Char('q'), _, _) => (Action::Quit, None),

        _ => (Action::None, None),
    }
}

/// Map key event to action in text input modes
pub fn text_input_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::Cancel,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Backspace, _) => Action::DeleteChar,
        (KeyCode::Delete, _) => Action::DeleteCharForward,
        (KeyCode::Left, _) => Action::CursorLeft,
        (KeyCode::Right, _) => Action::CursorRight,
        (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => Action::CursorHome,
        (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => Action::CursorEnd,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearLine,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InsertChar(c),
        _ => Action::None,
    }
}

/// Parse command string into action
pub fn parse_command(cmd: &str) -> Action {
    match cmd.trim() {
        "" => Action::None,
        "fetch" | "get" => Action::Fetch,
        "save" | "set" | "w" => Action::Save,
        "delete" | "del" => Action::Delete,
        "cls" | "clear" => Action::Clear,
        "q" | "quit" | "wq" => Action::Quit,
        other => Action::Invalid(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_normal_navigation() {
        assert_eq!(normal_mode_action(key(KeyCode::Char('j')), None).0, Action::MoveDown);
        assert_eq!(normal_mode_action(key(KeyCode::Char('k')), None).0, Action::MoveUp);
        assert_eq!(normal_mode_action(key(KeyCode::Char('G')), None).0, Action::MoveToBottom);
        assert_eq!(normal_mode_action(key(KeyCode::Enter), None).0, Action::Select);
    }

    #[test]
    fn test_gg_sequence() {
        let (action1, pending1) = normal_mode_action(key(KeyCode::Char('g')), None);
        assert_eq!(action1, Action::None);
        assert_eq!(pending1, Some('g'));

        let (action2, pending2) = normal_mode_action(key(KeyCode::Char('g')), pending1);
        assert_eq!(action2, Action::MoveToTop);
        assert_eq!(pending2, None);
    }

    #[test]
    fn test_dd_sequence() {
        let (_, pending) = normal_mode_action(key(KeyCode::Char('d')), None);
        assert_eq!(pending, Some('d'));

        let (action, pending) = normal_mode_action(key(KeyCode::Char('d')), pending);
        assert_eq!(action, Action::Delete);
        assert_eq!(pending, None);
    }

    #[test]
    fn test_field_chords() {
        let (_, pending) = normal_mode_action(key(KeyCode::Char('y')), None);
        let (action, _) = normal_mode_action(key(KeyCode::Char('p')), pending);
        assert_eq!(action, Action::Copy(Field::Password));

        let (_, pending) = normal_mode_action(key(KeyCode::Char('p')), None);
        let (action, _) = normal_mode_action(key(KeyCode::Char('u')), pending);
        assert_eq!(action, Action::Paste(Field::Username));

        let (_, pending) = normal_mode_action(key(KeyCode::Char('i')), None);
        let (action, _) = normal_mode_action(key(KeyCode::Char('s')), pending);
        assert_eq!(action, Action::Edit(Field::Service));
    }

    #[test]
    fn test_unknown_chord_is_dropped() {
        let (_, pending) = normal_mode_action(key(KeyCode::Char('y')), None);
        let (action, pending) = normal_mode_action(key(KeyCode::Char('z')), pending);
        assert_eq!(action, Action::None);
        assert_eq!(pending, None);
    }

    #[test]
    fn test_toolbox_keys() {
        assert_eq!(normal_mode_action(key(KeyCode::Char('f')), None).0, Action::Fetch);
        assert_eq!(normal_mode_action(key(KeyCode::Char('w')), None).0, Action::Save);
        assert_eq!(normal_mode_action(key_ctrl(KeyCode::Char('s')), None).0, Action::Save);
        assert_eq!(normal_mode_action(key(KeyCode::Char('x')), None).0, Action::Delete);
        assert_eq!(normal_mode_action(key(KeyCode::Char('c')), None).0, Action::Clear);
    }

    #[test]
    fn test_text_input() {
        assert_eq!(text_input_action(key(KeyCode::Char('a'))), Action::InsertChar('a'));
        assert_eq!(text_input_action(key(KeyCode::Backspace)), Action::DeleteChar);
        assert_eq!(text_input_action(key(KeyCode::Enter)), Action::Submit);
        assert_eq!(text_input_action(key(KeyCode::Esc)), Action::Cancel);
        assert_eq!(text_input_action(key_ctrl(KeyCode::Char('u'))), Action::ClearLine);
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("fetch"), Action::Fetch);
        assert_eq!(parse_command(" save "), Action::Save);
        assert_eq!(parse_command("del"), Action::Delete);
        assert_eq!(parse_command("clear"), Action::Clear);
        assert_eq!(parse_command("q"), Action::Quit);
        assert_eq!(parse_command("bogus"), Action::Invalid("bogus".to_string()));
    }
}
