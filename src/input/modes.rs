//! Input Modes
//!
//! Modal editing state machine for vim-style interface.

use zeroize::Zeroize;

use crate::state::Field;

/// Input mode enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Tree navigation and toolbox keys
    Normal,
    /// Editing one account field
    Insert(Field),
    /// Command line mode (:)
    Command,
}

impl InputMode {
    /// Get mode indicator for status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert(_) => "INSERT",
            Self::Command => "COMMAND",
        }
    }

    pub fn editing(&self) -> Option<Field> {
        match self {
            Self::Insert(field) => Some(*field),
            _ => None,
        }
    }
}

/// Mode state with associated data
#[derive(Debug, Clone)]
pub struct ModeState {
    /// Current mode
    pub mode: InputMode,
    /// Text buffer for input modes
    buffer: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Pending key sequence (for chords like gg, dd, yp)
    pub pending: Option<char>,
}

impl Default for ModeState {
    fn default() -> Self {
        Self {
            mode: InputMode::Normal,
            buffer: String::new(),
            cursor: 0,
            pending: None,
        }
    }
}

impl ModeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to a new mode. The previous buffer is wiped, it may hold a password.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.buffer.zeroize();
        self.cursor = 0;
        self.pending = None;
    }

    pub fn to_normal(&mut self) {
        self.set_mode(InputMode::Normal);
    }

    /// Start editing a field, seeded with its current value
    pub fn to_insert(&mut self, field: Field, value: &str) {
        self.set_mode(InputMode::Insert(field));
        self.set_buffer(value);
    }

    pub fn to_command(&mut self) {
        self.set_mode(InputMode::Command);
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_offset(&self, cursor: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(cursor)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    /// Insert character at cursor
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.buffer.remove(at);
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_offset(self.cursor);
            self.buffer.remove(at);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear_buffer(&mut self) {
        self.buffer.zeroize();
        self.cursor = 0;
    }

    pub fn get_buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, content: &str) {
        self.buffer.zeroize();
        self.buffer.push_str(content);
        self.cursor = self.char_count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_transitions() {
        let mut state = ModeState::new();
        assert_eq!(state.mode, InputMode::Normal);

        state.to_insert(Field::Username, "bob");
        assert_eq!(state.mode, InputMode::Insert(Field::Username));
        assert_eq!(state.get_buffer(), "bob");
        assert_eq!(state.cursor, 3);

        state.to_command();
        assert_eq!(state.mode, InputMode::Command);
        assert_eq!(state.get_buffer(), "");

        state.to_normal();
        assert_eq!(state.mode, InputMode::Normal);
    }

    #[test]
    fn test_text_editing() {
        let mut state = ModeState::new();
        state.to_command();
        for c in "fetch".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.get_buffer(), "fetch");

        state.delete_char();
        assert_eq!(state.get_buffer(), "fetc");

        state.cursor_home();
        state.delete_char_forward();
        assert_eq!(state.get_buffer(), "etc");
    }

    #[test]
    fn test_multibyte_cursor() {
        let mut state = ModeState::new();
        state.to_insert(Field::Password, "pä");

        state.cursor_left();
        state.insert_char('ß');
        assert_eq!(state.get_buffer(), "pßä");

        state.cursor_end();
        state.delete_char();
        assert_eq!(state.get_buffer(), "pß");
    }

    #[test]
    fn test_cursor_movement() {
        let mut state = ModeState::new();
        state.set_buffer("hello");

        state.cursor_home();
        assert_eq!(state.cursor, 0);
        state.cursor_left();
        assert_eq!(state.cursor, 0);

        state.cursor_end();
        assert_eq!(state.cursor, 5);
        state.cursor_right();
        assert_eq!(state.cursor, 5);
    }

    #[test]
    fn test_editing_field() {
        assert_eq!(InputMode::Insert(Field::Password).editing(), Some(Field::Password));
        assert_eq!(InputMode::Command.editing(), None);
    }
}
