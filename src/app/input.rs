use crossterm::event::{KeyEvent, KeyEventKind};

use crate::input::keymap::{normal_mode_action, text_input_action, Action};
use crate::input::InputMode;
use crate::vault::VaultResult;

use super::App;

impl App {
    /// Handle one key press. Returns `true` when the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> VaultResult<bool> {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        let action = self.resolve_action(key);
        self.execute_action(action)
    }

    fn resolve_action(&mut self, key: KeyEvent) -> Action {
        match self.mode_state.mode {
            InputMode::Normal => self.resolve_normal_action(key),
            InputMode::Insert(_) | InputMode::Command => self.resolve_text_action(key),
        }
    }

    fn resolve_normal_action(&mut self, key: KeyEvent) -> Action {
        let (action, pending) = normal_mode_action(key, self.mode_state.pending);
        self.mode_state.pending = pending;
        action
    }

    fn resolve_text_action(&mut self, key: KeyEvent) -> Action {
        let action = text_input_action(key);
        self.handle_text_input(action)
    }

    fn handle_text_input(&mut self, action: Action) -> Action {
        match action {
            Action::InsertChar(c) => { self.mode_state.insert_char(c); Action::None }
            Action::DeleteChar => { self.mode_state.delete_char(); Action::None }
            Action::DeleteCharForward => { self.mode_state.delete_char_forward(); Action::None }
            Action::CursorLeft => { self.mode_state.cursor_left(); Action::None }
            Action::CursorRight => { self.mode_state.cursor_right(); Action::None }
            Action::CursorHome => { self.mode_state.cursor_home(); Action::None }
            Action::CursorEnd => { self.mode_state.cursor_end(); Action::None }
            Action::ClearLine => { self.mode_state.clear_buffer(); Action::None }
            Action::Submit => self.submit_text_input(),
            Action::Cancel => { self.mode_state.to_normal(); Action::None }
            _ => Action::None,
        }
    }

    fn submit_text_input(&mut self) -> Action {
        let result = match self.mode_state.mode {
            InputMode::Insert(field) => {
                self.account.commit(field, self.mode_state.get_buffer());
                Action::None
            }
            InputMode::Command => Action::ExecuteCommand(self.mode_state.get_buffer().to_string()),
            InputMode::Normal => Action::None,
        };
        self.mode_state.to_normal();
        result
    }
}
