//! Account pane: field editing, clipboard copy/paste and clearing.

use tracing::{debug, warn};

use crate::state::{Field, SharedState};

pub struct AccountPanel {
    state: SharedState,
    pub password_visible: bool,
}

impl AccountPanel {
    pub fn new(state: SharedState) -> Self {
        Self {
            state,
            password_visible: false,
        }
    }

    pub fn toggle_password(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Write an edited value back into the shared field.
    pub fn commit(&self, field: Field, value: &str) {
        self.state.set_field(field, value);
    }

    pub fn copy_field(&self, field: Field) {
        let value = self.state.field(field);
        match self.state.set_clipboard(&value) {
            Ok(()) => self.state.notify_info(format!("{} copied to clipboard.", field.label()).as_str()),
            Err(e) => {
                warn!(error = %e, field = field.label(), "copy to clipboard failed");
                self.state.notify_error("Clipboard unavailable!");
            }
        }
    }

    /// Replace a field with the clipboard text. On failure the field stays empty.
    pub fn paste_field(&self, field: Field) {
        self.state.clear_field(field);
        match self.state.clipboard() {
            Ok(text) => {
                self.state.set_field(field, &text);
                self.state.notify_info(format!("{} pasted from clipboard.", field.label()).as_str());
            }
            Err(e) => {
                debug!(error = %e, field = field.label(), "paste from clipboard failed");
                self.state.notify_error("Clipboard empty!");
            }
        }
    }

    pub fn clear(&self) {
        self.state.clear_account();
        self.state.notify_info("Cleared all entries!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::clipboard::MemoryClipboard;

    fn panel() -> (SharedState, AccountPanel) {
        let state = SharedState::new(Box::new(MemoryClipboard::default()));
        let panel = AccountPanel::new(state.clone());
        (state, panel)
    }

    #[test]
    fn test_copy_then_paste() {
        let (state, panel) = panel();
        state.set_username("bob");

        panel.copy_field(Field::Username);
        assert_eq!(state.notification(), "[INFO]: Username copied to clipboard.");

        panel.paste_field(Field::Service);
        assert_eq!(state.service(), "bob");
        assert_eq!(state.notification(), "[INFO]: Service pasted from clipboard.");
    }

    #[test]
    fn test_paste_with_empty_clipboard_leaves_field_unset() {
        let (state, panel) = panel();
        state.set_password("typed");

        panel.paste_field(Field::Password);

        assert_eq!(state.password(), "");
        assert_eq!(state.notification(), "[ERROR]: Clipboard empty!");
    }

    #[test]
    fn test_clear_entries() {
        let (state, panel) = panel();
        state.set_service("svc");
        state.set_username("u1");
        state.set_password("p1");

        panel.clear();

        assert_eq!(state.service(), "");
        assert_eq!(state.username(), "");
        assert_eq!(state.password(), "");
        assert_eq!(state.notification(), "[INFO]: Cleared all entries!");
    }

    #[test]
    fn test_commit_and_toggle() {
        let (state, mut panel) = panel();
        panel.commit(Field::Service, "mail");
        assert_eq!(state.service(), "mail");

        assert!(!panel.password_visible);
        panel.toggle_password();
        assert!(panel.password_visible);
    }
}
