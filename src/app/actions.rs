use tracing::info;

use crate::input::keymap::{parse_command, Action};
use crate::vault::VaultResult;

use super::App;

impl App {
    /// Run an action. Returns `true` when the application should exit.
    pub fn execute_action(&mut self, action: Action) -> VaultResult<bool> {
        match action {
            Action::MoveUp => self.tree.move_up(),
            Action::MoveDown => self.tree.move_down(),
            Action::MoveToTop => self.tree.move_to_top(),
            Action::MoveToBottom => self.tree.move_to_bottom(),
            Action::Select => self.tree.select_current(),

            Action::Fetch => self.toolbox.fetch()?,
            Action::Save => self.toolbox.save()?,
            Action::Delete => self.toolbox.delete()?,
            Action::Clear => self.account.clear(),

            Action::Edit(field) => {
                let value = self.state.field(field);
                self.mode_state.to_insert(field, &value);
            }
            Action::Copy(field) => self.account.copy_field(field),
            Action::Paste(field) => self.account.paste_field(field),
            Action::TogglePasswordVisibility => self.account.toggle_password(),

            Action::EnterCommand => self.mode_state.to_command(),
            Action::ExecuteCommand(cmd) => return self.execute_action(parse_command(&cmd)),
            Action::Cancel => self.mode_state.to_normal(),

            Action::Quit => return Ok(self.quit()),
            Action::Invalid(cmd) => self.state.notify_error(format!("Unknown command: {}", cmd).as_str()),

            _ => {}
        }

        Ok(false)
    }

    fn quit(&mut self) -> bool {
        info!("quit requested");
        self.should_quit = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppConfig;
    use crate::state::clipboard::MemoryClipboard;
    use crate::state::Field;
    use crate::vault::secrets::MemorySecretStore;
    use tempfile::TempDir;

    fn app() -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            cache_path: dir.path().join("keyvault.json"),
            log_path: dir.path().join("keyvault.log"),
        };
        let app = App::new(
            config,
            Box::new(MemorySecretStore::default()),
            Box::new(MemoryClipboard::default()),
        );
        (dir, app)
    }

    #[test]
    fn test_panes_share_one_state() {
        let (_dir, mut app) = app();
        app.state.set_service("svc");
        app.state.set_username("u1");
        app.state.set_password("p1");

        app.execute_action(Action::Save).unwrap();
        app.tree.refresh();
        assert_eq!(app.tree.rows().len(), 2);

        app.execute_action(Action::MoveDown).unwrap();
        app.execute_action(Action::Select).unwrap();
        assert_eq!(app.state.username(), "u1");
        assert_eq!(app.state.password(), "");

        app.execute_action(Action::Fetch).unwrap();
        assert_eq!(app.state.password(), "p1");
    }

    #[test]
    fn test_commands_dispatch() {
        let (_dir, mut app) = app();
        app.state.set_service("svc");

        app.execute_action(Action::ExecuteCommand("clear".to_string())).unwrap();
        assert_eq!(app.state.service(), "");
        assert_eq!(app.state.notification(), "[INFO]: Cleared all entries!");

        app.execute_action(Action::ExecuteCommand("nope".to_string())).unwrap();
        assert_eq!(app.state.notification(), "[ERROR]: Unknown command: nope");

        assert!(app.execute_action(Action::ExecuteCommand("q".to_string())).unwrap());
        assert!(app.should_quit);
    }

    #[test]
    fn test_delete_via_action_clears_fields() {
        let (_dir, mut app) = app();
        app.state.set_service("svc");
        app.state.set_username("u1");

        app.execute_action(Action::Delete).unwrap();

        assert_eq!(app.state.service(), "");
        assert_eq!(app.state.username(), "");
        assert_eq!(app.state.notification(), "[WARNING]: Password not found in keyring!");
    }

    #[test]
    fn test_edit_seeds_buffer() {
        let (_dir, mut app) = app();
        app.state.set_username("bob");

        app.execute_action(Action::Edit(Field::Username)).unwrap();
        assert_eq!(app.mode_state.get_buffer(), "bob");
    }

    #[test]
    fn test_restore_from_mirror() {
        let (dir, mut app) = app();
        std::fs::write(dir.path().join("keyvault.json"), r#"{"svc":["u1","u2"]}"#).unwrap();

        app.restore().unwrap();
        assert_eq!(app.tree.rows().len(), 3);
        assert_eq!(app.tree.account_count(), 2);
    }
}
