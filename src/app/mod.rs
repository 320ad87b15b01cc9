//! Application State
//!
//! Core application logic tying together the shared state, the keyring,
//! the mirror file and the terminal UI.

mod account;
mod actions;
mod config;
mod input;
mod tree;

use ratatui::Frame;
use zeroize::Zeroize;

use crate::input::{InputMode, ModeState};
use crate::state::{Clipboard, SharedState};
use crate::ui::components::FieldEdit;
use crate::ui::{Renderer, UiState};
use crate::vault::{MirrorStore, SecretStore, Toolbox, VaultResult};

pub use account::AccountPanel;
pub use config::AppConfig;
pub use tree::TreePanel;

pub struct App {
    pub state: SharedState,
    pub tree: TreePanel,
    pub account: AccountPanel,
    pub toolbox: Toolbox,
    pub mode_state: ModeState,
    pub should_quit: bool,
}

impl App {
    /// Every pane gets a handle to the same state.
    pub fn new(config: AppConfig, secrets: Box<dyn SecretStore>, clipboard: Box<dyn Clipboard>) -> Self {
        let state = SharedState::new(clipboard);
        let mirror = MirrorStore::new(&config.cache_path);

        Self {
            tree: TreePanel::new(state.clone()),
            account: AccountPanel::new(state.clone()),
            toolbox: Toolbox::new(state.clone(), secrets, mirror),
            state,
            mode_state: ModeState::new(),
            should_quit: false,
        }
    }

    /// Populate the tree from the mirror file.
    pub fn restore(&mut self) -> VaultResult<()> {
        self.toolbox.restore()?;
        self.tree.refresh();
        Ok(())
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.tree.refresh();

        let service = self.state.service();
        let username = self.state.username();
        let mut password = self.state.password();
        let notification = self.state.notification();

        let mode = self.mode_state.mode;
        let edit = mode.editing().map(|field| FieldEdit {
            field,
            buffer: self.mode_state.get_buffer(),
            cursor: self.mode_state.cursor,
        });
        let command_buffer = (mode == InputMode::Command)
            .then(|| self.mode_state.get_buffer());

        let account_count = self.tree.account_count();
        let (rows, tree_state) = self.tree.view_parts();
        let mut ui = UiState {
            mode,
            rows,
            tree_state,
            service: &service,
            username: &username,
            password: &password,
            password_visible: self.account.password_visible,
            edit,
            command_buffer,
            notification: &notification,
            account_count,
        };

        Renderer::render(frame, &mut ui);
        password.zeroize();
    }
}
