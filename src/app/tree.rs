//! Vault tree pane: cursor over the flattened account tree.

use crate::state::{Selection, SharedState};
use crate::ui::components::TreeViewState;

pub struct TreePanel {
    state: SharedState,
    rows: Vec<Selection>,
    revision: Option<u64>,
    view_state: TreeViewState,
}

impl TreePanel {
    pub fn new(state: SharedState) -> Self {
        Self {
            state,
            rows: Vec::new(),
            revision: None,
            view_state: TreeViewState::new(),
        }
    }

    /// Rebuild rows if the tree changed since the last call.
    pub fn refresh(&mut self) {
        let revision = self.state.revision();
        if self.revision == Some(revision) {
            return;
        }

        let previous = self.current().cloned();
        self.rows = self.state.tree_rows();
        self.revision = Some(revision);
        self.view_state.set_total(self.rows.len());

        if let Some(index) = previous.and_then(|p| self.rows.iter().position(|r| *r == p)) {
            self.view_state.select(Some(index));
        }
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[Selection] {
        &self.rows
    }

    pub fn view_parts(&mut self) -> (&[Selection], &mut TreeViewState) {
        (&self.rows, &mut self.view_state)
    }

    pub fn account_count(&self) -> usize {
        self.rows.iter().filter(|r| !r.is_service()).count()
    }

    pub fn current(&self) -> Option<&Selection> {
        self.view_state.selected().and_then(|i| self.rows.get(i))
    }

    pub fn move_up(&mut self) {
        self.view_state.move_up();
    }

    pub fn move_down(&mut self) {
        self.view_state.move_down();
    }

    pub fn move_to_top(&mut self) {
        self.view_state.move_to_top();
    }

    pub fn move_to_bottom(&mut self) {
        self.view_state.move_to_bottom();
    }

    /// Load the highlighted node into the account fields.
    pub fn select_current(&mut self) {
        if let Some(node) = self.current().cloned() {
            self.state.select(&node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::clipboard::MemoryClipboard;

    fn panel() -> (SharedState, TreePanel) {
        let state = SharedState::new(Box::new(MemoryClipboard::default()));
        state.add_username("mail", "bob");
        state.add_username("mail", "amy");
        let mut panel = TreePanel::new(state.clone());
        panel.refresh();
        (state, panel)
    }

    #[test]
    fn test_select_username_row() {
        let (state, mut panel) = panel();
        panel.move_down();
        panel.select_current();

        assert_eq!(state.service(), "mail");
        assert_eq!(state.username(), "bob");
        assert_eq!(panel.account_count(), 2);
    }

    #[test]
    fn test_refresh_follows_tree_changes() {
        let (state, mut panel) = panel();
        panel.move_to_bottom();
        assert_eq!(panel.current().map(|r| r.label()), Some("amy"));

        state.add_username("bank", "carol");
        panel.refresh();
        assert_eq!(panel.rows().len(), 5);
        assert_eq!(panel.current().map(|r| r.label()), Some("amy"));

        state.remove_username("mail", "amy");
        panel.refresh();
        assert_eq!(panel.rows().len(), 4);
        assert!(panel.current().is_some());
    }

    #[test]
    fn test_select_on_empty_tree_is_noop() {
        let state = SharedState::new(Box::new(MemoryClipboard::default()));
        state.set_service("kept");
        let mut panel = TreePanel::new(state.clone());
        panel.refresh();

        panel.select_current();
        assert_eq!(state.service(), "kept");
    }
}
