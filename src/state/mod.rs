//! Shared Application State
//!
//! One record of the current service, username, password and notification,
//! plus the account tree and the clipboard proxy. Every view component holds
//! a clone of the same `SharedState` handle, so they all observe and mutate
//! one allocation.

pub mod clipboard;
pub mod tree;

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use zeroize::Zeroize;

pub use clipboard::{Clipboard, SystemClipboard};
pub use tree::{MirrorDocument, Selection, TreeProjection};

/// State errors
#[derive(Debug, Error)]
pub enum StateError {
    #[error("Clipboard empty")]
    ClipboardEmpty,

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

pub type StateResult<T> = Result<T, StateError>;

/// Editable account fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Service,
    Username,
    Password,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Service, Field::Username, Field::Password];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Service => "Service",
            Self::Username => "Username",
            Self::Password => "Password",
        }
    }
}

const INFO_TAG: &str = "[INFO]: ";
const WARNING_TAG: &str = "[WARNING]: ";
const ERROR_TAG: &str = "[ERROR]: ";

struct StateInner {
    service: String,
    username: String,
    password: String,
    notification: String,
    tree: TreeProjection,
    revision: u64,
    clipboard: Box<dyn Clipboard>,
}

#[derive(Clone)]
pub struct SharedState {
    inner: Rc<RefCell<StateInner>>,
}

impl SharedState {
    pub fn new(clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StateInner {
                service: String::new(),
                username: String::new(),
                password: String::new(),
                notification: String::new(),
                tree: TreeProjection::new(),
                revision: 0,
                clipboard,
            })),
        }
    }

    /// True when both handles point at the same state.
    #[cfg(test)]
    pub fn same_as(&self, other: &SharedState) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // Fields

    pub fn field(&self, field: Field) -> String {
        let inner = self.inner.borrow();
        match field {
            Field::Service => inner.service.clone(),
            Field::Username => inner.username.clone(),
            Field::Password => inner.password.clone(),
        }
    }

    pub fn set_field(&self, field: Field, value: &str) {
        let mut inner = self.inner.borrow_mut();
        let slot = match field {
            Field::Service => &mut inner.service,
            Field::Username => &mut inner.username,
            Field::Password => &mut inner.password,
        };
        slot.zeroize();
        slot.push_str(value);
    }

    pub fn clear_field(&self, field: Field) {
        self.set_field(field, "");
    }

    pub fn service(&self) -> String {
        self.field(Field::Service)
    }

    pub fn set_service(&self, value: &str) {
        self.set_field(Field::Service, value);
    }

    pub fn clear_service(&self) {
        self.clear_field(Field::Service);
    }

    pub fn username(&self) -> String {
        self.field(Field::Username)
    }

    pub fn set_username(&self, value: &str) {
        self.set_field(Field::Username, value);
    }

    pub fn clear_username(&self) {
        self.clear_field(Field::Username);
    }

    pub fn password(&self) -> String {
        self.field(Field::Password)
    }

    pub fn set_password(&self, value: &str) {
        self.set_field(Field::Password, value);
    }

    pub fn clear_password(&self) {
        self.clear_field(Field::Password);
    }

    pub fn notification(&self) -> String {
        self.inner.borrow().notification.clone()
    }

    pub fn set_notification(&self, value: &str) {
        self.inner.borrow_mut().notification = value.to_string();
    }

    pub fn clear_notification(&self) {
        self.inner.borrow_mut().notification.clear();
    }

    /// Clear service, username and password.
    pub fn clear_account(&self) {
        for field in Field::ALL {
            self.clear_field(field);
        }
    }

    // Clipboard

    pub fn clipboard(&self) -> StateResult<String> {
        self.inner.borrow_mut().clipboard.get_text()
    }

    pub fn set_clipboard(&self, value: &str) -> StateResult<()> {
        self.inner.borrow_mut().clipboard.set_text(value)
    }

    pub fn clear_clipboard(&self) -> StateResult<()> {
        self.inner.borrow_mut().clipboard.clear()
    }

    // Notifications

    fn notify(&self, tag: &str, msg: Option<&str>) {
        let Some(msg) = msg.filter(|m| !m.is_empty()) else { return };
        self.set_notification(&format!("{tag}{msg}"));
    }

    pub fn notify_info<'a>(&self, msg: impl Into<Option<&'a str>>) {
        self.notify(INFO_TAG, msg.into());
    }

    pub fn notify_warning<'a>(&self, msg: impl Into<Option<&'a str>>) {
        self.notify(WARNING_TAG, msg.into());
    }

    pub fn notify_error<'a>(&self, msg: impl Into<Option<&'a str>>) {
        self.notify(ERROR_TAG, msg.into());
    }

    // Tree

    fn mutate_tree(&self, f: impl FnOnce(&mut TreeProjection) -> bool) {
        let mut inner = self.inner.borrow_mut();
        if f(&mut inner.tree) {
            inner.revision += 1;
        }
    }

    pub fn add_username(&self, service: &str, username: &str) {
        self.mutate_tree(|tree| tree.add_username(service, username));
    }

    pub fn remove_username(&self, service: &str, username: &str) {
        self.mutate_tree(|tree| tree.remove_username(service, username));
    }

    pub fn export_tree(&self) -> MirrorDocument {
        self.inner.borrow().tree.export()
    }

    pub fn import_tree(&self, doc: &MirrorDocument) {
        let mut inner = self.inner.borrow_mut();
        inner.tree.import(doc);
        inner.revision += 1;
    }

    pub fn tree_rows(&self) -> Vec<Selection> {
        self.inner.borrow().tree.rows()
    }

    #[cfg(test)]
    pub fn tree_contains(&self, service: &str, username: &str) -> bool {
        self.inner.borrow().tree.contains(service, username)
    }

    /// Bumped whenever the tree changes.
    pub fn revision(&self) -> u64 {
        self.inner.borrow().revision
    }

    /// Load a tree node into the account fields.
    pub fn select(&self, node: &Selection) {
        self.clear_account();

        match node {
            Selection::Service(service) => {
                self.set_service(service);
                self.notify_info("Service selected.");
            }
            Selection::Username { service, username } => {
                self.set_service(service);
                self.set_username(username);
                self.notify_info("Username selected.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::clipboard::MemoryClipboard;
    use super::*;

    fn state() -> SharedState {
        SharedState::new(Box::new(MemoryClipboard::default()))
    }

    #[test]
    fn test_handles_share_fields() {
        let first = state();
        let second = first.clone();

        second.set_service("mail");
        first.set_username("bob");

        assert!(first.same_as(&second));
        assert_eq!(first.service(), "mail");
        assert_eq!(second.username(), "bob");

        first.clear_service();
        assert_eq!(second.service(), "");
    }

    #[test]
    fn test_fields_default_empty() {
        let state = state();
        assert_eq!(state.service(), "");
        assert_eq!(state.username(), "");
        assert_eq!(state.password(), "");
        assert_eq!(state.notification(), "");
    }

    #[test]
    fn test_notify_tags_and_overwrite() {
        let state = state();

        state.notify_info("Saved.");
        assert_eq!(state.notification(), "[INFO]: Saved.");

        state.notify_warning("Careful.");
        assert_eq!(state.notification(), "[WARNING]: Careful.");

        state.notify_error("Broken.");
        assert_eq!(state.notification(), "[ERROR]: Broken.");
    }

    #[test]
    fn test_notify_ignores_empty_messages() {
        let state = state();
        state.notify_info("kept");

        state.notify_warning("");
        state.notify_error(None::<&str>);
        assert_eq!(state.notification(), "[INFO]: kept");
    }

    #[test]
    fn test_clipboard_round_trip() {
        let state = state();
        assert!(matches!(state.clipboard(), Err(StateError::ClipboardEmpty)));

        state.set_clipboard("copied").unwrap();
        assert_eq!(state.clone().clipboard().unwrap(), "copied");

        state.clear_clipboard().unwrap();
        assert!(state.clipboard().is_err());
    }

    #[test]
    fn test_select_service_node() {
        let state = state();
        state.set_username("stale");
        state.set_password("hunter2");

        state.select(&Selection::Service("mail".to_string()));

        assert_eq!(state.service(), "mail");
        assert_eq!(state.username(), "");
        assert_eq!(state.password(), "");
        assert_eq!(state.notification(), "[INFO]: Service selected.");
    }

    #[test]
    fn test_select_username_node() {
        let state = state();
        state.set_password("hunter2");

        state.select(&Selection::Username {
            service: "mail".to_string(),
            username: "bob".to_string(),
        });

        assert_eq!(state.service(), "mail");
        assert_eq!(state.username(), "bob");
        assert_eq!(state.password(), "");
        assert_eq!(state.notification(), "[INFO]: Username selected.");
    }

    #[test]
    fn test_revision_tracks_tree_changes() {
        let state = state();
        let start = state.revision();

        state.add_username("svc", "u1");
        let after_add = state.revision();
        assert!(after_add > start);

        state.add_username("SVC", "U1");
        assert_eq!(state.revision(), after_add);

        state.remove_username("svc", "u1");
        assert!(state.revision() > after_add);
        assert!(state.export_tree().is_empty());
    }

    #[test]
    fn test_import_export_through_state() {
        let state = state();
        let mut doc = MirrorDocument::new();
        doc.insert("svc".to_string(), vec!["u1".to_string(), "u2".to_string()]);

        state.import_tree(&doc);
        assert!(state.tree_contains("svc", "U2"));
        assert_eq!(state.export_tree(), doc);
    }
}
