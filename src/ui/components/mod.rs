//! UI Components
//!
//! Widgets for the account tree, the account fields and the status line.

pub mod account;
pub mod statusline;
pub mod tree;

// Re-exports
pub use account::{AccountView, FieldEdit};
pub use statusline::{HelpBar, StatusLine};
pub use tree::{AccountTree, EmptyState, TreeViewState};
