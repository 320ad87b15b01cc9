//! Vault Module
//!
//! Secrets in the OS keyring, the account tree mirrored to a local JSON
//! file, and the account operations that keep the two in step.

pub mod account;
pub mod mirror;
pub mod secrets;

use thiserror::Error;

/// Vault errors
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("Secret not found")]
    SecretNotFound,

    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache format error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type VaultResult<T> = Result<T, VaultError>;

// Re-exports
pub use account::Toolbox;
pub use mirror::MirrorStore;
pub use secrets::{KeyringStore, SecretStore};
