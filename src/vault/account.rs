//! Account Operations
//!
//! Fetch, save and delete a password in the keyring, then reconcile the
//! account tree and rewrite the mirror file from it.

use tracing::{info, warn};
use zeroize::Zeroize;

use crate::state::SharedState;

use super::mirror::MirrorStore;
use super::secrets::SecretStore;
use super::{VaultError, VaultResult};

const MISSING_ACCOUNT: &str = "Service and username cannot be empty!";
const MISSING_CREDENTIAL: &str = "Service, username and password cannot be empty!";

pub struct Toolbox {
    state: SharedState,
    secrets: Box<dyn SecretStore>,
    mirror: MirrorStore,
}

impl Toolbox {
    pub fn new(state: SharedState, secrets: Box<dyn SecretStore>, mirror: MirrorStore) -> Self {
        Self { state, secrets, mirror }
    }

    #[cfg(test)]
    pub fn secrets(&self) -> &dyn SecretStore {
        self.secrets.as_ref()
    }

    #[cfg(test)]
    pub fn mirror(&self) -> &MirrorStore {
        &self.mirror
    }

    /// Rebuild the tree from the mirror file.
    pub fn restore(&self) -> VaultResult<()> {
        let doc = self.mirror.load()?;
        info!(services = doc.len(), path = %self.mirror.path().display(), "restoring account tree");
        self.state.import_tree(&doc);
        Ok(())
    }

    /// Fetch the password for the current service and username.
    pub fn fetch(&mut self) -> VaultResult<()> {
        self.state.clear_password();

        let (service, username) = (self.state.service(), self.state.username());
        if service.is_empty() || username.is_empty() {
            self.state.notify_warning(MISSING_ACCOUNT);
            return Ok(());
        }

        match self.secrets.get(&service, &username)? {
            Some(mut secret) => {
                self.state.set_password(&secret);
                self.copy_to_clipboard(&secret);
                secret.zeroize();
                self.add_account(&service, &username)?;
                info!(%service, %username, "password fetched");
                self.state.notify_info("Password retrieved from keyring.");
            }
            None => {
                self.remove_account(&service, &username)?;
                info!(%service, %username, "password missing from keyring");
                self.state.notify_warning("Password not found!");
            }
        }
        Ok(())
    }

    /// Store the current password under the current service and username.
    pub fn save(&mut self) -> VaultResult<()> {
        let (service, username) = (self.state.service(), self.state.username());
        let mut password = self.state.password();
        if service.is_empty() || username.is_empty() || password.is_empty() {
            self.state.notify_warning(MISSING_CREDENTIAL);
            return Ok(());
        }

        self.secrets.set(&service, &username, &password)?;
        self.add_account(&service, &username)?;
        self.copy_to_clipboard(&password);
        password.zeroize();
        info!(%service, %username, "password saved");
        self.state.notify_info("Password saved to keyring.");
        Ok(())
    }

    /// Delete the current account from the keyring and the tree. The fields
    /// are cleared even when the keyring had no entry.
    pub fn delete(&mut self) -> VaultResult<()> {
        let (service, username) = (self.state.service(), self.state.username());
        if service.is_empty() || username.is_empty() {
            self.state.notify_warning(MISSING_ACCOUNT);
            return Ok(());
        }

        let outcome = self.secrets.delete(&service, &username);
        match &outcome {
            Ok(()) => {
                info!(%service, %username, "password deleted");
                self.state.notify_info("Password deleted from keyring.");
            }
            Err(VaultError::SecretNotFound) => {
                info!(%service, %username, "nothing to delete in keyring");
                self.state.notify_warning("Password not found in keyring!");
            }
            Err(_) => {}
        }

        let cleanup = self.remove_account(&service, &username);
        self.state.clear_account();

        match outcome {
            Ok(()) | Err(VaultError::SecretNotFound) => cleanup,
            Err(e) => Err(e),
        }
    }

    fn copy_to_clipboard(&self, text: &str) {
        if let Err(e) = self.state.set_clipboard(text) {
            warn!(error = %e, "failed to copy password to clipboard");
        }
    }

    fn add_account(&self, service: &str, username: &str) -> VaultResult<()> {
        self.state.add_username(service, username);
        self.persist()
    }

    fn remove_account(&self, service: &str, username: &str) -> VaultResult<()> {
        self.state.remove_username(service, username);
        self.persist()
    }

    fn persist(&self) -> VaultResult<()> {
        self.mirror.save(&self.state.export_tree())
    }
}
