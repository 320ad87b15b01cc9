//! Secret Store
//!
//! Passwords live only in the OS credential store, addressed by
//! (service, username).

use tracing::debug;

use super::{VaultError, VaultResult};

pub trait SecretStore {
    /// The stored secret, or `None` when the store has no entry.
    fn get(&self, service: &str, username: &str) -> VaultResult<Option<String>>;

    /// Store a secret, replacing any existing one.
    fn set(&mut self, service: &str, username: &str, secret: &str) -> VaultResult<()>;

    /// Remove a secret. Fails with `VaultError::SecretNotFound` when absent.
    fn delete(&mut self, service: &str, username: &str) -> VaultResult<()>;
}

/// OS keyring (Secret Service, Keychain or Credential Manager).
#[derive(Debug, Default)]
pub struct KeyringStore;

impl KeyringStore {
    pub fn new() -> Self {
        Self
    }
}

impl SecretStore for KeyringStore {
    fn get(&self, service: &str, username: &str) -> VaultResult<Option<String>> {
        let entry = keyring::Entry::new(service, username)?;
        match entry.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => {
                debug!(%service, %username, "no keyring entry");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, service: &str, username: &str, secret: &str) -> VaultResult<()> {
        let entry = keyring::Entry::new(service, username)?;
        entry.set_password(secret)?;
        Ok(())
    }

    fn delete(&mut self, service: &str, username: &str) -> VaultResult<()> {
        let entry = keyring::Entry::new(service, username)?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Err(VaultError::SecretNotFound),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    secrets: std::collections::HashMap<(String, String), String>,
}

#[cfg(test)]
impl MemorySecretStore {
    pub fn len(&self) -> usize {
        self.secrets.len()
    }
}

#[cfg(test)]
impl SecretStore for MemorySecretStore {
    fn get(&self, service: &str, username: &str) -> VaultResult<Option<String>> {
        Ok(self
            .secrets
            .get(&(service.to_string(), username.to_string()))
            .cloned())
    }

    fn set(&mut self, service: &str, username: &str, secret: &str) -> VaultResult<()> {
        self.secrets
            .insert((service.to_string(), username.to_string()), secret.to_string());
        Ok(())
    }

    fn delete(&mut self, service: &str, username: &str) -> VaultResult<()> {
        self.secrets
            .remove(&(service.to_string(), username.to_string()))
            .map(|_| ())
            .ok_or(VaultError::SecretNotFound)
    }
}
