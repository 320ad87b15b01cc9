//! Mirror Store
//!
//! JSON file holding service -> usernames, so the tree can be rebuilt at
//! startup without asking the keyring about every entry.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::state::MirrorDocument;

use super::VaultResult;

/// Get default mirror path (~/.keyvault/keyvault.json)
pub fn default_mirror_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".keyvault")
        .join("keyvault.json")
}

#[derive(Debug, Clone)]
pub struct MirrorStore {
    path: PathBuf,
}

impl MirrorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the mirror file. A missing file is an empty document.
    pub fn load(&self) -> VaultResult<MirrorDocument> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no mirror file yet");
                return Ok(MirrorDocument::new());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&data)?)
    }

    /// Overwrite the mirror file with a full snapshot.
    pub fn save(&self, doc: &MirrorDocument) -> VaultResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_string(doc)?;
        std::fs::write(&self.path, data)?;
        debug!(path = %self.path.display(), services = doc.len(), "mirror saved");
        Ok(())
    }
}
