//! Key-value backends for persisted credentials
//!
//! Only [`AuthStore`](super::AuthStore) talks to these. The file backend keeps a
//! flat YAML map on disk; tests swap in an in-memory map.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::write_private;
use crate::error::{ConfigError, Error, Result};

/// Synchronous string key-value storage
pub trait CredentialStorage: Send + Sync {
    /// Read a value. Backends report failures instead of hiding them; the
    /// auth store decides how to degrade.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write several values in one update, replacing previous ones
    fn set_items(&self, items: &[(&str, &str)]) -> Result<()>;

    /// Remove several values in one update. Missing keys are not an error.
    fn remove_items(&self, keys: &[&str]) -> Result<()>;

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.set_items(&[(key, value)])
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.remove_items(&[key])
    }
}

/// YAML file storage. Every call re-reads the file so separate processes
/// observe each other's writes.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        let items = serde_yaml::from_str(&contents).map_err(|e| ConfigError::Credentials {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(items)
    }

    /// Current entries for a write. An unparseable file is discarded so a
    /// later write can replace it; the flag reports that it was.
    fn read_for_update(&self) -> Result<(BTreeMap<String, String>, bool)> {
        match self.read_all() {
            Ok(items) => Ok((items, false)),
            Err(Error::Config(e @ ConfigError::Credentials { .. })) => {
                log::warn!("{}; discarding stored credentials", e);
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<()> {
        if items.is_empty() {
            if self.path.exists() {
                std::fs::remove_file(&self.path)?;
            }
            return Ok(());
        }

        let contents =
            serde_yaml::to_string(items).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        write_private(&self.path, &contents)
    }
}

impl CredentialStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_items(&self, entries: &[(&str, &str)]) -> Result<()> {
        let (mut items, _) = self.read_for_update()?;
        for (key, value) in entries {
            items.insert(key.to_string(), value.to_string());
        }
        self.write_all(&items)
    }

    fn remove_items(&self, keys: &[&str]) -> Result<()> {
        let (mut items, discarded) = self.read_for_update()?;
        let removed = keys
            .iter()
            .filter(|key| items.remove(**key).is_some())
            .count();
        if removed > 0 || discarded {
            self.write_all(&items)?;
        }
        Ok(())
    }
}
