//! In-process credential storage for tests

use std::collections::BTreeMap;
use std::sync::RwLock;

use super::CredentialStorage;
use crate::error::{Error, Result};

/// In-process storage, lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with the given entries
    pub fn with_items<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        for (key, value) in items {
            storage
                .set_item(key, value)
                .expect("memory storage never fails");
        }
        storage
    }
}

fn poisoned() -> Error {
    Error::Other("credential storage lock poisoned".to_string())
}

impl CredentialStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items.get(key).cloned())
    }

    fn set_items(&self, entries: &[(&str, &str)]) -> Result<()> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        for (key, value) in entries {
            items.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove_items(&self, keys: &[&str]) -> Result<()> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        for key in keys {
            items.remove(*key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k").unwrap(), None);

        storage.set_item("k", "v1").unwrap();
        storage.set_item("k", "v2").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v2"));

        storage.remove_item("k").unwrap();
        storage.remove_item("k").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), None);
    }
}
