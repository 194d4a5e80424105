//! Persisted login credentials
//!
//! A credential is a bearer token plus the id of the user it belongs to. The
//! presence of a token is the only signal of being logged in: nothing here
//! inspects or expires it.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::Result;

#[cfg(test)]
pub mod memory;
pub mod storage;

#[cfg(test)]
pub use memory::MemoryStorage;
pub use storage::{CredentialStorage, FileStorage};

/// Storage key holding the bearer token
pub const TOKEN_KEY: &str = "auth_token";

/// Storage key holding the logged-in user's id
pub const USER_ID_KEY: &str = "user_id";

/// Token key written by older clients, migrated to [`TOKEN_KEY`] on open
pub const LEGACY_TOKEN_KEY: &str = "token";

/// Credential store over a pluggable storage backend.
///
/// Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub struct AuthStore {
    storage: Arc<dyn CredentialStorage>,
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl AuthStore {
    /// Open a store, moving any legacy token onto the canonical key.
    pub fn new(storage: impl CredentialStorage + 'static) -> Self {
        let store = Self {
            storage: Arc::new(storage),
        };
        if let Err(e) = store.migrate_legacy_token() {
            log::warn!("Failed to migrate legacy credential: {}", e);
        }
        store
    }

    /// Store backed by process memory only
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            storage: Arc::new(MemoryStorage::new()),
        }
    }

    fn migrate_legacy_token(&self) -> Result<()> {
        let Some(legacy) = self.storage.get_item(LEGACY_TOKEN_KEY)? else {
            return Ok(());
        };

        if self.storage.get_item(TOKEN_KEY)?.is_none() {
            log::info!("Migrating credential from '{LEGACY_TOKEN_KEY}' to '{TOKEN_KEY}'");
            self.storage.set_item(TOKEN_KEY, &legacy)?;
        }
        self.storage.remove_item(LEGACY_TOKEN_KEY)
    }

    /// Persist a credential, replacing whatever was stored before.
    /// Token and user id are written in a single storage update.
    pub fn save_auth(&self, token: &str, user_id: &str) -> Result<()> {
        self.storage
            .set_items(&[(TOKEN_KEY, token), (USER_ID_KEY, user_id)])
    }

    /// The persisted token, if any
    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY)
    }

    /// The persisted user id, if any
    pub fn user_id(&self) -> Option<String> {
        self.read(USER_ID_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Remove every credential key. Safe to call when nothing is stored.
    pub fn clear_auth(&self) -> Result<()> {
        self.storage
            .remove_items(&[TOKEN_KEY, LEGACY_TOKEN_KEY, USER_ID_KEY])
    }

    /// `Authorization: Bearer <token>` when a token is stored, else empty.
    pub fn auth_header(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.token() {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => {
                    log::warn!("Stored token is not a valid header value; sending no credentials")
                }
            }
        }
        headers
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to read '{}' from credential storage: {}", key, e);
                None
            }
        }
    }
}
