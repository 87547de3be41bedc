//! Token storage backends.
//!
//! [`TokenStore`] is the seam between token management and the
//! platform: production code persists to the OS keychain through
//! [`KeyringStore`], while tests and offline tooling use the in-memory
//! [`MemoryStore`].

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use keyring::Entry;
use tokio::sync::RwLock;
use tracing::debug;

use crate::auth::error::StoreError;
use crate::auth::token::OAuthToken;

/// Service name tokens are filed under in the OS keychain.
const SERVICE_NAME: &str = "repopulse";

/// Durable storage for OAuth tokens.
///
/// Absence is not an error: `get` returns `Ok(None)` for a key that
/// was never saved, and `delete` succeeds whether or not the key
/// exists.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn save(&self, key: &str, token: &OAuthToken) -> Result<(), StoreError>;
    async fn get(&self, key: &str) -> Result<Option<OAuthToken>, StoreError>;
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// Stores tokens in the OS keychain as JSON passwords.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyringStore;

impl KeyringStore {
    pub fn new() -> Self {
        Self
    }

    fn entry(key: &str) -> Result<Entry, StoreError> {
        Ok(Entry::new(SERVICE_NAME, key)?)
    }
}

#[async_trait]
impl TokenStore for KeyringStore {
    async fn save(&self, key: &str, token: &OAuthToken) -> Result<(), StoreError> {
        let json = serde_json::to_string(token)?;
        Self::entry(key)?.set_password(&json)?;
        debug!(key, "Token stored in keychain");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<OAuthToken>, StoreError> {
        match Self::entry(key)?.get_password() {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        match Self::entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory token storage for tests and headless environments.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tokens: Arc<RwLock<HashMap<String, OAuthToken>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for MemoryStore {
    async fn save(&self, key: &str, token: &OAuthToken) -> Result<(), StoreError> {
        self.tokens
            .write()
            .await
            .insert(key.to_owned(), token.clone());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<OAuthToken>, StoreError> {
        Ok(self.tokens.read().await.get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.tokens.write().await.remove(key);
        Ok(())
    }
}
