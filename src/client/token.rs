//! Session token storage
//!
//! Exactly one bearer token is live at a time. Requests read whatever value is
//! current when they build their headers.

use std::sync::{Mutex, RwLock};

use base64::{Engine as _, engine::general_purpose};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::storage::LocalStorage;

/// Storage slot holding the bearer token
pub const TOKEN_KEY: &str = "token";

/// Expiry time claimed by a JWT, if the token is one and carries `exp`.
///
/// The signature is not checked; this only informs the user.
pub fn token_expiry(token: &str) -> Option<DateTime<Utc>> {
    #[derive(Deserialize)]
    struct Claims {
        exp: i64,
    }

    let payload = token.split('.').nth(1)?;
    let bytes = general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;

    DateTime::from_timestamp(claims.exp, 0)
}

/// Holder of the session token
pub trait TokenStore: Send + Sync {
    /// Current token, if any
    fn get(&self) -> Option<String>;

    /// Replace the current token
    fn set(&self, token: &str);

    /// Forget the current token
    fn clear(&self);
}

/// Process-local token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a token already present
    #[cfg(test)]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }
}

/// Token store persisted in [`LocalStorage`], surviving restarts.
///
/// Storage failures are logged and treated as "no token".
pub struct StorageTokenStore {
    storage: Mutex<LocalStorage>,
}

impl StorageTokenStore {
    pub fn new(storage: LocalStorage) -> Self {
        Self {
            storage: Mutex::new(storage),
        }
    }

    /// Unix timestamp of the last token write
    pub fn saved_at(&self) -> Option<i64> {
        let storage = self.storage.lock().ok()?;
        storage.updated_at(TOKEN_KEY).unwrap_or_else(|e| {
            log::warn!("Failed to read token timestamp: {}", e);
            None
        })
    }
}

impl TokenStore for StorageTokenStore {
    fn get(&self) -> Option<String> {
        let storage = self.storage.lock().ok()?;
        storage.get_item(TOKEN_KEY).unwrap_or_else(|e| {
            log::warn!("Failed to read token: {}", e);
            None
        })
    }

    fn set(&self, token: &str) {
        let Ok(storage) = self.storage.lock() else {
            return;
        };
        match storage.set_item(TOKEN_KEY, token) {
            Ok(()) => log::debug!("Session token stored"),
            Err(e) => log::warn!("Failed to store token: {}", e),
        }
    }

    fn clear(&self) {
        let Ok(storage) = self.storage.lock() else {
            return;
        };
        match storage.remove_item(TOKEN_KEY) {
            Ok(true) => log::debug!("Session token removed"),
            Ok(false) => {}
            Err(e) => log::warn!("Failed to remove token: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn jwt_with(claims: &str) -> String {
        let header = general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = general_purpose::URL_SAFE_NO_PAD.encode(claims);
        format!("{}.{}.signature", header, payload)
    }

    #[test]
    fn test_token_expiry_from_jwt() {
        let token = jwt_with(r#"{"sub":"1","exp":1741953600}"#);
        let expiry = token_expiry(&token).unwrap();
        assert_eq!(expiry.timestamp(), 1741953600);
    }

    #[test]
    fn test_token_expiry_absent() {
        assert!(token_expiry("opaque-token").is_none());
        assert!(token_expiry(&jwt_with(r#"{"sub":"1"}"#)).is_none());
        assert!(token_expiry("a.!!!.c").is_none());
    }

    #[test]
    fn test_memory_store_starts_empty() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_memory_store_reflects_latest_call() {
        let store = MemoryTokenStore::new();

        store.set("a");
        store.set("b");
        assert_eq!(store.get(), Some("b".to_string()));

        store.clear();
        assert_eq!(store.get(), None);

        store.clear();
        store.set("c");
        assert_eq!(store.get(), Some("c".to_string()));
    }

    #[test]
    fn test_storage_store_reflects_latest_call() {
        let dir = TempDir::new().unwrap();
        let store = StorageTokenStore::new(LocalStorage::open_at(dir.path()).unwrap());

        let ops: [Option<&str>; 5] = [Some("x"), None, Some("y"), Some("z"), None];
        for op in ops {
            match op {
                Some(token) => store.set(token),
                None => store.clear(),
            }
            assert_eq!(store.get().as_deref(), op);
        }
    }

    #[test]
    fn test_storage_store_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        {
            let store = StorageTokenStore::new(LocalStorage::open_at(dir.path()).unwrap());
            store.set("abc");
            assert!(store.saved_at().is_some());
        }

        let store = StorageTokenStore::new(LocalStorage::open_at(dir.path()).unwrap());
        assert_eq!(store.get(), Some("abc".to_string()));
    }
}
