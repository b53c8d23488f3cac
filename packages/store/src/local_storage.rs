//! # Browser `localStorage` token store
//!
//! [`LocalStorageStore`] is the [`TokenStore`] used on the **web platform**.
//! The token sits under a single `localStorage` key (default `"jwt_token"`),
//! so it survives page reloads and is shared by every tab of the origin.
//!
//! Like the other backends it swallows errors: a browser with storage
//! disabled simply behaves as if no one is logged in.

use crate::token::{normalize, TokenStore, DEFAULT_TOKEN_KEY};

/// `localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageStore {
    pub fn new() -> Self {
        Self::with_key(DEFAULT_TOKEN_KEY)
    }

    pub fn with_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalStorageStore {
    async fn load(&self) -> Option<String> {
        let raw = Self::storage()?.get_item(&self.key).ok().flatten()?;
        normalize(&raw)
    }

    async fn save(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, token not persisted");
            return;
        };
        if storage.set_item(&self.key, token).is_err() {
            tracing::warn!("Failed to write token to localStorage");
        }
    }

    async fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
