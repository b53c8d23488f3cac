use std::sync::{Arc, Mutex};

use crate::token::{normalize, TokenStore};

/// In-memory TokenStore for testing.
///
/// Clones share the same slot, so a test can keep a handle and inspect what
/// the client persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a token, as after a previous login.
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        *store.slot() = normalize(token);
        store
    }

    /// Synchronous peek at the stored token.
    pub fn current(&self) -> Option<String> {
        self.slot().clone()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned lock only means a panicking test; the value is still usable.
        self.token.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TokenStore for MemoryStore {
    async fn load(&self) -> Option<String> {
        self.slot().clone()
    }

    async fn save(&self, token: &str) {
        *self.slot() = normalize(token);
    }

    async fn clear(&self) {
        *self.slot() = None;
    }
}
