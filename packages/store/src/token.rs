//! # Token storage: durable home of the session token
//!
//! The client keeps exactly one piece of durable state: the bearer token
//! returned by `POST /login`. It survives page reloads and app restarts and is
//! removed on logout or when the server rejects it.
//!
//! ## [`TokenStore`] trait
//!
//! An async interface with three methods. Implementations live in sibling
//! modules:
//!
//! | Backend | Module | Used by |
//! |---------|--------|---------|
//! | [`MemoryStore`](crate::MemoryStore) | [`crate::memory`] | tests, throwaway sessions |
//! | [`FileStore`](crate::FileStore) | [`crate::file_store`] | desktop / native |
//! | `LocalStorageStore` | `crate::local_storage` | browser (`wasm32` + `web` feature) |
//!
//! Backends never fail loudly. A read that cannot be served is `None`, and a
//! write that cannot be persisted is logged and dropped. A broken storage
//! layer therefore degrades to "logged out" instead of a crash.

/// Key under which the token is persisted (browser `localStorage` key and
/// file name on native).
pub const DEFAULT_TOKEN_KEY: &str = "jwt_token";

/// Async trait for persisting the session token.
pub trait TokenStore {
    /// Read the stored token. Blank values count as absent.
    fn load(&self) -> impl std::future::Future<Output = Option<String>>;
    /// Replace the stored token.
    fn save(&self, token: &str) -> impl std::future::Future<Output = ()>;
    /// Remove the stored token. Clearing an empty store is a no-op.
    fn clear(&self) -> impl std::future::Future<Output = ()>;
}

/// Normalise a raw stored value: surrounding whitespace is dropped and an
/// empty result means "no token".
pub(crate) fn normalize(raw: &str) -> Option<String> {
    let token = raw.trim();
    (!token.is_empty()).then(|| token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("tok123\n"), Some("tok123".to_string()));
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize(""), None);
    }
}
