//! # Filesystem-backed token store
//!
//! [`FileStore`] is a [`TokenStore`] implementation that persists the session
//! token as a single file. It is used on native platforms so a restart keeps
//! the user logged in.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>          # token text, e.g. "jwt_token"
//! ```
//!
//! Use `dirs::data_dir()` joined with `"habits"` for a platform-appropriate
//! base (`~/.local/share/habits/` on Linux,
//! `~/Library/Application Support/habits/` on macOS).

use std::path::PathBuf;

use crate::token::{normalize, TokenStore, DEFAULT_TOKEN_KEY};

/// Filesystem-backed TokenStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
    key: String,
}

impl FileStore {
    /// Store the token under the default key inside `base`.
    pub fn new(base: PathBuf) -> Self {
        Self::with_key(base, DEFAULT_TOKEN_KEY)
    }

    pub fn with_key(base: PathBuf, key: &str) -> Self {
        Self {
            base,
            key: key.to_string(),
        }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(&self.key)
    }
}

impl TokenStore for FileStore {
    async fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.token_path()).ok()?;
        normalize(&content)
    }

    async fn save(&self, token: &str) {
        let path = self.token_path();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(&path, token) {
            tracing::warn!("Failed to persist token to {}: {}", path.display(), e);
        }
    }

    async fn clear(&self) {
        let path = self.token_path();
        match std::fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove token at {}: {}", path.display(), e),
        }
    }
}
