//! # Client configuration: `habits.toml`
//!
//! Defines the optional TOML file a native client reads at startup
//! (filename: [`ClientConfig::filename`] = `"habits.toml"`). It tells the
//! client where the habits server lives and under which key the session token
//! is persisted.
//!
//! ## Structure
//!
//! ```toml
//! [server]
//! base_url = "http://127.0.0.1:5000"
//!
//! [session]
//! token_key = "jwt_token"
//! ```
//!
//! All structs derive `Default`, so a missing or empty file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

use crate::token::DEFAULT_TOKEN_KEY;

/// Top-level configuration stored in `habits.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Where the REST API is served.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Origin of the habits server. Paths such as `/login` are joined onto it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Session persistence settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Storage key holding the bearer token.
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given server.
    pub fn new(base_url: String) -> Self {
        Self {
            server: ServerConfig { base_url },
            session: SessionConfig::default(),
        }
    }

    /// Builder method to set the token storage key.
    pub fn with_token_key(mut self, key: &str) -> Self {
        self.session.token_key = key.to_string();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "habits.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read `habits.toml` from `dir`, falling back to defaults when the file
    /// is missing or malformed.
    pub fn load_from_dir(dir: &std::path::Path) -> Self {
        let path = dir.join(Self::filename());
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match Self::from_toml(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
