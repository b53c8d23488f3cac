//! Server location for [`HttpApi`](crate::HttpApi).
//!
//! The base URL is kept as text and parsed per request, so a bad value in
//! `habits.toml` or `HABITS_API_URL` surfaces as an [`ApiError::InvalidUrl`]
//! on the first call instead of preventing the client from starting.

use store::ClientConfig;
use url::Url;

use crate::error::ApiError;

/// Environment variable overriding the configured server URL.
pub const API_URL_ENV: &str = "HABITS_API_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Always ends with `/`, so endpoint paths join underneath it.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_client_config(&ClientConfig::default())
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        let mut base_url = base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    pub fn from_client_config(config: &ClientConfig) -> Self {
        Self::new(&config.server.base_url)
    }

    /// Build the config from `.env` / the process environment, falling back
    /// to `config` when `HABITS_API_URL` is unset.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env(config: &ClientConfig) -> Self {
        dotenvy::dotenv().ok();

        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(&url),
            _ => Self::from_client_config(config),
        }
    }

    /// Resolve an endpoint path such as `"api/habits"` against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let base = Url::parse(&self.base_url)?;
        Ok(base.join(path.trim_start_matches('/'))?)
    }
}
