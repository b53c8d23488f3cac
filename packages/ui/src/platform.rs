//! Shared client constructor for all platforms.
//!
//! Returns a [`HabitApp`] wired to [`api::HttpApi`] and the platform's
//! [`store::TokenStore`]:
//! - **Web** (WASM + `web` feature): `localStorage` via `store::LocalStorageStore`,
//!   server at the page origin
//! - **Native**: file under `<data_dir>/habits/` via [`store::FileStore`],
//!   server from `HABITS_API_URL` or `<data_dir>/habits/habits.toml`

use api::{ApiConfig, HttpApi};
use store::ClientConfig;

use crate::app::HabitApp;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::FileStore;

pub type PlatformApp = HabitApp<HttpApi, PlatformStore>;

/// Create a logged-out client for the current platform.
pub fn make_app() -> PlatformApp {
    let config = load_config();
    HabitApp::new(make_api(&config), make_token_store(&config))
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn load_config() -> ClientConfig {
    ClientConfig::default()
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn load_config() -> ClientConfig {
    ClientConfig::load_from_dir(&data_dir())
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn data_dir() -> std::path::PathBuf {
    #[cfg(not(target_arch = "wasm32"))]
    let base = dirs::data_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    #[cfg(target_arch = "wasm32")]
    let base = std::path::PathBuf::from(".");
    base.join("habits")
}

fn make_api(config: &ClientConfig) -> HttpApi {
    #[cfg(target_arch = "wasm32")]
    {
        // The page is served by the habits server itself.
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        let api_config = match origin {
            Some(origin) => ApiConfig::new(&origin),
            None => ApiConfig::from_client_config(config),
        };
        HttpApi::new(api_config)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        HttpApi::new(ApiConfig::from_env(config))
    }
}

fn make_token_store(config: &ClientConfig) -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::with_key(&config.session.token_key)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::FileStore::with_key(data_dir(), &config.session.token_key)
    }
}
