//! Errors returned by [`HabitApi`](crate::HabitApi) calls.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the bearer token (or, for `/login`, the credentials).
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16 },

    /// The request never produced a usable response: connection failure,
    /// timeout, or a body that does not decode.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Whether this error means the session token is no longer accepted.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
