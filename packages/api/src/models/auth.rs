//! Login and registration payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Username/password pair sent to `/login` and `/register`.
#[derive(Clone, Serialize, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keep passwords out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful `/login` response.
#[derive(Clone, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// How `/register` answered. Both outcomes complete the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    Created,
    Rejected { status: u16 },
}

impl RegisterOutcome {
    pub fn is_created(self) -> bool {
        matches!(self, RegisterOutcome::Created)
    }
}
