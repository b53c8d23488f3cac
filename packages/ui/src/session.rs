//! Session manager: token lifecycle and the login/register/app view switch.

use std::fmt;

use api::{ApiError, Credentials, HabitApi, RegisterOutcome};
use store::TokenStore;

use crate::app::HabitApp;
use crate::error::ClientError;
use crate::screen::{Notice, View};

pub const LOGIN_FAILED: &str = "Login failed!";
pub const REGISTERED: &str = "Registration successful! Please log in.";
pub const REGISTER_FAILED: &str = "Registration failed.";

/// The in-memory session. Mirrors the durable token in the [`TokenStore`].
#[derive(Clone, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl<A: HabitApi, S: TokenStore> HabitApp<A, S> {
    /// Exchange credentials for a token, enter the app view and load habits.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ClientError> {
        let credentials = Credentials::new(username, password);
        let token = match self.api.login(&credentials).await {
            Ok(response) => response.access_token,
            Err(ApiError::Unauthorized | ApiError::Status { .. }) => {
                tracing::info!("Login rejected for {}", username);
                self.update(|state| state.notice = Some(Notice::error(LOGIN_FAILED)));
                return Err(ClientError::AuthenticationFailed);
            }
            Err(err) => return Err(self.report(err)),
        };

        let token = token.trim();
        if token.is_empty() {
            tracing::warn!("Login for {} returned an empty token", username);
            self.update(|state| state.notice = Some(Notice::error(LOGIN_FAILED)));
            return Err(ClientError::AuthenticationFailed);
        }

        self.store.save(token).await;
        self.begin_session(token);
        tracing::info!("Logged in as {}", username);
        self.load_habits().await
    }

    /// Create an account. Any server answer completes the call and returns
    /// to the login view; only a transport failure leaves the view alone.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<RegisterOutcome, ClientError> {
        let credentials = Credentials::new(username, password);
        let outcome = match self.api.register(&credentials).await {
            Ok(outcome) => outcome,
            Err(err) => return Err(self.report(err)),
        };

        let notice = match outcome {
            RegisterOutcome::Created => Notice::info(REGISTERED),
            RegisterOutcome::Rejected { status } => {
                tracing::info!("Registration for {} rejected with {}", username, status);
                Notice::error(REGISTER_FAILED)
            }
        };
        self.update(|state| state.notice = Some(notice));
        self.show_login();
        Ok(outcome)
    }

    /// Forget the token everywhere and return to the login view.
    pub async fn logout(&self) {
        self.end_session(None).await;
    }

    /// Startup: resume a persisted session or show the login view.
    pub async fn restore_session(&self) -> Result<(), ClientError> {
        match self.store.load().await {
            Some(token) => {
                tracing::debug!("Restoring persisted session");
                self.begin_session(&token);
                self.load_habits().await
            }
            None => {
                self.update(|state| {
                    state.session = Session::default();
                    state.habits.clear();
                    state.view = View::Login;
                });
                Ok(())
            }
        }
    }

    /// Switch to the login form. Ignored while logged in.
    pub fn show_login(&self) {
        self.switch_auth_view(View::Login);
    }

    /// Switch to the registration form. Ignored while logged in.
    pub fn show_register(&self) {
        self.switch_auth_view(View::Register);
    }

    fn switch_auth_view(&self, view: View) {
        self.update(|state| {
            if state.view != View::App {
                state.view = view;
            }
        });
    }

    fn begin_session(&self, token: &str) {
        self.update(|state| {
            state.session = Session::with_token(token);
            state.view = View::App;
            state.notice = None;
        });
    }

    /// The state is cleared before the store, so requests still in flight
    /// see the session gone as soon as this starts.
    pub(crate) async fn end_session(&self, notice: Option<Notice>) {
        self.update(|state| {
            state.session = Session::default();
            state.habits.clear();
            state.view = View::Login;
            state.notice = notice;
        });
        self.store.clear().await;
    }
}
