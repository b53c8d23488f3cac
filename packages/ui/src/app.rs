//! # Client core: session, view and habit list in one injectable value
//!
//! [`HabitApp`] owns everything the browser client used to keep in globals:
//! the session token, the active [`View`], the rendered habit list and the
//! current notice. It is generic over the network ([`HabitApi`]) and the
//! durable token storage ([`TokenStore`]), so tests run it against a fake
//! server and a [`store::MemoryStore`].
//!
//! The operations are split by concern:
//!
//! | Module | Operations |
//! |--------|------------|
//! | [`crate::session`] | `login`, `register`, `logout`, `restore_session`, `show_login`, `show_register` |
//! | [`crate::habits`] | `load_habits`, `add_habit`, `rename_habit`, `delete_habit` |
//!
//! ## Concurrency
//!
//! Clones share one [`AppState`]. Operations take `&self` and only borrow
//! the state between awaits, so any number of them can be in flight at
//! once; each applies its result when its own response arrives. A response
//! for a session that has since ended is dropped.
//!
//! ## Invariant
//!
//! `state.view == View::App` exactly when `state.session` holds a token. Every
//! path that ends a session clears both together.

use std::cell::RefCell;
use std::rc::Rc;

use api::{ApiError, Credentials, HabitApi, HabitId};
use store::TokenStore;

use crate::error::ClientError;
use crate::habits::HabitList;
use crate::screen::{render, Notice, Screen, View};
use crate::session::Session;

/// Everything the screen is rendered from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub session: Session,
    pub view: View,
    pub habits: HabitList,
    pub notice: Option<Notice>,
}

/// A user-triggered event.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Restore,
    Login(Credentials),
    Register(Credentials),
    Logout,
    ShowLogin,
    ShowRegister,
    DismissNotice,
    Reload,
    AddHabit(String),
    RenameHabit { id: HabitId, name: String },
    DeleteHabit(HabitId),
}

#[derive(Clone, Debug)]
pub struct HabitApp<A, S> {
    pub(crate) api: A,
    pub(crate) store: S,
    state: Rc<RefCell<AppState>>,
}

impl<A: HabitApi, S: TokenStore> HabitApp<A, S> {
    /// A logged-out client. Call [`restore_session`](Self::restore_session)
    /// to pick up a token persisted by an earlier run.
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            state: Rc::default(),
        }
    }

    /// Copy of the current state, for publishing to the view layer.
    pub fn snapshot(&self) -> AppState {
        self.read(AppState::clone)
    }

    pub fn view(&self) -> View {
        self.read(|state| state.view)
    }

    pub fn session(&self) -> Session {
        self.read(|state| state.session.clone())
    }

    pub fn habits(&self) -> HabitList {
        self.read(|state| state.habits.clone())
    }

    pub fn notice(&self) -> Option<Notice> {
        self.read(|state| state.notice.clone())
    }

    pub fn screen(&self) -> Screen {
        self.read(render)
    }

    pub fn dismiss_notice(&self) {
        self.update(|state| state.notice = None);
    }

    /// Run one user action to completion.
    pub async fn apply(&self, action: Action) -> Result<(), ClientError> {
        match action {
            Action::Restore => self.restore_session().await,
            Action::Login(creds) => self.login(&creds.username, &creds.password).await,
            Action::Register(creds) => self
                .register(&creds.username, &creds.password)
                .await
                .map(|_| ()),
            Action::Logout => {
                self.logout().await;
                Ok(())
            }
            Action::ShowLogin => {
                self.show_login();
                Ok(())
            }
            Action::ShowRegister => {
                self.show_register();
                Ok(())
            }
            Action::DismissNotice => {
                self.dismiss_notice();
                Ok(())
            }
            Action::Reload => self.load_habits().await,
            Action::AddHabit(name) => self.add_habit(&name).await.map(|_| ()),
            Action::RenameHabit { id, name } => self.rename_habit(id, &name).await,
            Action::DeleteHabit(id) => self.delete_habit(id).await,
        }
    }

    // Never hold the borrow across an await.
    pub(crate) fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.borrow())
    }

    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }

    /// Token for an authenticated request. Without one the client is not
    /// allowed to be in the app view, so the logout path runs.
    pub(crate) async fn require_token(&self) -> Result<String, ClientError> {
        if let Some(token) = self.read(|state| state.session.token().map(str::to_string)) {
            return Ok(token);
        }
        tracing::warn!("Authenticated request attempted without a session");
        self.end_session(None).await;
        Err(ClientError::SessionInvalid)
    }

    /// True once the session that issued `token` is gone (logged out, or
    /// replaced by another login) while its request was in flight.
    pub(crate) fn session_ended(&self, token: &str) -> bool {
        let ended = self.read(|state| state.session.token() != Some(token));
        if ended {
            tracing::debug!("Dropping a response for a session that has ended");
        }
        ended
    }

    /// Classify a failed authenticated request. A rejected token ends the
    /// session; anything else is surfaced as a notice.
    pub(crate) async fn authenticated_failure(&self, err: ApiError) -> ClientError {
        if err.is_unauthorized() {
            tracing::info!("Server rejected the session token, logging out");
            self.end_session(Some(Notice::error(
                "Your session has expired. Please log in again.",
            )))
            .await;
            return ClientError::SessionInvalid;
        }
        self.report(err)
    }

    /// Surface a network or server failure to the user.
    pub(crate) fn report(&self, err: ApiError) -> ClientError {
        tracing::warn!("Request failed: {}", err);
        self.update(|state| state.notice = Some(Notice::error(err.to_string())));
        ClientError::NetworkOrServer(err)
    }
}
