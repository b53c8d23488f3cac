//! # Screen description: what the client should display
//!
//! [`render`] is a pure function from [`AppState`] to a [`Screen`]. The Dioxus
//! components only translate a `Screen` into elements, so everything about
//! *which* page is up and *what* it lists can be checked in plain unit tests.
//!
//! An inconsistent state (app view without a token, or an auth view with
//! one) never shows the habit list: it falls back to the login screen.

use api::Habit;

use crate::app::AppState;

/// Top-level view. Exactly one is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Login,
    Register,
    App,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A user-visible message, e.g. "Login failed!".
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Login { notice: Option<Notice> },
    Register { notice: Option<Notice> },
    Habits {
        habits: Vec<Habit>,
        notice: Option<Notice>,
    },
}

impl Screen {
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Screen::Login { notice } | Screen::Register { notice } => notice.as_ref(),
            Screen::Habits { notice, .. } => notice.as_ref(),
        }
    }

    pub fn view(&self) -> View {
        match self {
            Screen::Login { .. } => View::Login,
            Screen::Register { .. } => View::Register,
            Screen::Habits { .. } => View::App,
        }
    }
}

/// Describe what should be displayed for `state`.
pub fn render(state: &AppState) -> Screen {
    let notice = state.notice.clone();
    match (state.view, state.session.is_authenticated()) {
        (View::App, true) => Screen::Habits {
            habits: state.habits.iter().cloned().collect(),
            notice,
        },
        (View::Register, false) => Screen::Register { notice },
        _ => Screen::Login { notice },
    }
}
