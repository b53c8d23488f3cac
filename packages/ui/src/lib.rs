//! This crate contains the habits client core and the shared UI for the workspace.

mod app;
pub use app::{Action, AppState, HabitApp};

mod error;
pub use error::ClientError;

pub mod habits;
pub use habits::HabitList;

pub mod session;
pub use session::Session;

mod screen;
pub use screen::{render, Notice, NoticeLevel, Screen, View};

mod platform;
pub use platform::{make_app, PlatformApp, PlatformStore};

mod provider;
pub use provider::{use_actions, use_app_state, HabitsApp, HabitsProvider};

pub mod views;

#[cfg(test)]
mod testing;
