//! Client state context and the action loop for the UI.

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::app::{Action, AppState};
use crate::platform::make_app;
use crate::screen::{render, Screen};
use crate::views::{HabitBoard, LoginView, NoticeBanner, RegisterView};

/// Get the current client state.
/// Returns a signal that updates after every completed action.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Handle for sending user actions to the client.
pub fn use_actions() -> Coroutine<Action> {
    use_coroutine_handle::<Action>()
}

/// Provider component that owns the client and runs actions.
///
/// Each action runs as its own task against a shared [`crate::HabitApp`], so
/// a slow request never holds up the others. The state signal is
/// republished whenever one of them finishes. The persisted session is
/// restored before children are shown.
#[component]
pub fn HabitsProvider(children: Element) -> Element {
    let mut state = use_signal(AppState::default);
    let mut ready = use_signal(|| false);

    let _actions = use_coroutine(move |mut rx: UnboundedReceiver<Action>| async move {
        let app = make_app();
        if let Err(e) = app.restore_session().await {
            tracing::warn!("Could not restore session: {}", e);
        }
        state.set(app.snapshot());
        ready.set(true);

        while let Some(action) = rx.next().await {
            let app = app.clone();
            spawn(async move {
                if let Err(e) = app.apply(action).await {
                    tracing::debug!("Action ended with: {}", e);
                }
                state.set(app.snapshot());
            });
        }
    });

    use_context_provider(|| state);

    if !ready() {
        return rsx! {
            div { class: "loading", "Loading..." }
        };
    }

    rsx! {
        {children}
    }
}

/// The whole habits client: provider plus whichever view is active.
#[component]
pub fn HabitsApp() -> Element {
    rsx! {
        HabitsProvider {
            ActiveScreen {}
        }
    }
}

#[component]
fn ActiveScreen() -> Element {
    let state = use_app_state();
    let screen = render(&state.read());

    let banner = screen
        .notice()
        .cloned()
        .map(|notice| rsx! { NoticeBanner { notice: notice } });

    let body = match screen {
        Screen::Login { .. } => rsx! { LoginView {} },
        Screen::Register { .. } => rsx! { RegisterView {} },
        Screen::Habits { habits, .. } => rsx! { HabitBoard { habits: habits } },
    };

    rsx! {
        div {
            class: "habits-app",
            {banner}
            {body}
        }
    }
}
