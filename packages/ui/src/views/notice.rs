use dioxus::prelude::*;

use crate::app::Action;
use crate::provider::use_actions;
use crate::screen::{Notice, NoticeLevel};

/// Dismissable message shown above the active view.
#[component]
pub fn NoticeBanner(notice: Notice) -> Element {
    let actions = use_actions();
    let class = match notice.level {
        NoticeLevel::Info => "notice notice--info",
        NoticeLevel::Error => "notice notice--error",
    };

    rsx! {
        div {
            class: "{class}",
            "role": "alert",
            span { "{notice.message}" }
            button {
                class: "notice-dismiss",
                title: "Dismiss",
                onclick: move |_| actions.send(Action::DismissNotice),
                "×"
            }
        }
    }
}
