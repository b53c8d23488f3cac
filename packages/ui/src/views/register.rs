//! Registration form.

use api::Credentials;
use dioxus::prelude::*;

use crate::app::Action;
use crate::provider::use_actions;

/// Register page component.
#[component]
pub fn RegisterView() -> Element {
    let actions = use_actions();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        actions.send(Action::Register(Credentials::new(username(), password())));
    };

    let show_login = move |evt: MouseEvent| {
        evt.prevent_default();
        actions.send(Action::ShowLogin);
    };

    rsx! {
        div {
            id: "register-view",
            class: "auth-view",
            h2 { "Create an account" }
            form {
                onsubmit: handle_register,
                input {
                    id: "register-username",
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt| username.set(evt.value()),
                }
                input {
                    id: "register-password",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
                button { id: "register-btn", r#type: "submit", "Register" }
            }
            p {
                "Already registered? "
                a { id: "show-login", href: "#", onclick: show_login, "Log in" }
            }
        }
    }
}
