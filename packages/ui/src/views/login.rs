//! Login form.

use api::Credentials;
use dioxus::prelude::*;

use crate::app::Action;
use crate::provider::use_actions;

/// Login page component.
#[component]
pub fn LoginView() -> Element {
    let actions = use_actions();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        actions.send(Action::Login(Credentials::new(username(), password())));
    };

    let show_register = move |evt: MouseEvent| {
        evt.prevent_default();
        actions.send(Action::ShowRegister);
    };

    rsx! {
        div {
            id: "login-view",
            class: "auth-view",
            h2 { "Log in" }
            form {
                onsubmit: handle_login,
                input {
                    id: "login-username",
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt| username.set(evt.value()),
                }
                input {
                    id: "login-password",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
                button { id: "login-btn", r#type: "submit", "Log in" }
            }
            p {
                "No account yet? "
                a { id: "show-register", href: "#", onclick: show_register, "Register" }
            }
        }
    }
}
