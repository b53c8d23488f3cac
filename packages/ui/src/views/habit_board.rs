//! The logged-in view: add form and the editable habit list.

use api::Habit;
use dioxus::prelude::*;

use crate::app::Action;
use crate::habits::clean_name;
use crate::provider::use_actions;

#[component]
pub fn HabitBoard(habits: Vec<Habit>) -> Element {
    let actions = use_actions();
    let mut draft = use_signal(String::new);
    let empty = habits.is_empty();

    let handle_add = move |evt: FormEvent| {
        evt.prevent_default();
        let name = draft();
        if !name.trim().is_empty() {
            draft.set(String::new());
        }
        actions.send(Action::AddHabit(name));
    };

    rsx! {
        div {
            id: "app-container",
            class: "app-view",
            header {
                h1 { "My habits" }
                button {
                    id: "logout-btn",
                    onclick: move |_| actions.send(Action::Logout),
                    "Log out"
                }
            }
            form {
                class: "habit-form",
                onsubmit: handle_add,
                input {
                    id: "habit-input",
                    r#type: "text",
                    placeholder: "New habit",
                    value: draft(),
                    oninput: move |evt| draft.set(evt.value()),
                }
                button { id: "add-habit-btn", r#type: "submit", "Add" }
            }
            div {
                class: "habit-container",
                if empty {
                    p { class: "habit-empty", "No habits yet." }
                }
                for habit in habits.iter() {
                    HabitRow { key: "{habit.id}", habit: habit.clone() }
                }
            }
        }
    }
}

/// One habit. The name is edited in place and saved when the field loses focus.
#[component]
fn HabitRow(habit: Habit) -> Element {
    let actions = use_actions();
    let id = habit.id;
    let mut name = use_signal(|| habit.name.clone());

    // Follow the list when it changes underneath the field, e.g. on reload.
    use_effect(use_reactive((&habit.name,), move |(listed,)| name.set(listed)));

    let save = move |_: FocusEvent| {
        let committed = clean_name(&name()).to_string();
        name.set(committed.clone());
        actions.send(Action::RenameHabit {
            id,
            name: committed,
        });
    };

    rsx! {
        div {
            class: "habit-item",
            "data-id": "{id}",
            input {
                class: "habit-name",
                r#type: "text",
                value: name(),
                oninput: move |evt| name.set(evt.value()),
                onblur: save,
            }
            button {
                class: "delete-btn",
                onclick: move |_| actions.send(Action::DeleteHabit(id)),
                "Delete"
            }
        }
    }
}
