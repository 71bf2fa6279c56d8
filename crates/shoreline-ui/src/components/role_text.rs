//! Rotating role title.

use dioxus::prelude::*;

/// "I'm a {role}"; the role is announced politely to screen readers.
#[component]
pub fn RoleText(role: String) -> Element {
    rsx! {
        div { class: "role-text",
            span { "I'm a " }
            span {
                class: "role-animated",
                "aria-live": "polite",
                "{role}"
            }
        }
    }
}
