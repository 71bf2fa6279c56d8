//! Top navigation bar and side icon rail.

use dioxus::prelude::*;
use shoreline_core::Theme;
use shoreline_ui::{Button, ThemeToggle};

/// Labels of the side rail icons, top to bottom.
pub const SIDE_ICONS: [&str; 7] = ["3", "4", "7", "8", "9", "10", "11"];

/// Social icons on the left, Home and the theme toggle on the right.
#[component]
pub fn Navigation(theme: Theme, ontoggle: EventHandler<()>) -> Element {
    rsx! {
        nav { class: "navigation",
            div { class: "nav-left",
                div { class: "social-icon social-icon-1" }
                div { class: "social-icon social-icon-2" }
            }

            div { class: "nav-right",
                Button { class: "home-button".to_string(), "Home" }
                ThemeToggle { theme: theme, ontoggle: ontoggle }
            }
        }
    }
}

/// Numbered icon rail along the left edge.
#[component]
pub fn SideNavigation() -> Element {
    rsx! {
        div { class: "side-navigation",
            for (n, label) in (1..).zip(SIDE_ICONS.iter()) {
                div {
                    key: "{label}",
                    class: "side-icon side-icon-{n}",
                    "{label}"
                }
            }
        }
    }
}
