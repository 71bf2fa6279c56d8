use dioxus::prelude::*;

use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and mounts the single landing view.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Landing {}
    }
}
