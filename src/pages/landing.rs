//! Landing page - the whole of Shoreline.
//!
//! Layers, back to front: gradient, birds, clouds, falling elements, sea
//! waves, navigation, content.
//!
//! The decoration layout is drawn afresh every time this component renders
//! (mount and every theme change). The rotating role title lives in its own
//! component so role ticks do not re-render the page.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use shoreline_core::{DecorationGenerator, Theme, ViewSnapshot};
use shoreline_ui::{BirdsLayer, CloudsLayer, FallingLayer, IntroCard, RoleText, SeaWaves};

use crate::components::{Navigation, SideNavigation};
use crate::context::{
    apply_document_theme, get_view_config, use_color_scheme_listener, use_view_handle,
    use_view_snapshot,
};

/// Main heading above the role title.
const HEADING: &str = "Hey there, I'm ME!";

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let config = use_hook(get_view_config);
    let view = use_view_handle(&config);
    let snapshot = use_view_snapshot(view.clone());
    use_color_scheme_listener(view.clone(), config.prefers_dark);

    let generator = use_hook(|| Rc::new(RefCell::new(DecorationGenerator::from_seed(config.seed))));

    let is_dark = use_memo(move || snapshot().is_dark);
    let season = use_memo(move || snapshot().season);

    // Keep the document marker in sync with the theme
    use_effect(move || {
        apply_document_theme(is_dark());
    });

    let theme = Theme::from_dark(is_dark());
    let layout = generator.borrow_mut().generate(season(), theme);
    tracing::trace!(season = %season(), is_dark = is_dark(), "Decorations redrawn");

    let toggle = move |_: ()| {
        let theme = view.toggle_theme();
        tracing::info!("Theme toggled to {}", theme.css_class());
    };

    rsx! {
        div {
            class: "app-container",
            "data-theme": "{theme.css_class()}",
            "data-season": "{season()}",

            div { class: "background-gradient" }

            BirdsLayer { birds: layout.birds }
            CloudsLayer { clouds: layout.clouds }
            FallingLayer { elements: layout.falling }

            SeaWaves {}

            Navigation { theme: theme, ontoggle: toggle }
            SideNavigation {}

            main { class: "main-content",
                div { class: "content-wrapper",
                    h1 { class: "main-heading", "{HEADING}" }
                    RotatingRole { snapshot: snapshot }
                    IntroCard {}
                }
            }
        }
    }
}

/// Role title bound to the view snapshot; re-renders on every tick.
#[component]
fn RotatingRole(snapshot: Signal<ViewSnapshot>) -> Element {
    let role = snapshot().role;
    rsx! {
        RoleText { role: role.to_string() }
    }
}
