//! View runtime hooks for Shoreline.
//!
//! Bridges the framework-free `ViewHandle` from `shoreline_core` into Dioxus:
//! mounting it with the component, forwarding its snapshots into a signal,
//! and feeding it the webview's colour scheme preference.
//!
//! ## Usage
//!
//! ```ignore
//! let config = get_view_config();
//! let view = use_view_handle(&config);
//! let snapshot = use_view_snapshot(view.clone());
//! use_color_scheme_listener(view.clone(), config.prefers_dark);
//! ```

use std::rc::Rc;

use dioxus::document::Eval;
use dioxus::prelude::*;
use shoreline_core::{ViewConfig, ViewError, ViewHandle, ViewSnapshot};

/// Get the view configuration.
/// Uses the global config set from command line args.
pub fn get_view_config() -> ViewConfig {
    crate::get_view_config()
}

/// Watches `prefers-color-scheme` and reports every change back to Rust.
///
/// The listener stays registered until a message arrives on the channel.
const COLOR_SCHEME_SCRIPT: &str = r#"
const query = window.matchMedia('(prefers-color-scheme: dark)');
const report = () => dioxus.send(query.matches);
report();
query.addEventListener('change', report);
await dioxus.recv();
query.removeEventListener('change', report);
"#;

/// Mount a view runtime for the lifetime of the calling component.
///
/// The rotation timer and preference listener are released when the
/// component is dropped.
pub fn use_view_handle(config: &ViewConfig) -> Rc<ViewHandle> {
    let view = use_hook(|| {
        Rc::new(ViewHandle::mount(
            config.clock(),
            config.prefers_dark,
            config.rotation_period(),
        ))
    });

    use_drop({
        let view = view.clone();
        move || view.shutdown()
    });

    view
}

/// Mirror the runtime's snapshots into a signal.
pub fn use_view_snapshot(view: Rc<ViewHandle>) -> Signal<ViewSnapshot> {
    let mut snapshot = use_signal(|| view.snapshot());

    use_future(move || {
        let mut updates = view.subscribe();
        async move {
            while updates.changed().await.is_ok() {
                let next = *updates.borrow_and_update();
                snapshot.set(next);
            }
        }
    });

    snapshot
}

/// Removes the JS listener when the owning future is dropped.
struct ColorSchemeListener {
    eval: Eval,
}

impl Drop for ColorSchemeListener {
    fn drop(&mut self) {
        let _ = self.eval.send(true);
        tracing::debug!("Released colour scheme listener");
    }
}

/// Forward the webview's `prefers-color-scheme` to the runtime.
///
/// Does nothing when the preference is pinned by configuration.
pub fn use_color_scheme_listener(view: Rc<ViewHandle>, pinned: Option<bool>) {
    use_future(move || {
        let view = view.clone();
        async move {
            if pinned.is_some() {
                return;
            }
            let mut listener = ColorSchemeListener {
                eval: document::eval(COLOR_SCHEME_SCRIPT),
            };
            loop {
                match listener.eval.recv::<bool>().await {
                    Ok(prefers_dark) => view.set_preference(Some(prefers_dark)),
                    Err(e) => {
                        view.preference_lost(ViewError::PreferenceUnavailable(format!("{:?}", e)));
                        break;
                    }
                }
            }
        }
    });
}

/// Set the document-level `dark` marker read by the stylesheet.
pub fn apply_document_theme(is_dark: bool) {
    let script = format!(
        "document.documentElement.classList.toggle('dark', {});",
        is_dark
    );
    let _ = document::eval(&script);
}
