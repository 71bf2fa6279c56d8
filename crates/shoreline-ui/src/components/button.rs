//! Button Components
//!
//! - Outline: text button with a translucent border ("Home")
//! - Icon: square button holding a single glyph
//! - ThemeToggle: icon button that flips light/dark

use dioxus::prelude::*;
use shoreline_core::Theme;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Translucent outline, used in the navigation bar
    #[default]
    Outline,
    /// Square icon-only button
    Icon,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Icon => "btn-outline btn-icon",
        }
    }
}

/// Join a base class with optional extra classes.
fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Accessible label, for icon-only buttons
    #[props(default)]
    pub aria_label: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button { class: "home-button".to_string(), "Home" }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": props.aria_label.clone(),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Light/dark toggle.
///
/// Shows a sun while dark and a moon while light; each click calls
/// `ontoggle` once.
#[component]
pub fn ThemeToggle(theme: Theme, ontoggle: EventHandler<()>) -> Element {
    rsx! {
        Button {
            variant: ButtonVariant::Icon,
            class: "theme-toggle".to_string(),
            aria_label: theme.toggle_label().to_string(),
            onclick: move |_| ontoggle.call(()),
            span { class: "icon-size", "{theme.toggle_glyph()}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Icon.class(), "btn-outline btn-icon");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Outline);
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(join_classes("btn-outline", None), "btn-outline");
        assert_eq!(join_classes("btn-outline", Some("")), "btn-outline");
        assert_eq!(
            join_classes("btn-outline", Some("home-button")),
            "btn-outline home-button"
        );
    }
}
