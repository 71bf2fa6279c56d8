//! Intro Card Component
//!
//! Static greeting card under the role title.

use dioxus::prelude::*;

/// Default greeting heading
pub const INTRO_HEADING: &str = "Ayubowan!";

/// Default introduction paragraph
pub const INTRO_TEXT: &str = "I'm a passionate Front-End Developer from Sri Lanka, with a knack for creating interactive and visually stunning user interfaces.";

/// Properties for the IntroCard component
#[derive(Clone, PartialEq, Props)]
pub struct IntroCardProps {
    #[props(default = INTRO_HEADING.to_string())]
    pub heading: String,
    #[props(default = INTRO_TEXT.to_string())]
    pub text: String,
}

/// Frosted card with a heading and one paragraph
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     IntroCard {}
/// }
/// ```
#[component]
pub fn IntroCard(props: IntroCardProps) -> Element {
    rsx! {
        div { class: "intro-card",
            h2 { class: "intro-heading", "{props.heading}" }
            p { class: "intro-text", "{props.text}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_props() {
        let props = IntroCardProps {
            heading: INTRO_HEADING.to_string(),
            text: INTRO_TEXT.to_string(),
        };
        assert_eq!(props.heading, "Ayubowan!");
        assert!(props.text.starts_with("I'm a passionate Front-End Developer"));
    }
}
