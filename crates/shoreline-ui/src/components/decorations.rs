//! Decorative animation layers: falling elements, birds and clouds.
//!
//! Each layer renders exactly the elements it is given; placement comes from
//! [`shoreline_core::DecorationGenerator`]. Keys are positional since the
//! layout is redrawn wholesale on every render.

use dioxus::prelude::*;
use shoreline_core::{Bird, Cloud, DecorationKind, FallingElement};

use crate::art::{cloud_svg, falling_art, FallingArt, BIRD_SVG};

/// Snowflakes or leaves drifting down the page.
#[component]
pub fn FallingLayer(elements: Vec<FallingElement>) -> Element {
    rsx! {
        div { class: "animation-layer falling-layer",
            for (i, element) in elements.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "{element.kind.css_class()}",
                    style: "{element.style()}",
                    {match falling_art(element.kind) {
                        FallingArt::Svg(svg) => rsx! {
                            span {
                                class: "snowflake",
                                role: "img",
                                "aria-label": "{element.kind.alt_text()}",
                                dangerous_inner_html: svg,
                            }
                        },
                        FallingArt::Glyph(glyph) => rsx! {
                            span { class: "leaf", "{glyph}" }
                        },
                    }}
                }
            }
        }
    }
}

/// Birds crossing the upper sky.
#[component]
pub fn BirdsLayer(birds: Vec<Bird>) -> Element {
    rsx! {
        div { class: "animation-layer birds-layer",
            for (i, bird) in birds.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "{bird.kind().css_class()}",
                    style: "{bird.style()}",
                    span {
                        class: "bird-img",
                        role: "img",
                        "aria-label": "{bird.kind().alt_text()}",
                        dangerous_inner_html: BIRD_SVG,
                    }
                }
            }
        }
    }
}

/// Small and large clouds drifting sideways.
#[component]
pub fn CloudsLayer(clouds: Vec<Cloud>) -> Element {
    rsx! {
        div { class: "animation-layer clouds-layer",
            for (i, cloud) in clouds.iter().enumerate() {
                div {
                    key: "{cloud.kind.css_class()}-{i}",
                    class: "{cloud.kind.css_class()}",
                    style: "{cloud.style()}",
                    span {
                        class: if cloud.kind == DecorationKind::CloudSmall { "cloud-img cloud-img-small" } else { "cloud-img cloud-img-large" },
                        role: "img",
                        "aria-label": "{cloud.kind.alt_text()}",
                        dangerous_inner_html: cloud_svg(cloud.asset),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::art::{LEAF_GLYPH, SNOWFLAKE_SVG};
    use shoreline_core::{DecorationGenerator, Season, Theme};

    fn falling_art_for(season: Season) -> Vec<FallingArt> {
        DecorationGenerator::seeded(3)
            .generate(season, Theme::Light)
            .falling
            .iter()
            .map(|element| falling_art(element.kind))
            .collect()
    }

    #[test]
    fn winter_draws_twenty_snowflakes() {
        let art = falling_art_for(Season::Winter);
        assert_eq!(art.len(), 20);
        assert!(art.iter().all(|a| *a == FallingArt::Svg(SNOWFLAKE_SVG)));
    }

    #[test]
    fn other_seasons_draw_twenty_leaves() {
        for season in [Season::Spring, Season::Summer, Season::Autumn] {
            let art = falling_art_for(season);
            assert_eq!(art.len(), 20);
            assert!(art.iter().all(|a| *a == FallingArt::Glyph(LEAF_GLYPH)));
        }
    }
}
