//! Sea Waves Component
//!
//! Five stacked wave silhouettes along the bottom of the page. Farther waves
//! are fainter; each one bobs on its own CSS animation (`wave-1` .. `wave-5`).

use dioxus::prelude::*;

/// One wave band: fill colour and path in a 1200x320 viewBox.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    pub fill: &'static str,
    pub path: &'static str,
}

/// Waves from farthest to nearest.
pub const WAVES: [Wave; 5] = [
    Wave {
        fill: "rgba(59, 130, 246, 0.2)",
        path: "M0,96L48,112C96,128,192,160,288,160C384,160,480,128,576,122.7C672,117,768,139,864,149.3C960,160,1056,160,1152,149.3L1200,139L1200,320L1152,320C1056,320,960,320,864,320C768,320,672,320,576,320C480,320,384,320,288,320C192,320,96,320,48,320L0,320Z",
    },
    Wave {
        fill: "rgba(59, 130, 246, 0.3)",
        path: "M0,192L48,197.3C96,203,192,213,288,208C384,203,480,181,576,170.7C672,160,768,160,864,165.3C960,171,1056,181,1152,181.3L1200,181L1200,320L1152,320C1056,320,960,320,864,320C768,320,672,320,576,320C480,320,384,320,288,320C192,320,96,320,48,320L0,320Z",
    },
    Wave {
        fill: "rgba(59, 130, 246, 0.4)",
        path: "M0,256L48,240C96,224,192,192,288,181.3C384,171,480,181,576,197.3C672,213,768,235,864,224C960,213,1056,171,1152,154.7L1200,139L1200,320L1152,320C1056,320,960,320,864,320C768,320,672,320,576,320C480,320,384,320,288,320C192,320,96,320,48,320L0,320Z",
    },
    Wave {
        fill: "rgba(147, 197, 253, 0.6)",
        path: "M0,288L48,277.3C96,267,192,245,288,245.3C384,245,480,267,576,272C672,277,768,267,864,250.7C960,235,1056,213,1152,208C1200,203,1200,213,1200,218.7L1200,224L1200,320L1152,320C1056,320,960,320,864,320C768,320,672,320,576,320C480,320,384,320,288,320C192,320,96,320,48,320L0,320Z",
    },
    Wave {
        fill: "rgba(147, 197, 253, 0.8)",
        path: "M0,224L48,229.3C96,235,192,245,288,240C384,235,480,213,576,202.7C672,192,768,192,864,197.3C960,203,1056,213,1152,213.3L1200,213L1200,320L1152,320C1056,320,960,320,864,320C768,320,672,320,576,320C480,320,384,320,288,320C192,320,96,320,48,320L0,320Z",
    },
];

/// Renders the wave stack as inline SVG
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     div { class: "app-container",
///         SeaWaves {}
///     }
/// }
/// ```
#[component]
pub fn SeaWaves() -> Element {
    rsx! {
        div { class: "sea-waves", "aria-hidden": "true",
            for (n, wave) in (1..).zip(WAVES.iter()) {
                svg {
                    key: "{n}",
                    view_box: "0 0 1200 320",
                    class: "wave wave-{n}",
                    preserve_aspect_ratio: "none",
                    path { fill: "{wave.fill}", d: "{wave.path}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waves_get_more_opaque_towards_the_front() {
        let alpha = |fill: &str| -> f32 {
            fill.trim_end_matches(')')
                .rsplit(',')
                .next()
                .unwrap()
                .trim()
                .parse()
                .unwrap()
        };
        let alphas: Vec<f32> = WAVES.iter().map(|w| alpha(w.fill)).collect();
        assert_eq!(alphas, vec![0.2, 0.3, 0.4, 0.6, 0.8]);
    }

    #[test]
    fn every_wave_closes_at_the_bottom() {
        for wave in WAVES.iter() {
            assert!(wave.path.starts_with("M0,"));
            assert!(wave.path.ends_with("L0,320Z"));
        }
    }
}
