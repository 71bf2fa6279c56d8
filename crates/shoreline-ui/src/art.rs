//! Inline SVG artwork for the decorative layers.
//!
//! Rendered through `dangerous_inner_html`, so every string here must be a
//! self-contained `<svg>` element.

use shoreline_core::{CloudAsset, DecorationKind};

/// Leaf glyph for the falling layer outside winter.
pub const LEAF_GLYPH: &str = "\u{1F343}";

pub const SNOWFLAKE_SVG: &str = r##"<svg viewBox="0 0 24 24" fill="none" stroke="#e0f2fe" stroke-width="1.5" stroke-linecap="round" xmlns="http://www.w3.org/2000/svg"><path d="M12 2v20M2 12h20M4.9 4.9l14.2 14.2M19.1 4.9 4.9 19.1"/><path d="M9 4l3 2 3-2M9 20l3-2 3 2M4 9l2 3-2 3M20 9l-2 3 2 3"/></svg>"##;

/// Bird silhouette; the wing beat comes from the `bird-wings` animation.
pub const BIRD_SVG: &str = r##"<svg viewBox="0 0 32 32" xmlns="http://www.w3.org/2000/svg"><g class="bird-wings" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round"><path d="M2 14c4-4 9-4 14 2"/><path d="M30 14c-4-4-9-4-14 2"/></g></svg>"##;

const CLOUD_ALT_SVG: &str = r##"<svg viewBox="0 0 48 32" xmlns="http://www.w3.org/2000/svg"><path fill="#ffffff" d="M12 28a8 8 0 0 1-1-15.9A11 11 0 0 1 32 9a8 8 0 0 1 9 7.5A6 6 0 0 1 40 28Z"/></svg>"##;

const CLOUD_ALT_DARK_SVG: &str = r##"<svg viewBox="0 0 48 32" xmlns="http://www.w3.org/2000/svg"><path fill="#475569" d="M12 28a8 8 0 0 1-1-15.9A11 11 0 0 1 32 9a8 8 0 0 1 9 7.5A6 6 0 0 1 40 28Z"/></svg>"##;

const CLOUD_SVG: &str = r##"<svg viewBox="0 0 80 48" xmlns="http://www.w3.org/2000/svg"><path fill="#ffffff" d="M18 44a14 14 0 0 1-2-27.8A18 18 0 0 1 50 12a13 13 0 0 1 14 12 10 10 0 0 1-1 20Z"/></svg>"##;

const CLOUD_DARK_SVG: &str = r##"<svg viewBox="0 0 80 48" xmlns="http://www.w3.org/2000/svg"><path fill="#334155" d="M18 44a14 14 0 0 1-2-27.8A18 18 0 0 1 50 12a13 13 0 0 1 14 12 10 10 0 0 1-1 20Z"/></svg>"##;

/// Markup for a cloud variant.
pub fn cloud_svg(asset: CloudAsset) -> &'static str {
    match asset {
        CloudAsset::Alt => CLOUD_ALT_SVG,
        CloudAsset::AltDark => CLOUD_ALT_DARK_SVG,
        CloudAsset::Plain => CLOUD_SVG,
        CloudAsset::PlainDark => CLOUD_DARK_SVG,
    }
}

/// How a falling element is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallingArt {
    /// Inline SVG markup
    Svg(&'static str),
    /// A text glyph
    Glyph(&'static str),
}

/// Artwork for a falling element: a snowflake in winter, a leaf otherwise.
pub fn falling_art(kind: DecorationKind) -> FallingArt {
    match kind {
        DecorationKind::Snow => FallingArt::Svg(SNOWFLAKE_SVG),
        _ => FallingArt::Glyph(LEAF_GLYPH),
    }
}
