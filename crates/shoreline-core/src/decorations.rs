//! Randomized placement of the decorative background elements.
//!
//! A fresh [`DecorationSet`] is drawn on every render, so two renders never
//! share a layout unless the generator was seeded. All ranges are
//! closed-open.
//!
//! | Element | Count | Placement |
//! |---------|-------|-----------|
//! | Falling (snow / leaf) | 20 | left 0-100%, delay 0-10s, fall 7-10s, size 0.4-1.2rem |
//! | Bird | 3 | top 10-40%, delay 0-5s, flight 15-20s, first bird 1.5x |
//! | Small cloud | 4 | top 10-50%, left 5-25%, delay 0-3s |
//! | Large cloud | 3 | top 20-70%, left 5-30%, delay 0-4s |

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::season::Season;
use crate::theme::Theme;

pub const FALLING_COUNT: usize = 20;
pub const BIRD_COUNT: usize = 3;
pub const SMALL_CLOUD_COUNT: usize = 4;
pub const LARGE_CLOUD_COUNT: usize = 3;

pub const FALLING_LEFT_PCT: Range<f64> = 0.0..100.0;
pub const FALLING_DELAY_S: Range<f64> = 0.0..10.0;
pub const FALLING_DURATION_S: Range<f64> = 7.0..10.0;
pub const FALLING_SIZE_REM: Range<f64> = 0.4..1.2;

pub const BIRD_TOP_PCT: Range<f64> = 10.0..40.0;
pub const BIRD_DELAY_S: Range<f64> = 0.0..5.0;
pub const BIRD_DURATION_S: Range<f64> = 15.0..20.0;
pub const LEAD_BIRD_SCALE: f64 = 1.5;
pub const BIRD_SCALE: f64 = 1.0;

pub const SMALL_CLOUD_TOP_PCT: Range<f64> = 10.0..50.0;
pub const SMALL_CLOUD_LEFT_PCT: Range<f64> = 5.0..25.0;
pub const SMALL_CLOUD_DELAY_S: Range<f64> = 0.0..3.0;

pub const LARGE_CLOUD_TOP_PCT: Range<f64> = 20.0..70.0;
pub const LARGE_CLOUD_LEFT_PCT: Range<f64> = 5.0..30.0;
pub const LARGE_CLOUD_DELAY_S: Range<f64> = 0.0..4.0;

/// Kind of a decorative element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    Snow,
    Leaf,
    CloudSmall,
    CloudLarge,
    Bird,
}

impl DecorationKind {
    /// Kind of the falling elements for a season.
    pub fn falling_for(season: Season) -> Self {
        if season.is_winter() {
            DecorationKind::Snow
        } else {
            DecorationKind::Leaf
        }
    }

    /// Wrapper CSS class of the element.
    pub fn css_class(&self) -> &'static str {
        match self {
            DecorationKind::Snow | DecorationKind::Leaf => "falling-element",
            DecorationKind::CloudSmall => "cloud-small",
            DecorationKind::CloudLarge => "cloud-large",
            DecorationKind::Bird => "bird",
        }
    }

    /// Alt text for the element's image.
    pub fn alt_text(&self) -> &'static str {
        match self {
            DecorationKind::Snow => "snowflake",
            DecorationKind::Leaf => "leaf",
            DecorationKind::CloudSmall => "small cloud",
            DecorationKind::CloudLarge => "large cloud",
            DecorationKind::Bird => "flying bird",
        }
    }
}

/// Which cloud artwork to show.
///
/// Small clouds use the alternate shape, large clouds the plain one; the
/// theme picks the colour variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CloudAsset {
    Alt,
    AltDark,
    Plain,
    PlainDark,
}

impl CloudAsset {
    pub fn select(kind: DecorationKind, theme: Theme) -> Self {
        match (kind, theme.is_dark()) {
            (DecorationKind::CloudSmall, false) => CloudAsset::Alt,
            (DecorationKind::CloudSmall, true) => CloudAsset::AltDark,
            (_, false) => CloudAsset::Plain,
            (_, true) => CloudAsset::PlainDark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, CloudAsset::AltDark | CloudAsset::PlainDark)
    }
}

/// A snowflake or leaf drifting down the page.
#[derive(Clone, Debug, PartialEq)]
pub struct FallingElement {
    pub kind: DecorationKind,
    pub left_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub size_rem: f64,
}

impl FallingElement {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s; font-size: {:.2}rem;",
            self.left_pct, self.delay_s, self.duration_s, self.size_rem
        )
    }
}

/// A bird crossing the sky.
#[derive(Clone, Debug, PartialEq)]
pub struct Bird {
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub scale: f64,
}

impl Bird {
    pub fn kind(&self) -> DecorationKind {
        DecorationKind::Bird
    }

    pub fn style(&self) -> String {
        format!(
            "top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s; transform: scale({});",
            self.top_pct, self.delay_s, self.duration_s, self.scale
        )
    }
}

/// A drifting cloud; the animation duration comes from the stylesheet.
#[derive(Clone, Debug, PartialEq)]
pub struct Cloud {
    pub kind: DecorationKind,
    pub top_pct: f64,
    pub left_pct: f64,
    pub delay_s: f64,
    pub asset: CloudAsset,
}

impl Cloud {
    pub fn style(&self) -> String {
        format!(
            "top: {:.2}%; left: {:.2}%; animation-delay: {:.2}s;",
            self.top_pct, self.left_pct, self.delay_s
        )
    }
}

/// Everything drawn behind the page content for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct DecorationSet {
    pub falling: Vec<FallingElement>,
    pub birds: Vec<Bird>,
    /// Small clouds first, then large ones.
    pub clouds: Vec<Cloud>,
}

impl DecorationSet {
    pub fn small_clouds(&self) -> impl Iterator<Item = &Cloud> {
        self.clouds.iter().filter(|c| c.kind == DecorationKind::CloudSmall)
    }

    pub fn large_clouds(&self) -> impl Iterator<Item = &Cloud> {
        self.clouds.iter().filter(|c| c.kind == DecorationKind::CloudLarge)
    }
}

/// Draws decoration layouts from a random source.
///
/// Generic over the RNG so tests and seeded hosts get reproducible layouts.
pub struct DecorationGenerator<R = StdRng> {
    rng: R,
}

impl DecorationGenerator<StdRng> {
    /// Generator seeded from the OS, a different layout every run.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Generator with a fixed seed, the same sequence of layouts every run.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Seeded if a seed is configured, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> DecorationGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a complete layout for the given season and theme.
    pub fn generate(&mut self, season: Season, theme: Theme) -> DecorationSet {
        DecorationSet {
            falling: self.falling(season),
            birds: self.birds(),
            clouds: self.clouds(theme),
        }
    }

    pub fn falling(&mut self, season: Season) -> Vec<FallingElement> {
        let kind = DecorationKind::falling_for(season);
        (0..FALLING_COUNT)
            .map(|_| FallingElement {
                kind,
                left_pct: self.rng.random_range(FALLING_LEFT_PCT),
                delay_s: self.rng.random_range(FALLING_DELAY_S),
                duration_s: self.rng.random_range(FALLING_DURATION_S),
                size_rem: self.rng.random_range(FALLING_SIZE_REM),
            })
            .collect()
    }

    pub fn birds(&mut self) -> Vec<Bird> {
        (0..BIRD_COUNT)
            .map(|i| Bird {
                top_pct: self.rng.random_range(BIRD_TOP_PCT),
                delay_s: self.rng.random_range(BIRD_DELAY_S),
                duration_s: self.rng.random_range(BIRD_DURATION_S),
                scale: if i == 0 { LEAD_BIRD_SCALE } else { BIRD_SCALE },
            })
            .collect()
    }

    pub fn clouds(&mut self, theme: Theme) -> Vec<Cloud> {
        let small_asset = CloudAsset::select(DecorationKind::CloudSmall, theme);
        let large_asset = CloudAsset::select(DecorationKind::CloudLarge, theme);

        let mut clouds = Vec::with_capacity(SMALL_CLOUD_COUNT + LARGE_CLOUD_COUNT);
        for _ in 0..SMALL_CLOUD_COUNT {
            clouds.push(Cloud {
                kind: DecorationKind::CloudSmall,
                top_pct: self.rng.random_range(SMALL_CLOUD_TOP_PCT),
                left_pct: self.rng.random_range(SMALL_CLOUD_LEFT_PCT),
                delay_s: self.rng.random_range(SMALL_CLOUD_DELAY_S),
                asset: small_asset,
            });
        }
        for _ in 0..LARGE_CLOUD_COUNT {
            clouds.push(Cloud {
                kind: DecorationKind::CloudLarge,
                top_pct: self.rng.random_range(LARGE_CLOUD_TOP_PCT),
                left_pct: self.rng.random_range(LARGE_CLOUD_LEFT_PCT),
                delay_s: self.rng.random_range(LARGE_CLOUD_DELAY_S),
                asset: large_asset,
            });
        }
        clouds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_counts() {
        let mut generator = DecorationGenerator::seeded(7);
        let set = generator.generate(Season::Spring, Theme::Light);
        assert_eq!(set.falling.len(), FALLING_COUNT);
        assert_eq!(set.birds.len(), BIRD_COUNT);
        assert_eq!(set.clouds.len(), 7);
        assert_eq!(set.small_clouds().count(), 4);
        assert_eq!(set.large_clouds().count(), 3);
    }

    #[test]
    fn test_only_first_bird_is_large() {
        let mut generator = DecorationGenerator::seeded(1);
        let birds = generator.birds();
        assert_eq!(birds[0].scale, LEAD_BIRD_SCALE);
        assert!(birds[1..].iter().all(|b| b.scale == BIRD_SCALE));
    }

    #[test]
    fn test_falling_kind_follows_season() {
        let mut generator = DecorationGenerator::seeded(3);
        assert!(generator
            .falling(Season::Winter)
            .iter()
            .all(|f| f.kind == DecorationKind::Snow));
        for season in [Season::Spring, Season::Summer, Season::Autumn] {
            assert!(generator
                .falling(season)
                .iter()
                .all(|f| f.kind == DecorationKind::Leaf));
        }
    }

    #[test]
    fn test_cloud_assets_follow_theme() {
        let mut generator = DecorationGenerator::seeded(5);

        let light = generator.clouds(Theme::Light);
        assert!(light[..4].iter().all(|c| c.asset == CloudAsset::Alt));
        assert!(light[4..].iter().all(|c| c.asset == CloudAsset::Plain));

        let dark = generator.clouds(Theme::Dark);
        assert!(dark[..4].iter().all(|c| c.asset == CloudAsset::AltDark));
        assert!(dark[4..].iter().all(|c| c.asset == CloudAsset::PlainDark));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = DecorationGenerator::seeded(42).generate(Season::Summer, Theme::Dark);
        let b = DecorationGenerator::seeded(42).generate(Season::Summer, Theme::Dark);
        assert_eq!(a, b);
    }

    #[test]
    fn test_consecutive_renders_differ() {
        let mut generator = DecorationGenerator::seeded(42);
        let first = generator.generate(Season::Summer, Theme::Light);
        let second = generator.generate(Season::Summer, Theme::Light);
        assert_ne!(first, second);
    }

    #[test]
    fn test_style_strings() {
        let bird = Bird {
            top_pct: 12.5,
            delay_s: 1.0,
            duration_s: 16.25,
            scale: 1.5,
        };
        assert_eq!(
            bird.style(),
            "top: 12.50%; animation-delay: 1.00s; animation-duration: 16.25s; transform: scale(1.5);"
        );

        let cloud = Cloud {
            kind: DecorationKind::CloudLarge,
            top_pct: 20.0,
            left_pct: 5.5,
            delay_s: 0.25,
            asset: CloudAsset::Plain,
        };
        assert_eq!(cloud.style(), "top: 20.00%; left: 5.50%; animation-delay: 0.25s;");
        assert_eq!(cloud.kind.alt_text(), "large cloud");
    }
}
