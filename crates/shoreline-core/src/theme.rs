//! Light/dark theme resolution.
//!
//! The page is dark when the OS prefers dark *or* it is night locally.
//! Night is any hour before 06:00 or after 18:59.

use crate::ambient::Clock;

/// First hour that is no longer night.
pub const DAWN_HOUR: u32 = 6;

/// Last hour that is still day; anything later is night.
pub const DUSK_HOUR: u32 = 18;

/// Visual theme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// The opposite theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Document-level marker class read by the stylesheet.
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Glyph shown on the toggle: the sun offers a way out of dark mode.
    pub fn toggle_glyph(&self) -> &'static str {
        match self {
            Theme::Light => "\u{263E}",
            Theme::Dark => "\u{2600}",
        }
    }

    /// Accessible label for the toggle.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark theme",
            Theme::Dark => "Switch to light theme",
        }
    }
}

/// Whether `hour` (0-23) counts as night.
pub fn is_night_time(hour: u32) -> bool {
    hour < DAWN_HOUR || hour > DUSK_HOUR
}

/// Combine the OS preference and the local hour into a theme.
///
/// Each unavailable signal counts as "not dark", so a host with neither
/// ends up light.
pub fn resolve_theme(clock: &dyn Clock, prefers_dark: Option<bool>) -> Theme {
    let night = match clock.hour() {
        Ok(hour) => is_night_time(hour),
        Err(e) => {
            tracing::warn!("Clock unavailable for theme detection, assuming day: {}", e);
            false
        }
    };

    let system_dark = prefers_dark.unwrap_or_else(|| {
        tracing::debug!("No colour scheme preference reported, assuming light");
        false
    });

    let theme = Theme::from_dark(system_dark || night);
    tracing::debug!(system_dark, night, theme = theme.css_class(), "Theme resolved");
    theme
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambient::FixedClock;

    #[test]
    fn test_night_boundaries() {
        assert!(is_night_time(0));
        assert!(is_night_time(5));
        assert!(!is_night_time(6));
        assert!(!is_night_time(18));
        assert!(is_night_time(19));
        assert!(is_night_time(23));
    }

    #[test]
    fn test_resolve_day_light_preference() {
        let clock = FixedClock::at(14, 6).unwrap();
        assert_eq!(resolve_theme(&clock, Some(false)), Theme::Light);
    }

    #[test]
    fn test_resolve_night_overrides_light_preference() {
        let clock = FixedClock::at(22, 12).unwrap();
        assert_eq!(resolve_theme(&clock, Some(false)), Theme::Dark);
    }

    #[test]
    fn test_resolve_dark_preference_during_day() {
        let clock = FixedClock::at(12, 3).unwrap();
        assert_eq!(resolve_theme(&clock, Some(true)), Theme::Dark);
    }

    #[test]
    fn test_missing_preference_counts_as_light() {
        let clock = FixedClock::at(12, 3).unwrap();
        assert_eq!(resolve_theme(&clock, None), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_restores() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_css_class_and_glyph() {
        assert_eq!(Theme::Dark.css_class(), "dark");
        assert_eq!(Theme::Light.css_class(), "light");
        assert_eq!(Theme::Dark.toggle_glyph(), "\u{2600}");
        assert_eq!(Theme::default(), Theme::Light);
    }
}
