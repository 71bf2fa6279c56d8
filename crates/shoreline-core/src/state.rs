//! The single state object owned by one mounted view.

use serde::Serialize;

use crate::ambient::Clock;
use crate::roles::RoleRotator;
use crate::season::Season;
use crate::theme::{resolve_theme, Theme};

/// Theme flag, role index and season for one mount.
///
/// Mutated only through the methods below: mount-time detection, preference
/// changes, timer ticks and manual toggles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    theme: Theme,
    roles: RoleRotator,
    season: Season,
}

impl ViewState {
    /// Resolve the theme and season from the ambient signals.
    ///
    /// The season is read here and never again for the life of the view.
    pub fn mount(clock: &dyn Clock, prefers_dark: Option<bool>) -> Self {
        let state = Self {
            theme: resolve_theme(clock, prefers_dark),
            roles: RoleRotator::new(),
            season: Season::resolve(clock),
        };
        tracing::info!(
            theme = state.theme.css_class(),
            season = state.season.name(),
            "View state mounted"
        );
        state
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn role_index(&self) -> usize {
        self.roles.index()
    }

    pub fn role(&self) -> &'static str {
        self.roles.current()
    }

    /// Re-run theme detection after the OS preference changed.
    ///
    /// This replaces any earlier manual toggle.
    pub fn on_preference_changed(&mut self, clock: &dyn Clock, prefers_dark: Option<bool>) {
        self.theme = resolve_theme(clock, prefers_dark);
    }

    /// Invert the theme by hand.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = self.theme.css_class(), "Theme toggled");
        self.theme
    }

    /// Advance the role title by one.
    pub fn tick_role(&mut self) -> usize {
        self.roles.advance()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            is_dark: self.is_dark(),
            role_index: self.role_index(),
            role: self.role(),
            season: self.season,
        }
    }
}

/// Immutable copy of the view state handed to the host for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    pub is_dark: bool,
    pub role_index: usize,
    pub role: &'static str,
    pub season: Season,
}

impl ViewSnapshot {
    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.is_dark)
    }
}

impl Default for ViewSnapshot {
    fn default() -> Self {
        ViewState::default().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambient::FixedClock;

    #[test]
    fn test_afternoon_in_june() {
        let clock = FixedClock::at(14, 6).unwrap();
        let state = ViewState::mount(&clock, Some(false));
        assert!(!state.is_dark());
        assert_eq!(state.season(), Season::Summer);
        assert_eq!(state.role_index(), 0);
    }

    #[test]
    fn test_night_in_december() {
        let clock = FixedClock::at(22, 12).unwrap();
        let state = ViewState::mount(&clock, Some(false));
        assert!(state.is_dark());
        assert_eq!(state.season(), Season::Winter);
    }

    #[test]
    fn test_toggle_flips_once_per_call() {
        let clock = FixedClock::at(14, 6).unwrap();
        let mut state = ViewState::mount(&clock, Some(false));
        assert_eq!(state.toggle_theme(), Theme::Dark);
        assert!(state.is_dark());
        assert_eq!(state.toggle_theme(), Theme::Light);
        assert!(!state.is_dark());
    }

    #[test]
    fn test_preference_change_replaces_manual_toggle() {
        let clock = FixedClock::at(14, 6).unwrap();
        let mut state = ViewState::mount(&clock, Some(false));
        state.toggle_theme();
        assert!(state.is_dark());

        state.on_preference_changed(&clock, Some(false));
        assert!(!state.is_dark());

        state.on_preference_changed(&clock, Some(true));
        assert!(state.is_dark());
    }

    #[test]
    fn test_snapshot_tracks_role() {
        let mut state = ViewState::default();
        state.tick_role();
        let snap = state.snapshot();
        assert_eq!(snap.role_index, 1);
        assert_eq!(snap.role, "Cook");
        assert_eq!(snap.season, Season::Winter);
        assert_eq!(snap.theme(), Theme::Light);
    }
}
