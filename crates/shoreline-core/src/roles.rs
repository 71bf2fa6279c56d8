//! Rotating role title ("I'm a Developer", "I'm a Cook", ...).

use std::time::Duration;

/// Role titles, shown in this order.
pub const ROLES: [&str; 4] = ["Developer", "Cook", "Designer", "Creator"];

/// Default time each role stays on screen.
pub const ROTATION_PERIOD: Duration = Duration::from_millis(2000);

/// Index into [`ROLES`] that advances by one per tick and wraps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoleRotator {
    index: usize,
}

impl RoleRotator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The role currently displayed.
    pub fn current(&self) -> &'static str {
        ROLES[self.index]
    }

    /// Move to the next role, returning the new index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % ROLES.len();
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_role() {
        let rotator = RoleRotator::new();
        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.current(), "Developer");
    }

    #[test]
    fn test_wraps_after_last_role() {
        let mut rotator = RoleRotator::new();
        assert_eq!(rotator.advance(), 1);
        assert_eq!(rotator.advance(), 2);
        assert_eq!(rotator.advance(), 3);
        assert_eq!(rotator.current(), "Creator");
        assert_eq!(rotator.advance(), 0);
        assert_eq!(rotator.current(), "Developer");
    }

    #[test]
    fn test_five_ticks_lands_on_second_role() {
        let mut rotator = RoleRotator::new();
        for _ in 0..5 {
            rotator.advance();
        }
        assert_eq!(rotator.index(), 1);
        assert_eq!(rotator.current(), "Cook");
    }

    #[test]
    fn test_default_period() {
        assert_eq!(ROTATION_PERIOD.as_millis(), 2000);
    }
}
