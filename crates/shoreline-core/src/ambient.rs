//! Ambient signals the view reads but does not own.
//!
//! Only the wall clock is modelled as a trait here. The colour scheme
//! preference arrives as an `Option<bool>` pushed by the host (`None` when the
//! host cannot answer), see [`crate::runtime::ViewHandle::set_preference`].

use std::sync::Arc;

use chrono::{Datelike, Local, Timelike};

use crate::error::{Result, ViewError};

/// The two clock readings the view cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalMoment {
    /// Local hour in [0, 24)
    pub hour: u32,
    /// Zero-based local month in [0, 12) (January = 0)
    pub month0: u32,
}

impl LocalMoment {
    /// Build a moment, rejecting out-of-range values.
    pub fn new(hour: u32, month0: u32) -> Result<Self> {
        if hour >= 24 {
            return Err(ViewError::InvalidHour(hour));
        }
        if month0 >= 12 {
            return Err(ViewError::InvalidMonth(month0));
        }
        Ok(Self { hour, month0 })
    }
}

/// Source of local wall-clock time.
pub trait Clock: Send + Sync {
    /// Read the current local hour and month.
    fn now(&self) -> Result<LocalMoment>;

    /// Read only the local hour.
    fn hour(&self) -> Result<u32> {
        self.now().map(|moment| moment.hour)
    }

    /// Read only the zero-based local month.
    fn month0(&self) -> Result<u32> {
        self.now().map(|moment| moment.month0)
    }
}

/// Shared clock handle passed into the runtime.
pub type SharedClock = Arc<dyn Clock>;

/// The system clock in the local timezone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<LocalMoment> {
        let now = Local::now();
        LocalMoment::new(now.hour(), now.month0())
    }
}

/// A clock pinned to one moment.
///
/// Used when the host pins `--hour`/`--month`, and in tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock {
    moment: LocalMoment,
}

impl FixedClock {
    pub fn new(moment: LocalMoment) -> Self {
        Self { moment }
    }

    /// Convenience constructor from a 24h hour and a one-based month.
    pub fn at(hour: u32, month: u32) -> Result<Self> {
        let month0 = month.checked_sub(1).ok_or(ViewError::InvalidMonth(month))?;
        Ok(Self::new(LocalMoment::new(hour, month0)?))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Result<LocalMoment> {
        Ok(self.moment)
    }
}

/// A clock with the hour and/or month pinned, reading the rest from `base`.
///
/// Each field is read independently: a pinned hour still answers
/// [`Clock::hour`] when `base` is unreadable.
pub struct PinnedClock {
    base: SharedClock,
    hour: Option<u32>,
    month0: Option<u32>,
}

impl PinnedClock {
    pub fn new(base: SharedClock, hour: Option<u32>, month0: Option<u32>) -> Self {
        Self { base, hour, month0 }
    }
}

impl Clock for PinnedClock {
    fn now(&self) -> Result<LocalMoment> {
        LocalMoment::new(self.hour()?, self.month0()?)
    }

    fn hour(&self) -> Result<u32> {
        match self.hour {
            Some(hour) => Ok(hour),
            None => self.base.hour(),
        }
    }

    fn month0(&self) -> Result<u32> {
        match self.month0 {
            Some(month0) => Ok(month0),
            None => self.base.month0(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moment_bounds() {
        assert!(LocalMoment::new(0, 0).is_ok());
        assert!(LocalMoment::new(23, 11).is_ok());
        assert!(matches!(LocalMoment::new(24, 0), Err(ViewError::InvalidHour(24))));
        assert!(matches!(LocalMoment::new(0, 12), Err(ViewError::InvalidMonth(12))));
    }

    #[test]
    fn test_fixed_clock_one_based_month() {
        let clock = FixedClock::at(14, 6).unwrap();
        let now = clock.now().unwrap();
        assert_eq!(now.hour, 14);
        assert_eq!(now.month0, 5);

        assert!(FixedClock::at(14, 0).is_err());
        assert!(FixedClock::at(14, 13).is_err());
    }

    #[test]
    fn test_system_clock_in_range() {
        let now = SystemClock.now().unwrap();
        assert!(now.hour < 24);
        assert!(now.month0 < 12);
    }

    struct BrokenClock;

    impl Clock for BrokenClock {
        fn now(&self) -> Result<LocalMoment> {
            Err(ViewError::ClockUnavailable("broken".to_string()))
        }
    }

    #[test]
    fn test_pinned_clock_overrides_fields() {
        let base: SharedClock = Arc::new(FixedClock::at(9, 3).unwrap());

        let hour_only = PinnedClock::new(base.clone(), Some(22), None);
        assert_eq!(hour_only.now().unwrap(), LocalMoment { hour: 22, month0: 2 });

        let month_only = PinnedClock::new(base, None, Some(11));
        assert_eq!(month_only.now().unwrap(), LocalMoment { hour: 9, month0: 11 });
    }

    #[test]
    fn test_fully_pinned_clock_ignores_broken_base() {
        let pinned = PinnedClock::new(Arc::new(BrokenClock), Some(14), Some(5));
        assert_eq!(pinned.now().unwrap(), LocalMoment { hour: 14, month0: 5 });

        let partial = PinnedClock::new(Arc::new(BrokenClock), Some(14), None);
        assert!(matches!(partial.now(), Err(ViewError::ClockUnavailable(_))));
    }

    #[test]
    fn test_pinned_field_survives_broken_base() {
        let hour_only = PinnedClock::new(Arc::new(BrokenClock), Some(22), None);
        assert_eq!(hour_only.hour().unwrap(), 22);
        assert!(matches!(hour_only.month0(), Err(ViewError::ClockUnavailable(_))));

        let month_only = PinnedClock::new(Arc::new(BrokenClock), None, Some(6));
        assert!(matches!(month_only.hour(), Err(ViewError::ClockUnavailable(_))));
        assert_eq!(month_only.month0().unwrap(), 6);
    }
}
