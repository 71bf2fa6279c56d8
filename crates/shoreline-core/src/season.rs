//! Meteorological season from the local month.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ambient::Clock;

/// One of the four seasons, by whole months.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Dec, Jan, Feb
    #[default]
    Winter,
    /// Mar, Apr, May
    Spring,
    /// Jun, Jul, Aug
    Summer,
    /// Sep, Oct, Nov
    Autumn,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Autumn];

    /// Map a zero-based month (January = 0) to its season.
    pub fn from_month0(month0: u32) -> Self {
        match month0 {
            2..=4 => Season::Spring,
            5..=7 => Season::Summer,
            8..=10 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    /// Read the season once from the clock, falling back to winter.
    pub fn resolve(clock: &dyn Clock) -> Self {
        match clock.month0() {
            Ok(month0) => Season::from_month0(month0),
            Err(e) => {
                tracing::warn!("Clock unavailable for season detection, assuming winter: {}", e);
                Season::Winter
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        }
    }

    pub fn is_winter(&self) -> bool {
        matches!(self, Season::Winter)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambient::FixedClock;

    #[test]
    fn test_month_buckets() {
        let expected = [
            Season::Winter,
            Season::Winter,
            Season::Spring,
            Season::Spring,
            Season::Spring,
            Season::Summer,
            Season::Summer,
            Season::Summer,
            Season::Autumn,
            Season::Autumn,
            Season::Autumn,
            Season::Winter,
        ];
        for (month0, season) in expected.iter().enumerate() {
            assert_eq!(Season::from_month0(month0 as u32), *season, "month0 {}", month0);
        }
    }

    #[test]
    fn test_resolve_from_clock() {
        let june = FixedClock::at(14, 6).unwrap();
        assert_eq!(Season::resolve(&june), Season::Summer);

        let december = FixedClock::at(22, 12).unwrap();
        assert_eq!(Season::resolve(&december), Season::Winter);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Season::Autumn).unwrap();
        assert_eq!(json, "\"autumn\"");
        assert_eq!(Season::Autumn.to_string(), "autumn");
    }
}
