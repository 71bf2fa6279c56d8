//! View configuration.
//!
//! Loaded from an optional JSON file, then overlaid with command line flags
//! by the host. Every field is optional in the file:
//!
//! ```json
//! {
//!   "seed": 42,
//!   "fixed_hour": 22,
//!   "fixed_month": 12,
//!   "prefers_dark": false,
//!   "rotation_period_ms": 2000
//! }
//! ```

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ambient::{PinnedClock, SharedClock, SystemClock};
use crate::error::{Result, ViewError};
use crate::roles::ROTATION_PERIOD;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Seed for decoration placement; random every render sequence if unset.
    pub seed: Option<u64>,
    /// Pin the local hour (0-23).
    pub fixed_hour: Option<u32>,
    /// Pin the local month (1-12).
    pub fixed_month: Option<u32>,
    /// Replace the OS colour scheme preference.
    pub prefers_dark: Option<bool>,
    pub rotation_period_ms: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            seed: None,
            fixed_hour: None,
            fixed_month: None,
            prefers_dark: None,
            rotation_period_ms: ROTATION_PERIOD.as_millis() as u64,
        }
    }
}

impl ViewConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: ViewConfig = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded view config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(hour) = self.fixed_hour {
            if hour >= 24 {
                return Err(ViewError::InvalidHour(hour));
            }
        }
        if let Some(month) = self.fixed_month {
            if !(1..=12).contains(&month) {
                return Err(ViewError::InvalidConfig(format!(
                    "fixed_month must be 1-12, got {}",
                    month
                )));
            }
        }
        if self.rotation_period_ms == 0 {
            return Err(ViewError::InvalidConfig(
                "rotation_period_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Replace fields with any value set in `overrides`.
    pub fn overlay(mut self, overrides: ConfigOverrides) -> Self {
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.fixed_hour.is_some() {
            self.fixed_hour = overrides.fixed_hour;
        }
        if overrides.fixed_month.is_some() {
            self.fixed_month = overrides.fixed_month;
        }
        if overrides.prefers_dark.is_some() {
            self.prefers_dark = overrides.prefers_dark;
        }
        if let Some(ms) = overrides.rotation_period_ms {
            self.rotation_period_ms = ms;
        }
        self
    }

    pub fn rotation_period(&self) -> Duration {
        Duration::from_millis(self.rotation_period_ms)
    }

    /// The system clock, with any pinned fields applied.
    pub fn clock(&self) -> SharedClock {
        let system: SharedClock = Arc::new(SystemClock);
        if self.fixed_hour.is_none() && self.fixed_month.is_none() {
            return system;
        }
        let month0 = self.fixed_month.and_then(|m| m.checked_sub(1));
        Arc::new(PinnedClock::new(system, self.fixed_hour, month0))
    }
}

/// Values supplied on the command line, all optional.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub seed: Option<u64>,
    pub fixed_hour: Option<u32>,
    pub fixed_month: Option<u32>,
    pub prefers_dark: Option<bool>,
    pub rotation_period_ms: Option<u64>,
}
