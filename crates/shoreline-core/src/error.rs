//! Error types for Shoreline

use thiserror::Error;

/// Main error type for Shoreline view operations.
///
/// None of these ever reach the rendered page: ambient failures degrade to
/// light theme and winter season, config failures fall back to defaults.
#[derive(Error, Debug)]
pub enum ViewError {
    /// The local wall clock could not be read
    #[error("Clock unavailable: {0}")]
    ClockUnavailable(String),

    /// The OS colour scheme preference could not be queried
    #[error("Colour scheme preference unavailable: {0}")]
    PreferenceUnavailable(String),

    /// Hour outside [0, 24)
    #[error("Invalid hour: {0} (expected 0-23)")]
    InvalidHour(u32),

    /// Zero-based month outside [0, 12)
    #[error("Invalid month index: {0} (expected 0-11)")]
    InvalidMonth(u32),

    /// Configuration value rejected by validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using ViewError
pub type Result<T> = std::result::Result<T, ViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ViewError::InvalidHour(25);
        assert_eq!(err.to_string(), "Invalid hour: 25 (expected 0-23)");

        let err = ViewError::ClockUnavailable("no tz database".to_string());
        assert_eq!(err.to_string(), "Clock unavailable: no tz database");

        let err = ViewError::PreferenceUnavailable("eval closed".to_string());
        assert_eq!(err.to_string(), "Colour scheme preference unavailable: eval closed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ViewError = io_err.into();
        assert!(matches!(err, ViewError::Io(_)));
    }
}
