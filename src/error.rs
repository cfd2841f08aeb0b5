//! Error types for the scheduling library.
//!
//! Scheduling itself does not fail: per-job problems are reported through
//! [`SkipReason`](crate::models::SkipReason). These errors cover the
//! boundary, where raw records, preset names, dates and configuration
//! documents are turned into typed values.

use thiserror::Error;

/// Errors raised while building typed inputs for a scheduling run.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A raw job record failed validation.
    #[error("Invalid job record '{id}': field '{field}' {reason}")]
    InvalidJob {
        id: String,
        field: &'static str,
        reason: String,
    },
    /// A preset name that is not one of the known presets.
    #[error("Unknown scheduling preset '{0}'")]
    UnknownPreset(String),
    /// A date string that is not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: jiff::Error,
    },
    /// Structurally invalid configuration.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// JSON (de)serialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl ScheduleError {
    /// Creates an invalid-job error.
    pub fn invalid_job(
        id: impl Into<String>,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidJob {
            id: id.into(),
            field,
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Result type alias for scheduling operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_job_message() {
        let err = ScheduleError::invalid_job("PROJ-1", "installDays", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid job record 'PROJ-1': field 'installDays' must be positive"
        );
    }

    #[test]
    fn test_serialization_from() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ScheduleError = json_err.into();
        assert!(matches!(err, ScheduleError::Serialization { .. }));
    }
}
