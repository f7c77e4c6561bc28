//! Error types.
//!
//! Normalization, requisite extraction, compatibility and constraint checks
//! are total and never fail. Errors only arise when raw text (clock times,
//! day letters, rating values, filter configuration) has to be parsed, or
//! when a caller cancels a running generation.

use thiserror::Error;

/// A raw value could not be parsed into its typed form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not a 24-hour `HHMM` / `H:MM` clock time.
    #[error("invalid clock time '{0}': expected HHMM or H:MM")]
    ClockTime(String),

    /// Not a 12-hour `H:MM AM` / `H:MM PM` clock time.
    #[error("invalid 12-hour time '{0}': expected H:MM AM or H:MM PM")]
    TwelveHourTime(String),

    /// Not one of the day letters `M T W R F S U`.
    #[error("invalid day letter '{0}'")]
    Day(char),

    /// Not a number, a percentage, or `N/A`.
    #[error("invalid metric '{0}': expected a number, a percentage, or N/A")]
    Metric(String),
}

/// A filter configuration field holds a value that cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value for filter '{field}': {source}")]
pub struct ConfigError {
    /// Name of the offending configuration key.
    pub field: &'static str,
    /// Underlying parse failure.
    #[source]
    pub source: ParseError,
}

impl ConfigError {
    pub(crate) fn new(field: &'static str, source: ParseError) -> Self {
        Self { field, source }
    }
}

/// Schedule generation did not run to completion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The caller's stop signal fired between two candidate evaluations.
    #[error("schedule generation cancelled after {explored} candidate evaluations")]
    Cancelled {
        /// Candidate evaluations performed before the stop was observed.
        explored: u64,
    },
}
