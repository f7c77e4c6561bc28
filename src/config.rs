//! Filter configuration.
//!
//! [`FilterConfig`] is the loosely typed form callers send: every field is
//! optional, values may be strings or numbers, and unknown keys are ignored.
//! Empty strings and empty lists mean "no constraint". Conversion into
//! [`ScheduleConstraints`] parses each value and reports the first bad field.
//!
//! # Example
//!
//! ```
//! use semester_scheduler::config::FilterConfig;
//! use semester_scheduler::models::ScheduleConstraints;
//!
//! let config: FilterConfig = serde_json::from_str(r#"{
//!     "earliest_time": "0830",
//!     "day_blackouts": ["F"],
//!     "min_instructor_rating": "",
//!     "max_level_of_difficulty": 3.5
//! }"#).unwrap();
//! let constraints = ScheduleConstraints::try_from(config).unwrap();
//! assert_eq!(constraints.max_level_of_difficulty, Some(3.5));
//! assert!(constraints.min_instructor_rating.is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ParseError};
use crate::models::{ClockTime, Day, Metric, ScheduleConstraints};

/// A scalar configuration value: text or a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A bare JSON number, e.g. `1700` or `3.5`.
    Number(f64),
    /// Text such as `"0830"`, `"85%"` or `"N/A"`. Blank text means unset.
    Text(String),
}

impl FilterValue {
    /// Trimmed text, or `None` for numbers and blank text.
    fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(text) if text.trim().is_empty() => None,
            FilterValue::Text(text) => Some(text.trim()),
            FilterValue::Number(_) => None,
        }
    }
}

/// Raw schedule filters as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Earliest meeting start, `HHMM` or `H:MM`.
    pub earliest_time: Option<FilterValue>,
    /// Latest meeting end, `HHMM` or `H:MM`.
    pub latest_time: Option<FilterValue>,
    /// Period labels to exclude, e.g. `"Period 1"`.
    pub period_blackouts: Option<Vec<String>>,
    /// Day strings to exclude, e.g. `"F"` or `"TR"`.
    pub day_blackouts: Option<Vec<String>>,
    /// Minimum first-instructor rating; `0` means unset.
    pub min_instructor_rating: Option<FilterValue>,
    /// Maximum instructor difficulty.
    pub max_level_of_difficulty: Option<FilterValue>,
    /// Minimum would-take-again percentage, with or without `%`.
    pub min_would_take_again: Option<FilterValue>,
}

impl TryFrom<FilterConfig> for ScheduleConstraints {
    type Error = ConfigError;

    fn try_from(config: FilterConfig) -> Result<Self, Self::Error> {
        let day_blackouts = config
            .day_blackouts
            .unwrap_or_default()
            .iter()
            .map(|days| Day::parse_days(days))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::new("day_blackouts", e))?
            .into_iter()
            .flatten()
            .collect();

        let period_blackouts = config
            .period_blackouts
            .unwrap_or_default()
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        Ok(Self {
            earliest_time: parse_time("earliest_time", config.earliest_time.as_ref())?,
            latest_time: parse_time("latest_time", config.latest_time.as_ref())?,
            period_blackouts,
            day_blackouts,
            min_instructor_rating: parse_number(
                "min_instructor_rating",
                config.min_instructor_rating.as_ref(),
            )?,
            max_level_of_difficulty: parse_number(
                "max_level_of_difficulty",
                config.max_level_of_difficulty.as_ref(),
            )?,
            min_would_take_again: parse_number(
                "min_would_take_again",
                config.min_would_take_again.as_ref(),
            )?,
        })
    }
}

fn parse_time(
    field: &'static str,
    value: Option<&FilterValue>,
) -> Result<Option<ClockTime>, ConfigError> {
    let text = match value {
        None => return Ok(None),
        Some(FilterValue::Number(n)) => format!("{n:04}"),
        Some(v) => match v.as_text() {
            None => return Ok(None),
            Some(text) => text.to_string(),
        },
    };
    ClockTime::parse(&text)
        .map(Some)
        .map_err(|e| ConfigError::new(field, e))
}

fn parse_number(field: &'static str, value: Option<&FilterValue>) -> Result<Option<f64>, ConfigError> {
    match value {
        None => Ok(None),
        Some(FilterValue::Number(n)) if n.is_finite() => Ok(Some(*n)),
        Some(FilterValue::Number(n)) => {
            Err(ConfigError::new(field, ParseError::Metric(n.to_string())))
        }
        Some(v @ FilterValue::Text(_)) => match v.as_text() {
            None => Ok(None),
            Some(text) => match Metric::parse(text) {
                Ok(Metric::Value(n)) => Ok(Some(n)),
                Ok(Metric::NotAvailable) => Ok(None),
                Err(e) => Err(ConfigError::new(field, e)),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraints(json: &str) -> Result<ScheduleConstraints, ConfigError> {
        let config: FilterConfig = serde_json::from_str(json).unwrap();
        ScheduleConstraints::try_from(config)
    }

    #[test]
    fn test_default_filters_are_unconstrained() {
        let c = constraints(
            r#"{
                "earliest_time": "",
                "latest_time": "",
                "period_blackouts": [],
                "day_blackouts": [],
                "min_instructor_rating": "",
                "max_level_of_difficulty": "",
                "min_would_take_again": ""
            }"#,
        )
        .unwrap();
        assert!(c.is_unconstrained());
        assert_eq!(c, ScheduleConstraints::default());
    }

    #[test]
    fn test_empty_object_and_nulls() {
        assert!(constraints("{}").unwrap().is_unconstrained());
        let c = constraints(r#"{"period_blackouts": null, "day_blackouts": null}"#).unwrap();
        assert!(c.is_unconstrained());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let c = constraints(r#"{"max_credits": 18, "latest_time": "1700"}"#).unwrap();
        assert_eq!(c.latest_time, Some(ClockTime::parse("1700").unwrap()));
    }

    #[test]
    fn test_full_config() {
        let c = constraints(
            r#"{
                "earliest_time": "8:30",
                "latest_time": 1700,
                "period_blackouts": ["Period 1", " ", "Period 11"],
                "day_blackouts": ["F", "s"],
                "min_instructor_rating": "3.5",
                "max_level_of_difficulty": 4,
                "min_would_take_again": "70%"
            }"#,
        )
        .unwrap();
        assert_eq!(c.earliest_time, Some(ClockTime::parse("0830").unwrap()));
        assert_eq!(c.latest_time, Some(ClockTime::parse("1700").unwrap()));
        assert_eq!(c.period_blackouts.len(), 2);
        assert!(c.day_blackouts.contains(&Day::Friday));
        assert!(c.day_blackouts.contains(&Day::Saturday));
        assert_eq!(c.min_instructor_rating, Some(3.5));
        assert_eq!(c.max_level_of_difficulty, Some(4.0));
        assert_eq!(c.min_would_take_again, Some(70.0));
    }

    #[test]
    fn test_numeric_time_is_zero_padded() {
        let c = constraints(r#"{"earliest_time": 725}"#).unwrap();
        assert_eq!(c.earliest_time, Some(ClockTime::parse("0725").unwrap()));
    }

    #[test]
    fn test_bad_time_names_field() {
        let err = constraints(r#"{"latest_time": "late"}"#).unwrap_err();
        assert_eq!(err.field, "latest_time");
        assert_eq!(err.source, ParseError::ClockTime("late".into()));
    }

    #[test]
    fn test_bad_day_names_field() {
        let err = constraints(r#"{"day_blackouts": ["X"]}"#).unwrap_err();
        assert_eq!(err.field, "day_blackouts");
    }

    #[test]
    fn test_bad_rating_names_field() {
        let err = constraints(r#"{"min_would_take_again": "most"}"#).unwrap_err();
        assert_eq!(err.field, "min_would_take_again");
    }
}
