//! Per-section scheduling constraints.
//!
//! A section is admitted only if it passes every configured constraint.
//! Unset constraints never reject.
//!
//! | Constraint | Rejects when |
//! |------------|--------------|
//! | `earliest_time` | any meeting starts before the bound |
//! | `latest_time` | any meeting ends after the bound |
//! | `period_blackouts` | any meeting's period label is blacked out |
//! | `day_blackouts` | any meeting falls on a blacked-out day |
//! | `min_instructor_rating` | rating below threshold, or `N/A` |
//! | `max_level_of_difficulty` | difficulty above threshold, or `N/A` |
//! | `min_would_take_again` | percentage below threshold, or `N/A` |
//!
//! A minimum instructor rating of `0` is the default and admits `N/A`.
//! NaN or infinite metric thresholds count as unset.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::{ClockTime, Day, Metric, OfferedSection};

/// User-chosen preferences applied to every section of a schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConstraints {
    /// No meeting may start before this time.
    pub earliest_time: Option<ClockTime>,
    /// No meeting may end after this time.
    pub latest_time: Option<ClockTime>,
    /// Period labels that must not appear.
    pub period_blackouts: BTreeSet<String>,
    /// Days that must not appear.
    pub day_blackouts: BTreeSet<Day>,
    /// Minimum first-instructor rating.
    pub min_instructor_rating: Option<f64>,
    /// Maximum instructor difficulty.
    pub max_level_of_difficulty: Option<f64>,
    /// Minimum would-take-again percentage.
    pub min_would_take_again: Option<f64>,
}

/// Why a section was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// A meeting starts before `earliest_time`.
    StartsTooEarly {
        /// Day of the offending meeting.
        day: Day,
        /// Its start time.
        start: ClockTime,
    },
    /// A meeting ends after `latest_time`.
    EndsTooLate {
        /// Day of the offending meeting.
        day: Day,
        /// Its end time.
        end: ClockTime,
    },
    /// A meeting falls in a blacked-out period.
    BlackedOutPeriod(String),
    /// A meeting falls on a blacked-out day.
    BlackedOutDay(Day),
    /// Instructor rating below minimum or unavailable.
    InstructorRating(Metric),
    /// Difficulty above maximum or unavailable.
    Difficulty(Metric),
    /// Would-take-again percentage below minimum or unavailable.
    WouldTakeAgain(Metric),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::StartsTooEarly { day, start } => {
                write!(f, "meeting on {day} starts at {start}, before the earliest allowed time")
            }
            Rejection::EndsTooLate { day, end } => {
                write!(f, "meeting on {day} ends at {end}, after the latest allowed time")
            }
            Rejection::BlackedOutPeriod(period) => write!(f, "meets during blacked-out {period}"),
            Rejection::BlackedOutDay(day) => write!(f, "meets on blacked-out day {day}"),
            Rejection::InstructorRating(m) => write!(f, "instructor rating {m} below minimum"),
            Rejection::Difficulty(m) => write!(f, "difficulty {m} above maximum"),
            Rejection::WouldTakeAgain(m) => write!(f, "would-take-again {m} below minimum"),
        }
    }
}

impl ScheduleConstraints {
    /// Creates an empty constraint set (admits everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the earliest allowed start time.
    pub fn with_earliest_time(mut self, time: ClockTime) -> Self {
        self.earliest_time = Some(time);
        self
    }

    /// Sets the latest allowed end time.
    pub fn with_latest_time(mut self, time: ClockTime) -> Self {
        self.latest_time = Some(time);
        self
    }

    /// Blacks out a period label.
    pub fn with_period_blackout(mut self, period: impl Into<String>) -> Self {
        self.period_blackouts.insert(period.into());
        self
    }

    /// Blacks out a day.
    pub fn with_day_blackout(mut self, day: Day) -> Self {
        self.day_blackouts.insert(day);
        self
    }

    /// Sets the minimum instructor rating. A non-finite value leaves it unset.
    pub fn with_min_instructor_rating(mut self, rating: f64) -> Self {
        self.min_instructor_rating = finite(rating);
        self
    }

    /// Sets the maximum difficulty. A non-finite value leaves it unset.
    pub fn with_max_level_of_difficulty(mut self, difficulty: f64) -> Self {
        self.max_level_of_difficulty = finite(difficulty);
        self
    }

    /// Sets the minimum would-take-again percentage. A non-finite value leaves it unset.
    pub fn with_min_would_take_again(mut self, percent: f64) -> Self {
        self.min_would_take_again = finite(percent);
        self
    }

    /// Whether no constraint is set.
    pub fn is_unconstrained(&self) -> bool {
        self.earliest_time.is_none()
            && self.latest_time.is_none()
            && self.period_blackouts.is_empty()
            && self.day_blackouts.is_empty()
            && self.effective_min_rating().is_none()
            && self.max_level_of_difficulty.and_then(finite).is_none()
            && self.min_would_take_again.and_then(finite).is_none()
    }

    /// Checks a section, returning the first failed constraint.
    pub fn check(&self, section: &OfferedSection) -> Result<(), Rejection> {
        for (day, meeting) in section.weekly_meetings() {
            if self.earliest_time.is_some_and(|bound| meeting.start < bound) {
                return Err(Rejection::StartsTooEarly {
                    day,
                    start: meeting.start,
                });
            }
            if self.latest_time.is_some_and(|bound| meeting.end > bound) {
                return Err(Rejection::EndsTooLate {
                    day,
                    end: meeting.end,
                });
            }
            if self.period_blackouts.contains(&meeting.period) {
                return Err(Rejection::BlackedOutPeriod(meeting.period.clone()));
            }
            if self.day_blackouts.contains(&day) {
                return Err(Rejection::BlackedOutDay(day));
            }
        }

        if let Some(min) = self.effective_min_rating() {
            let rating = section.instructor_rating();
            if !rating.value().is_some_and(|v| v >= min) {
                return Err(Rejection::InstructorRating(rating));
            }
        }
        if let Some(max) = self.max_level_of_difficulty.and_then(finite) {
            if !section.difficulty.value().is_some_and(|v| v <= max) {
                return Err(Rejection::Difficulty(section.difficulty));
            }
        }
        if let Some(min) = self.min_would_take_again.and_then(finite) {
            if !section.would_take_again.value().is_some_and(|v| v >= min) {
                return Err(Rejection::WouldTakeAgain(section.would_take_again));
            }
        }

        Ok(())
    }

    /// Whether a section passes every constraint.
    #[inline]
    pub fn admits(&self, section: &OfferedSection) -> bool {
        self.check(section).is_ok()
    }

    /// A minimum rating of zero (or less) is the default.
    fn effective_min_rating(&self) -> Option<f64> {
        self.min_instructor_rating
            .and_then(finite)
            .filter(|min| *min > 0.0)
    }
}

/// Metric thresholds that are NaN or infinite count as unset.
fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Whether `section` satisfies `constraints`.
pub fn satisfies(section: &OfferedSection, constraints: &ScheduleConstraints) -> bool {
    constraints.admits(section)
}
