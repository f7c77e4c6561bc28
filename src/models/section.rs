//! Offered sections and pairwise compatibility.
//!
//! An [`OfferedSection`] is one concrete offering of a course in a term.
//! Many sections share one [`CourseCode`]. Sections are produced by the
//! data-fetch layer and treated as immutable input.
//!
//! # Compatibility
//! Two sections are compatible unless some day appears in both and their
//! meetings on that day overlap. A section without meeting locations is
//! online and compatible with everything.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CourseCode, Day, LocationMeetings, Meeting};
use crate::error::ParseError;

/// Location reported for a section with no physical meetings.
pub const ONLINE: &str = "Online";

/// Text of the not-available sentinel for metrics and dates.
pub const NOT_AVAILABLE: &str = "N/A";

/// An instructor quality signal that may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawMetric", into = "RawMetric")]
pub enum Metric {
    /// A known value (rating, difficulty, or percentage).
    Value(f64),
    /// `N/A`.
    #[default]
    NotAvailable,
}

impl Metric {
    /// Parses `"4.5"`, `"85%"`, or `"N/A"` (empty text is also `N/A`).
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NOT_AVAILABLE) {
            return Ok(Metric::NotAvailable);
        }
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
        match number.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Metric::Value(value)),
            _ => Err(ParseError::Metric(text.to_string())),
        }
    }

    /// The value, if available.
    #[inline]
    pub fn value(&self) -> Option<f64> {
        match self {
            Metric::Value(v) => Some(*v),
            Metric::NotAvailable => None,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Value(v) => write!(f, "{v}"),
            Metric::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

/// Wire form of a [`Metric`]: a bare number or text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawMetric {
    Number(f64),
    Text(String),
}

impl TryFrom<RawMetric> for Metric {
    type Error = ParseError;

    fn try_from(raw: RawMetric) -> Result<Self, Self::Error> {
        match raw {
            RawMetric::Number(v) if v.is_finite() => Ok(Metric::Value(v)),
            RawMetric::Number(v) => Err(ParseError::Metric(v.to_string())),
            RawMetric::Text(text) => Metric::parse(&text),
        }
    }
}

impl From<Metric> for RawMetric {
    fn from(metric: Metric) -> Self {
        match metric {
            Metric::Value(v) => RawMetric::Number(v),
            Metric::NotAvailable => RawMetric::Text(NOT_AVAILABLE.to_string()),
        }
    }
}

/// One scheduled offering of a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferedSection {
    /// Course code shared by all sections of the course.
    pub code: CourseCode,
    /// Credit hours.
    pub credits: u8,
    /// Course title.
    pub name: String,
    /// Subject prefix.
    pub subject: String,
    /// Registrar class number, unique per section.
    pub unique_id: String,
    /// Meetings grouped by location, in listing order. Empty = online.
    pub meetings: Vec<LocationMeetings>,
    /// Instructor names.
    pub instructors: Vec<String>,
    /// Aggregate rating per instructor, parallel to `instructors`.
    pub instructor_ratings: Vec<Metric>,
    /// Delivery mode code (e.g. `"PC"` for in person).
    pub mode: String,
    /// Final exam date, or `N/A`.
    pub final_exam: String,
    /// `"{start} - {end}"` date range.
    pub class_dates: String,
    /// Offering department.
    pub department: String,
    /// General-education tags.
    pub gen_ed: Vec<String>,
    /// Instructor difficulty rating.
    pub difficulty: Metric,
    /// Percentage of students who would take the instructor again.
    pub would_take_again: Metric,
}

impl OfferedSection {
    /// Creates an online section with no instructor data.
    ///
    /// The subject is taken from the code's letter prefix.
    pub fn new(code: impl Into<CourseCode>, unique_id: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            subject: code.subject().unwrap_or_default().to_string(),
            code,
            credits: 0,
            name: String::new(),
            unique_id: unique_id.into(),
            meetings: Vec::new(),
            instructors: Vec::new(),
            instructor_ratings: Vec::new(),
            mode: String::new(),
            final_exam: NOT_AVAILABLE.to_string(),
            class_dates: String::new(),
            department: String::new(),
            gen_ed: Vec::new(),
            difficulty: Metric::NotAvailable,
            would_take_again: Metric::NotAvailable,
        }
    }

    /// Sets the course title.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the credit hours.
    pub fn with_credits(mut self, credits: u8) -> Self {
        self.credits = credits;
        self
    }

    /// Adds a location block.
    pub fn with_location(mut self, meetings: LocationMeetings) -> Self {
        self.meetings.push(meetings);
        self
    }

    /// Replaces all location blocks.
    pub fn with_meetings(mut self, meetings: Vec<LocationMeetings>) -> Self {
        self.meetings = meetings;
        self
    }

    /// Adds an instructor and their rating.
    pub fn with_instructor(mut self, name: impl Into<String>, rating: Metric) -> Self {
        self.instructors.push(name.into());
        self.instructor_ratings.push(rating);
        self
    }

    /// Sets the difficulty and would-take-again signals.
    pub fn with_feedback(mut self, difficulty: Metric, would_take_again: Metric) -> Self {
        self.difficulty = difficulty;
        self.would_take_again = would_take_again;
        self
    }

    /// Sets the delivery mode.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Sets the final exam date; empty text becomes `N/A`.
    pub fn with_final_exam(mut self, date: impl Into<String>) -> Self {
        let date = date.into();
        self.final_exam = if date.trim().is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            date
        };
        self
    }

    /// Sets the class date range.
    pub fn with_class_dates(mut self, start: &str, end: &str) -> Self {
        self.class_dates = format!("{start} - {end}");
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the general-education tags.
    pub fn with_gen_ed(mut self, tags: Vec<String>) -> Self {
        self.gen_ed = tags;
        self
    }

    /// Whether the section has no meeting locations.
    #[inline]
    pub fn is_online(&self) -> bool {
        self.meetings.is_empty()
    }

    /// Location names in listing order, or `["Online"]`.
    pub fn locations(&self) -> Vec<&str> {
        if self.is_online() {
            return vec![ONLINE];
        }
        self.meetings.iter().map(|m| m.location.as_str()).collect()
    }

    /// All `(day, meeting)` pairs across every location.
    pub fn weekly_meetings(&self) -> impl Iterator<Item = (Day, &Meeting)> + '_ {
        self.meetings
            .iter()
            .flat_map(|loc| loc.days.iter().map(|(day, meeting)| (*day, meeting)))
    }

    /// Rating used for filtering: the first instructor's rating, or `N/A`.
    pub fn instructor_rating(&self) -> Metric {
        self.instructor_ratings
            .first()
            .copied()
            .unwrap_or(Metric::NotAvailable)
    }

    /// Whether this section can share a schedule with `other`.
    pub fn is_compatible(&self, other: &Self) -> bool {
        compatible(self, other)
    }
}

impl fmt::Display for OfferedSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} (#{})", self.code, self.name, self.unique_id)?;
        writeln!(f, "  Credits: {}", self.credits)?;
        if self.is_online() {
            writeln!(f, "  {ONLINE}:")?;
        }
        for block in &self.meetings {
            write!(f, "  {}:", block.location)?;
            for (day, m) in &block.days {
                write!(f, " {day} {}-{}", m.start, m.end)?;
                if !m.period.is_empty() {
                    write!(f, " ({})", m.period)?;
                }
            }
            writeln!(f)?;
        }
        let instructors = if self.instructors.is_empty() {
            "TBA".to_string()
        } else {
            self.instructors.join(", ")
        };
        writeln!(f, "  Instructors: {instructors}")?;
        writeln!(
            f,
            "  Rating: {}  Difficulty: {}  Would take again: {}",
            self.instructor_rating(),
            self.difficulty,
            self.would_take_again
        )?;
        write!(f, "  Final exam: {}", self.final_exam)
    }
}

/// Whether two sections can coexist in one schedule.
///
/// Symmetric. Every meeting of `a` is checked against every meeting of `b`
/// on the same day; any overlap makes the pair incompatible.
pub fn compatible(a: &OfferedSection, b: &OfferedSection) -> bool {
    if a.is_online() || b.is_online() {
        return true;
    }
    !a.weekly_meetings().any(|(day_a, meeting_a)| {
        b.weekly_meetings()
            .any(|(day_b, meeting_b)| day_a == day_b && meeting_a.overlaps(meeting_b))
    })
}
