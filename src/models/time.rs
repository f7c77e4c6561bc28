//! Clock times, weekdays, and weekly meeting blocks.
//!
//! # Time Model
//! Times are wall-clock minutes within a day, written as zero-padded
//! 24-hour `HHMM` (`"0830"`). Numeric order equals lexicographic order
//! of the padded text. Meetings are half-open intervals `[start, end)`,
//! so back-to-back blocks do not overlap.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::ParseError;

/// A 24-hour wall-clock time, stored as `HHMM` (e.g. `830` for 08:30).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Creates a time from hours and minutes.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ParseError> {
        if hour > 23 || minute > 59 {
            return Err(ParseError::ClockTime(format!("{hour:02}{minute:02}")));
        }
        Ok(Self(u16::from(hour) * 100 + u16::from(minute)))
    }

    /// Parses `HHMM`, `HMM`, `H:MM` or `HH:MM`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let trimmed = text.trim();
        let err = || ParseError::ClockTime(text.to_string());

        let (hour, minute) = match trimmed.split_once(':') {
            Some((h, m)) => (h, m),
            None if (3..=4).contains(&trimmed.len()) => trimmed.split_at(trimmed.len() - 2),
            None => return Err(err()),
        };
        if hour.is_empty()
            || hour.len() > 2
            || minute.len() != 2
            || !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit())
        {
            return Err(err());
        }

        let hour: u8 = hour.parse().map_err(|_| err())?;
        let minute: u8 = minute.parse().map_err(|_| err())?;
        Self::new(hour, minute).map_err(|_| err())
    }

    /// Parses a 12-hour time such as `"8:30 AM"` or `"12:05 PM"`.
    pub fn parse_12_hour(text: &str) -> Result<Self, ParseError> {
        let err = || ParseError::TwelveHourTime(text.to_string());
        let (clock, meridiem) = text.trim().split_once(' ').ok_or_else(err)?;
        let (hour, minute) = clock.split_once(':').ok_or_else(err)?;
        if minute.len() != 2 {
            return Err(err());
        }

        let hour: u8 = hour.parse().map_err(|_| err())?;
        let minute: u8 = minute.parse().map_err(|_| err())?;
        if !(1..=12).contains(&hour) || minute > 59 {
            return Err(err());
        }

        let hour = match meridiem.trim().to_ascii_uppercase().as_str() {
            "AM" => hour % 12,
            "PM" => hour % 12 + 12,
            _ => return Err(err()),
        };
        Self::new(hour, minute)
    }

    /// Hour component (0-23).
    #[inline]
    pub fn hour(&self) -> u8 {
        (self.0 / 100) as u8
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(&self) -> u8 {
        (self.0 % 100) as u8
    }

    /// The `HHMM` integer encoding.
    #[inline]
    pub fn as_hhmm(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse(&text)
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

/// Day of the week, keyed by its registrar letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    /// `M`
    #[serde(rename = "M")]
    Monday,
    /// `T`
    #[serde(rename = "T")]
    Tuesday,
    /// `W`
    #[serde(rename = "W")]
    Wednesday,
    /// `R`
    #[serde(rename = "R")]
    Thursday,
    /// `F`
    #[serde(rename = "F")]
    Friday,
    /// `S`
    #[serde(rename = "S")]
    Saturday,
    /// `U`
    #[serde(rename = "U")]
    Sunday,
}

impl Day {
    /// All days, Monday first.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Looks up a day by letter (case-insensitive).
    pub fn from_letter(letter: char) -> Result<Self, ParseError> {
        Self::ALL
            .into_iter()
            .find(|day| day.letter() == letter.to_ascii_uppercase())
            .ok_or(ParseError::Day(letter))
    }

    /// Parses a day string such as `"MWF"`.
    pub fn parse_days(text: &str) -> Result<Vec<Self>, ParseError> {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .map(Self::from_letter)
            .collect()
    }

    /// Registrar letter.
    pub fn letter(&self) -> char {
        match self {
            Day::Monday => 'M',
            Day::Tuesday => 'T',
            Day::Wednesday => 'W',
            Day::Thursday => 'R',
            Day::Friday => 'F',
            Day::Saturday => 'S',
            Day::Sunday => 'U',
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Standard period start times and their labels.
const PERIODS: [(u16, &str); 12] = [
    (725, "Period 1"),
    (830, "Period 2"),
    (935, "Period 3"),
    (1040, "Period 4"),
    (1145, "Period 5"),
    (1250, "Period 6"),
    (1355, "Period 7"),
    (1500, "Period 8"),
    (1605, "Period 9"),
    (1710, "Period 10"),
    (1815, "Period 11"),
    (1920, "Period 12"),
];

/// Period label for a standard start time, if any.
pub fn period_for_start(start: ClockTime) -> Option<&'static str> {
    PERIODS
        .iter()
        .find(|(hhmm, _)| *hhmm == start.as_hhmm())
        .map(|(_, label)| *label)
}

/// One weekly meeting on a single day: `[start, end)` plus its period label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Start time (inclusive).
    pub start: ClockTime,
    /// End time (exclusive).
    pub end: ClockTime,
    /// Period label, e.g. `"Period 3"`. Empty when the start is non-standard.
    pub period: String,
}

impl Meeting {
    /// Creates a meeting, deriving the period label from the start time.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self {
            start,
            end,
            period: period_for_start(start).unwrap_or_default().to_string(),
        }
    }

    /// Parses `HHMM` start and end times.
    pub fn parse(start: &str, end: &str) -> Result<Self, ParseError> {
        Ok(Self::new(ClockTime::parse(start)?, ClockTime::parse(end)?))
    }

    /// Overrides the period label.
    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = period.into();
        self
    }

    /// Whether two meetings overlap in time (ignores days).
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `end` is after `start`.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }
}

/// Per-day meetings at one location.
pub type DayTable = BTreeMap<Day, Meeting>;

/// A location and the meetings held there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationMeetings {
    /// Building and room, e.g. `"CSE E116"`.
    pub location: String,
    /// Day letter → meeting.
    pub days: DayTable,
}

impl LocationMeetings {
    /// Creates an empty table for a location.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            days: DayTable::new(),
        }
    }

    /// Adds the same meeting on each listed day.
    pub fn with_meeting(mut self, days: &[Day], meeting: Meeting) -> Self {
        for day in days {
            self.days.insert(*day, meeting.clone());
        }
        self
    }
}
