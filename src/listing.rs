//! Shaping of upstream meeting listings.
//!
//! The registrar reports each meeting as a day string (`"MWF"`), 12-hour
//! begin/end times, and a building and room. This module turns a section's
//! listings into location-grouped [`DayTable`](crate::models::DayTable)s:
//!
//! 1. Times are converted to 24-hour [`ClockTime`]s and labeled with their period.
//! 2. Listings are grouped by `"{building} {room}"`, in first-seen order.
//! 3. A later listing for the same location and day replaces the earlier one.
//!
//! Listings with a missing or unparseable time are skipped with a warning,
//! as are unknown day letters. No fetching or markup parsing happens here.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ParseError;
use crate::models::{ClockTime, Day, LocationMeetings, Meeting};

/// One meeting entry as listed by the registrar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeetingListing {
    /// Day letters, e.g. `"MWF"`.
    pub meet_days: String,
    /// 12-hour start, e.g. `"8:30 AM"`.
    pub meet_time_begin: String,
    /// 12-hour end, e.g. `"9:20 AM"`.
    pub meet_time_end: String,
    /// Building code.
    pub meet_building: String,
    /// Room number.
    pub meet_room: String,
}

impl MeetingListing {
    /// Creates a listing.
    pub fn new(days: &str, begin: &str, end: &str, building: &str, room: &str) -> Self {
        Self {
            meet_days: days.to_string(),
            meet_time_begin: begin.to_string(),
            meet_time_end: end.to_string(),
            meet_building: building.to_string(),
            meet_room: room.to_string(),
        }
    }

    /// `"{building} {room}"`, trimmed.
    pub fn location(&self) -> String {
        format!("{} {}", self.meet_building, self.meet_room)
            .trim()
            .to_string()
    }

    /// Parses begin/end into a meeting. `None` when either time is blank.
    pub fn meeting(&self) -> Result<Option<Meeting>, ParseError> {
        if self.meet_time_begin.trim().is_empty() || self.meet_time_end.trim().is_empty() {
            return Ok(None);
        }
        let start = ClockTime::parse_12_hour(&self.meet_time_begin)?;
        let end = ClockTime::parse_12_hour(&self.meet_time_end)?;
        Ok(Some(Meeting::new(start, end)))
    }
}

/// Groups a section's listings into per-location day tables.
///
/// An empty result means the section is online.
pub fn shape_meetings(listings: &[MeetingListing]) -> Vec<LocationMeetings> {
    let mut groups: Vec<LocationMeetings> = Vec::new();

    for listing in listings {
        let meeting = match listing.meeting() {
            Ok(Some(meeting)) => meeting,
            Ok(None) => {
                warn!(days = %listing.meet_days, "skipping meeting without a start or end time");
                continue;
            }
            Err(e) => {
                warn!(days = %listing.meet_days, error = %e, "skipping meeting with unparseable time");
                continue;
            }
        };

        let location = listing.location();
        let index = match groups.iter().position(|g| g.location == location) {
            Some(index) => index,
            None => {
                groups.push(LocationMeetings::new(location));
                groups.len() - 1
            }
        };

        for letter in listing.meet_days.chars().filter(|c| !c.is_whitespace()) {
            match Day::from_letter(letter) {
                Ok(day) => {
                    groups[index].days.insert(day, meeting.clone());
                }
                Err(e) => warn!(error = %e, "skipping unknown meeting day"),
            }
        }
    }

    groups
}
