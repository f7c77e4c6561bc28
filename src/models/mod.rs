//! Course and section domain models.
//!
//! Provides the data types the schedule generator works on, plus the pure
//! decision functions over them (normalization, requisite extraction,
//! compatibility, constraint checks).
//!
//! # Concepts
//!
//! | Type | Meaning |
//! |------|---------|
//! | `CourseCode` | Canonical code (`COP 4600`) or `INVALID` |
//! | `CatalogCourse` | A course's catalog definition, one per code |
//! | `OfferedSection` | One scheduled offering of a course in a term |
//! | `ScheduleConstraints` | User preferences every chosen section must meet |

mod catalog;
mod code;
mod constraint;
mod requisite;
mod section;
mod time;

pub use catalog::{CatalogCourse, CatalogEntry};
pub use code::{normalize, CourseCode, Level, INVALID_CODE};
pub use constraint::{satisfies, Rejection, ScheduleConstraints};
pub use requisite::{extract_requisites, scan_requisites};
pub use section::{compatible, Metric, OfferedSection, NOT_AVAILABLE, ONLINE};
pub use time::{period_for_start, ClockTime, Day, DayTable, LocationMeetings, Meeting};
