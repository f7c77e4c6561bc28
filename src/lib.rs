//! Semester schedule generation.
//!
//! Given the courses a student wants and every offered section of each,
//! enumerates all combinations that pick exactly one section per course
//! without weekly time conflicts, while honoring user constraints (time
//! window, blacked-out periods and days, instructor feedback thresholds).
//!
//! # Modules
//!
//! - **`models`**: Domain types and pure decisions over them: `CourseCode`,
//!   `CatalogCourse`, `OfferedSection`, `ScheduleConstraints`, requisite
//!   extraction and section compatibility
//! - **`scheduler`**: The generator (`ScheduleGenerator`) and its summary counts
//! - **`config`**: Loosely typed filter input and its conversion into constraints
//! - **`listing`**: Shaping of registrar meeting listings into day tables
//! - **`validation`**: Advisory integrity checks on a request
//! - **`error`**: Parse, configuration and generation errors
//!
//! # Example
//!
//! ```
//! use semester_scheduler::models::{Day, LocationMeetings, Meeting, OfferedSection, ScheduleConstraints};
//! use semester_scheduler::scheduler::{ScheduleGenerator, ScheduleRequest};
//!
//! let meets = |start: &str, end: &str| {
//!     LocationMeetings::new("CSE E116")
//!         .with_meeting(&[Day::Monday], Meeting::parse(start, end).unwrap())
//! };
//! let request = ScheduleRequest::new()
//!     .with_course("COP 4600", vec![OfferedSection::new("COP 4600", "1").with_location(meets("0830", "0920"))])
//!     .with_course("MAC 2313", vec![
//!         OfferedSection::new("MAC 2313", "2").with_location(meets("0900", "0950")),
//!         OfferedSection::new("MAC 2313", "3").with_location(meets("1040", "1130")),
//!     ]);
//!
//! let result = ScheduleGenerator::new().generate(&request, &ScheduleConstraints::default());
//! assert_eq!(result.schedules.len(), 1);
//! assert_eq!(result.summary.total_considered, 2);
//! ```
//!
//! # Logging
//!
//! The crate emits `tracing` events (`debug` per generation, `warn` for
//! skipped listings) and never installs a subscriber.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod listing;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{ConfigError, GenerationError, ParseError};
pub use scheduler::{generate_schedules, ScheduleGenerator, ScheduleRequest};
