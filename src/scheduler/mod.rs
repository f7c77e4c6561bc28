//! Schedule generation and its summary.
//!
//! # Algorithm
//!
//! `ScheduleGenerator` enumerates every combination that picks one section
//! per requested course, keeping those whose sections all satisfy the
//! constraints and are pairwise free of time conflicts. Output order is
//! Cartesian-product order with the first course varying slowest.
//!
//! # Summary
//!
//! `GenerationSummary` reports the product size and acceptance rate.

mod generator;
mod summary;

pub use generator::{
    generate_schedules, CourseGroup, GenerationResult, ScheduleCandidate, ScheduleGenerator,
    ScheduleRequest, Strategy,
};
pub use summary::GenerationSummary;
