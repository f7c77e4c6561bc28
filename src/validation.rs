//! Input validation for schedule requests.
//!
//! Checks structural integrity of a request before generation. Detects:
//! - Requested codes that normalized to `INVALID`
//! - The same course requested twice
//! - Courses with no candidate sections
//! - Sections filed under a different course code
//! - Duplicate section ids within a course
//! - Meetings whose end is not after their start
//!
//! Validation is advisory. The generator accepts any request; an empty
//! course simply yields no schedules, and a malformed meeting is compared
//! as given.

use std::collections::HashSet;

use crate::scheduler::ScheduleRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A requested course code is `INVALID`.
    InvalidCode,
    /// A course appears more than once in the request.
    DuplicateCourse,
    /// A course has no candidate sections.
    EmptyGroup,
    /// A section's code differs from the course it is listed under.
    CodeMismatch,
    /// Two sections of one course share a unique id.
    DuplicateSection,
    /// A meeting ends at or before its start.
    InvertedMeeting,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a schedule request, collecting every problem found.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &ScheduleRequest) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen_courses = HashSet::new();

    for (index, group) in request.groups.iter().enumerate() {
        if !group.code.is_valid() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCode,
                format!("Requested course #{} has an invalid code", index + 1),
            ));
        } else if !seen_courses.insert(group.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCourse,
                format!("Course '{}' is requested more than once", group.code),
            ));
        }

        if group.sections.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyGroup,
                format!("Course '{}' has no candidate sections", group.code),
            ));
        }

        let mut section_ids = HashSet::new();
        for section in &group.sections {
            if section.code != group.code {
                errors.push(ValidationError::new(
                    ValidationErrorKind::CodeMismatch,
                    format!(
                        "Section '{}' has code '{}' but is listed under '{}'",
                        section.unique_id, section.code, group.code
                    ),
                ));
            }
            if !section_ids.insert(section.unique_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateSection,
                    format!(
                        "Duplicate section id '{}' in course '{}'",
                        section.unique_id, group.code
                    ),
                ));
            }
            for (day, meeting) in section.weekly_meetings() {
                if !meeting.is_well_formed() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvertedMeeting,
                        format!(
                            "Section '{}' meets {day} {}-{}, which ends before it starts",
                            section.unique_id, meeting.start, meeting.end
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, LocationMeetings, Meeting, OfferedSection};

    fn section(code: &str, id: &str, start: &str, end: &str) -> OfferedSection {
        OfferedSection::new(code, id).with_location(
            LocationMeetings::new("CSE E116")
                .with_meeting(&[Day::Monday], Meeting::parse(start, end).unwrap()),
        )
    }

    fn sample_request() -> ScheduleRequest {
        ScheduleRequest::new()
            .with_course(
                "COP 4600",
                vec![
                    section("COP 4600", "10001", "0830", "0920"),
                    section("COP 4600", "10002", "0935", "1025"),
                ],
            )
            .with_course("MAC 2313", vec![OfferedSection::new("MAC 2313", "20001")])
    }

    #[test]
    fn test_valid_request() {
        assert!(validate_request(&sample_request()).is_ok());
    }

    #[test]
    fn test_invalid_code() {
        let request = sample_request().with_course("not a course", vec![]);
        let errors = validate_request(&request).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidCode));
    }

    #[test]
    fn test_duplicate_course() {
        let request = sample_request()
            .with_course("cop4600", vec![section("COP 4600", "10003", "1040", "1130")]);
        let errors = validate_request(&request).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateCourse));
    }

    #[test]
    fn test_empty_group() {
        let request = sample_request().with_course("PHY 2049", vec![]);
        let errors = validate_request(&request).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyGroup);
        assert!(errors[0].message.contains("PHY 2049"));
    }

    #[test]
    fn test_code_mismatch() {
        let request =
            ScheduleRequest::new().with_course("PHY 2049", vec![OfferedSection::new("PHY 2049L", "1")]);
        let errors = validate_request(&request).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CodeMismatch));
    }

    #[test]
    fn test_duplicate_section() {
        let request = ScheduleRequest::new().with_course(
            "COP 4600",
            vec![
                section("COP 4600", "10001", "0830", "0920"),
                section("COP 4600", "10001", "0935", "1025"),
            ],
        );
        let errors = validate_request(&request).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateSection));
    }

    #[test]
    fn test_inverted_meeting() {
        let request = ScheduleRequest::new()
            .with_course("COP 4600", vec![section("COP 4600", "1", "1000", "0900")]);
        let errors = validate_request(&request).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvertedMeeting));
    }

    #[test]
    fn test_multiple_errors() {
        let request = ScheduleRequest::new()
            .with_course("bad", vec![])
            .with_course("COP 4600", vec![section("COP 4600", "1", "1000", "1000")]);
        let errors = validate_request(&request).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
