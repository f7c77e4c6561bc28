//! Catalog course model.
//!
//! A [`CatalogCourse`] is the catalog-level definition of a course, built once
//! from a raw [`CatalogEntry`]. The code is normalized, requisite codes are
//! extracted from the requisite descriptions, and the level is derived.
//! Fields are read-only after construction.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{extract_requisites, CourseCode, Level};

/// Raw catalog fields as supplied by catalog ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogEntry {
    /// Course code text, any casing or spacing.
    pub code: String,
    /// Credit hours.
    pub credits: u8,
    /// Course title.
    pub name: String,
    /// Subject name.
    pub subject: String,
    /// Catalog description.
    pub description: String,
    /// Prerequisite description text.
    pub prereq_description: String,
    /// Corequisite description text.
    pub coreq_description: String,
    /// Attribute tag.
    pub attribute: String,
}

impl CatalogEntry {
    /// Creates an entry with the required fields.
    pub fn new(
        code: impl Into<String>,
        credits: u8,
        name: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            credits,
            name: name.into(),
            subject: subject.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Sets the prerequisite description.
    pub fn with_prerequisites(mut self, text: impl Into<String>) -> Self {
        self.prereq_description = text.into();
        self
    }

    /// Sets the corequisite description.
    pub fn with_corequisites(mut self, text: impl Into<String>) -> Self {
        self.coreq_description = text.into();
        self
    }

    /// Sets the attribute tag.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }
}

/// A course's catalog definition. Equality is structural over all fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogCourse {
    code: CourseCode,
    credits: u8,
    name: String,
    subject: String,
    description: String,
    prereq_description: String,
    prereq_codes: Vec<CourseCode>,
    coreq_description: String,
    coreq_codes: Vec<CourseCode>,
    attribute: String,
    level: Level,
}

impl CatalogCourse {
    /// Builds a catalog course, deriving codes and level.
    pub fn from_entry(entry: CatalogEntry) -> Self {
        let code = CourseCode::normalize(&entry.code);
        let level = code.level();
        Self {
            prereq_codes: extract_requisites(&entry.prereq_description),
            coreq_codes: extract_requisites(&entry.coreq_description),
            code,
            credits: entry.credits,
            name: entry.name,
            subject: entry.subject,
            description: entry.description,
            prereq_description: entry.prereq_description,
            coreq_description: entry.coreq_description,
            attribute: entry.attribute,
            level,
        }
    }

    /// Normalized course code.
    pub fn code(&self) -> &CourseCode {
        &self.code
    }

    /// Credit hours.
    pub fn credits(&self) -> u8 {
        self.credits
    }

    /// Course title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Subject name as listed in the catalog.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Catalog description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Prerequisite text as written.
    pub fn prereq_description(&self) -> &str {
        &self.prereq_description
    }

    /// Prerequisite codes in description order (may contain `INVALID`).
    pub fn prereq_codes(&self) -> &[CourseCode] {
        &self.prereq_codes
    }

    /// Corequisite text as written.
    pub fn coreq_description(&self) -> &str {
        &self.coreq_description
    }

    /// Corequisite codes in description order (may contain `INVALID`).
    pub fn coreq_codes(&self) -> &[CourseCode] {
        &self.coreq_codes
    }

    /// Attribute tag.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Level derived from the code.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether `code` is listed as a prerequisite. `INVALID` never matches.
    pub fn has_prerequisite(&self, code: &CourseCode) -> bool {
        code.is_valid() && self.prereq_codes.contains(code)
    }

    /// Whether `code` is listed as a corequisite. `INVALID` never matches.
    pub fn has_corequisite(&self, code: &CourseCode) -> bool {
        code.is_valid() && self.coreq_codes.contains(code)
    }
}

impl From<CatalogEntry> for CatalogCourse {
    fn from(entry: CatalogEntry) -> Self {
        Self::from_entry(entry)
    }
}

fn or_placeholder<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
    if text.is_empty() {
        placeholder
    } else {
        text
    }
}

fn join_codes(codes: &[CourseCode]) -> String {
    codes
        .iter()
        .map(CourseCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for CatalogCourse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "======== Catalog Course ========")?;
        writeln!(f, "Code: {}", self.code)?;
        writeln!(f, "Credits: {}", self.credits)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Description: {}", or_placeholder(&self.description, "No description"))?;
        writeln!(f, "Subject: {}", self.subject)?;
        writeln!(
            f,
            "Prerequisites Description: {}",
            or_placeholder(&self.prereq_description, "No prerequisites")
        )?;
        if !self.prereq_codes.is_empty() {
            writeln!(f, "Prerequisite Course Codes: {}", join_codes(&self.prereq_codes))?;
        }
        writeln!(
            f,
            "Corequisites Description: {}",
            or_placeholder(&self.coreq_description, "No corequisites")
        )?;
        if !self.coreq_codes.is_empty() {
            writeln!(f, "Corequisite Course Codes: {}", join_codes(&self.coreq_codes))?;
        }
        writeln!(f, "Attribute: {}", or_placeholder(&self.attribute, "No attribute"))?;
        writeln!(f, "Level: {}", self.level)?;
        write!(f, "================================")
    }
}
