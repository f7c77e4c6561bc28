//! Course codes and course levels.
//!
//! A [`CourseCode`] is always either canonical (`{1-3 letters} {4 digits}{0-1 letter}`,
//! letters upper-cased, exactly one space) or the sentinel `INVALID`.
//! Construction goes through [`CourseCode::normalize`], so nothing
//! downstream re-validates a code.
//!
//! # Examples
//!
//! ```
//! use semester_scheduler::models::{CourseCode, Level};
//!
//! assert_eq!(CourseCode::normalize("cop4600").as_str(), "COP 4600");
//! assert_eq!(CourseCode::normalize("MAC 2311C").as_str(), "MAC 2311C");
//! assert!(!CourseCode::normalize("badcode123").is_valid());
//! assert_eq!(CourseCode::normalize("EEL 5840").level(), Level::Graduate);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text of the invalid-code sentinel.
pub const INVALID_CODE: &str = "INVALID";

/// A canonical course code, or the `INVALID` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CourseCode(String);

impl CourseCode {
    /// Canonicalizes raw course-code text.
    ///
    /// Surrounding whitespace is ignored. The remainder must fully match
    /// `{1-3 letters}{optional space}{4 digits}{optional letter}`
    /// (letters case-insensitive). Total and idempotent.
    pub fn normalize(raw: &str) -> Self {
        match split_code(raw.trim()) {
            Some((prefix, digits, suffix)) => Self(format!(
                "{} {}{}",
                prefix.to_ascii_uppercase(),
                digits,
                suffix.to_ascii_uppercase()
            )),
            None => Self::invalid(),
        }
    }

    /// The `INVALID` sentinel.
    pub fn invalid() -> Self {
        Self(INVALID_CODE.to_string())
    }

    /// Whether this is a canonical code rather than the sentinel.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0 != INVALID_CODE
    }

    /// The code text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Subject prefix (`"COP"` for `"COP 4600"`). `None` for `INVALID`.
    pub fn subject(&self) -> Option<&str> {
        if !self.is_valid() {
            return None;
        }
        self.0.split_once(' ').map(|(prefix, _)| prefix)
    }

    /// Level derived from the first digit of the code.
    pub fn level(&self) -> Level {
        Level::of(self)
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CourseCode {
    fn from(raw: String) -> Self {
        Self::normalize(&raw)
    }
}

impl From<&str> for CourseCode {
    fn from(raw: &str) -> Self {
        Self::normalize(raw)
    }
}

impl From<CourseCode> for String {
    fn from(code: CourseCode) -> Self {
        code.0
    }
}

/// Shorthand for [`CourseCode::normalize`].
pub fn normalize(raw: &str) -> CourseCode {
    CourseCode::normalize(raw)
}

/// Splits `text` into (letters, digits, suffix) if it fully matches the code shape.
fn split_code(text: &str) -> Option<(&str, &str, &str)> {
    let letters = text.bytes().take_while(u8::is_ascii_alphabetic).count();
    if !(1..=3).contains(&letters) {
        return None;
    }
    let (prefix, rest) = text.split_at(letters);
    let rest = rest.strip_prefix(' ').unwrap_or(rest);

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits != 4 {
        return None;
    }
    let (number, suffix) = rest.split_at(4);

    match suffix.as_bytes() {
        [] => Some((prefix, number, suffix)),
        [b] if b.is_ascii_alphabetic() => Some((prefix, number, suffix)),
        _ => None,
    }
}

/// Course level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    /// First course digit 1-4.
    Undergraduate,
    /// First course digit 5-6.
    Graduate,
    /// Any other digit, no digit, or an `INVALID` code.
    #[serde(rename = "INVALID")]
    Invalid,
}

impl Level {
    /// Classifies a code by the first digit found scanning left to right.
    pub fn of(code: &CourseCode) -> Self {
        let first_digit = code
            .as_str()
            .chars()
            .find_map(|c| c.to_digit(10));

        match first_digit {
            Some(1..=4) => Level::Undergraduate,
            Some(5..=6) => Level::Graduate,
            _ => Level::Invalid,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Undergraduate => "Undergraduate",
            Level::Graduate => "Graduate",
            Level::Invalid => INVALID_CODE,
        })
    }
}
