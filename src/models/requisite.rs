//! Requisite extraction from free-text catalog descriptions.
//!
//! Scans text for code-shaped substrings `{3 letters} {4 digits}{optional letter}`,
//! optionally followed by a compound `/` fragment:
//!
//! | Text | Codes |
//! |------|-------|
//! | `MAC 2311/2312` | `MAC 2311`, `MAC 2312` (subject reused) |
//! | `MAC 2311/C` | `MAC 2311`, `MAC 2311C` (suffix appended) |
//! | `MAC 2311 / 2312` | `MAC 2311`, `MAC 2312` (one space allowed around `/`) |
//!
//! Scanning and normalization are separate steps: [`scan_requisites`] yields
//! raw candidates, [`extract_requisites`] filters and normalizes them.

use std::borrow::Cow;

use super::CourseCode;

/// Raw candidates whose first three characters match one of these are dropped.
///
/// Intended to skip quantity phrases such as "one of". The check only ever
/// sees code-shaped text, so it fires on coincidental matches like `ONE 1234`.
const QUANTITY_PREFIXES: [&str; 4] = ["one", "two", "six", "ten"];

/// Extracts course codes from a requisite description, in scan order.
///
/// Duplicates are kept. Candidates that fail normalization come back as
/// `INVALID`.
pub fn extract_requisites(description: &str) -> Vec<CourseCode> {
    scan_requisites(description)
        .into_iter()
        .filter(|raw| !is_quantity_phrase(raw))
        .map(|raw| CourseCode::normalize(&raw))
        .collect()
}

/// Finds raw code candidates without normalizing them.
pub fn scan_requisites(description: &str) -> Vec<Cow<'_, str>> {
    let bytes = description.as_bytes();
    let mut candidates = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let Some(code_end) = match_code(bytes, pos) else {
            pos += 1;
            continue;
        };
        let code = &description[pos..code_end];
        candidates.push(Cow::Borrowed(code));
        pos = code_end;

        if let Some((fragment_start, fragment_end)) = match_compound(bytes, pos) {
            let fragment = description[fragment_start..fragment_end].trim();
            candidates.push(Cow::Owned(sibling_code(code, fragment)));
            pos = fragment_end;
        }
    }

    candidates
}

/// Builds the second code of a compound `left/fragment` match.
fn sibling_code(left: &str, fragment: &str) -> String {
    if fragment.len() == 1 {
        format!("{left}{fragment}")
    } else {
        format!("{}{}", &left[..3], fragment)
    }
}

fn is_quantity_phrase(raw: &str) -> bool {
    raw.get(..3)
        .is_some_and(|prefix| QUANTITY_PREFIXES.iter().any(|q| prefix.eq_ignore_ascii_case(q)))
}

/// Matches `{3 letters} {4 digits}{optional letter}` at `start`; returns the end offset.
fn match_code(bytes: &[u8], start: usize) -> Option<usize> {
    let rest = bytes.get(start..)?;
    let shape_ok = rest.len() >= 8
        && rest[..3].iter().all(u8::is_ascii_alphabetic)
        && rest[3] == b' '
        && rest[4..8].iter().all(u8::is_ascii_digit);
    if !shape_ok {
        return None;
    }

    let mut end = start + 8;
    if bytes.get(end).is_some_and(u8::is_ascii_alphabetic) {
        end += 1;
    }
    Some(end)
}

/// Matches `/fragment` at `start`, allowing one space on either side of the
/// slash. Returns the fragment's start and end offsets.
fn match_compound(bytes: &[u8], start: usize) -> Option<(usize, usize)> {
    let skip_space = |at: usize| if bytes.get(at) == Some(&b' ') { at + 1 } else { at };
    let slash = skip_space(start);
    if bytes.get(slash) != Some(&b'/') {
        return None;
    }
    let fragment_start = skip_space(slash + 1);
    match_fragment(bytes, fragment_start).map(|end| (fragment_start, end))
}

/// Matches the fragment after a `/`: a bare letter, or a digit run with an
/// optional letter suffix. Returns the end offset.
fn match_fragment(bytes: &[u8], start: usize) -> Option<usize> {
    let first = *bytes.get(start)?;
    let is_bare = |end: usize| !bytes.get(end).is_some_and(u8::is_ascii_alphanumeric);

    if first.is_ascii_alphabetic() {
        return is_bare(start + 1).then_some(start + 1);
    }

    let digits = bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let mut end = start + digits;
    if bytes.get(end).is_some_and(u8::is_ascii_alphabetic) && is_bare(end + 1) {
        end += 1;
    }
    Some(end)
}
