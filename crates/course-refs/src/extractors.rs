//! Course number extraction from free text
//!
//! Titles and prerequisite phrases embed course numbers in prose
//! ("Prereq: Biology 380 and CHEM 101A"). The extractor pulls out spans of the
//! form `<department> <3 digits>[letter]`.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::normalize::normalize_course_key;

/// Longest department name accepted in front of a course number
pub const MAX_DEPARTMENT_LEN: usize = 25;

/// Extracted course number with position information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedCourseNumber {
    /// The matched span, original casing
    pub value: String,
    pub start_index: usize,
    pub end_index: usize,
}

lazy_static! {
    // Department words start with an uppercase letter (or are a lone "&") and
    // are separated by runs of spaces; then a single space and three digits
    // with an optional section letter.
    static ref COURSE_NUMBER_REGEX: Regex = Regex::new(
        r"\b(?P<dept>[A-Z][A-Za-z&.\-]*(?: +(?:[A-Z][A-Za-z&.\-]*|&))*) (?P<number>[0-9]{3}[A-Za-z]?)\b"
    ).unwrap();
}

/// Extract distinct course numbers from text, in order of first appearance
///
/// Duplicates are detected on the canonical key, so `"BIO 380"` and
/// `"Bio  380"` count once; the first spelling is kept.
///
/// Department words must start with an uppercase letter. Lowercase
/// references (`"biology 380"`) are not extracted, and a capitalised word
/// directly in front of the department becomes part of the span
/// (`"Take Biology 380"`).
pub fn extract_course_numbers(text: &str) -> Vec<String> {
    extract_all(text)
        .into_iter()
        .map(|extracted| extracted.value)
        .collect()
}

/// Extract distinct course numbers with their byte offsets in `text`
pub fn extract_all(text: &str) -> Vec<ExtractedCourseNumber> {
    let mut results = Vec::new();
    let mut seen = HashSet::new();

    for cap in COURSE_NUMBER_REGEX.captures_iter(text) {
        let (Some(dept), Some(number)) = (cap.name("dept"), cap.name("number")) else {
            continue;
        };

        let Some(offset) = department_start(dept.as_str()) else {
            continue;
        };
        let start_index = dept.start() + offset;
        let end_index = number.end();
        let value = &text[start_index..end_index];

        if seen.insert(normalize_course_key(value)) {
            results.push(ExtractedCourseNumber {
                value: value.to_string(),
                start_index,
                end_index,
            });
        }
    }

    results
}

/// Byte offset where an over-long department should start
///
/// Leading words are dropped until the department fits in
/// [`MAX_DEPARTMENT_LEN`]; the kept part must begin with a letter, so a cut
/// never lands inside a run of spaces.
fn department_start(dept: &str) -> Option<usize> {
    if dept.len() <= MAX_DEPARTMENT_LEN {
        return Some(0);
    }

    dept.match_indices(' ')
        .map(|(index, _)| index + 1)
        .filter(|&start| !dept[start..].starts_with(' '))
        .find(|&start| {
            dept.len() - start <= MAX_DEPARTMENT_LEN
                && dept[start..].starts_with(|c: char| c.is_ascii_uppercase())
        })
}
