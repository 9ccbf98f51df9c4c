//! Canonical keys for course references
//!
//! A canonical key is the uppercased reference with runs of whitespace
//! collapsed to single spaces and the ends trimmed. Two references are the
//! same course number iff their canonical keys are equal.

/// Turns a raw reference into the key used for catalog lookups
pub trait KeyNormalizer {
    fn normalize(&self, raw: &str) -> String;
}

/// The standard uppercase, single-spaced normalizer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanonicalNormalizer;

impl KeyNormalizer for CanonicalNormalizer {
    fn normalize(&self, raw: &str) -> String {
        normalize_course_key(raw)
    }
}

impl<F> KeyNormalizer for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, raw: &str) -> String {
        self(raw)
    }
}

/// Normalize a course reference into its canonical key
///
/// - Converts to uppercase
/// - Collapses whitespace runs into a single space
/// - Trims leading and trailing whitespace
pub fn normalize_course_key(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());

    for word in raw.split_whitespace() {
        if !key.is_empty() {
            key.push(' ');
        }
        key.extend(word.chars().flat_map(char::to_uppercase));
    }

    key
}

/// Normalize a possibly absent reference; absence yields the empty key
pub fn normalize_optional(raw: Option<&str>) -> String {
    raw.map(normalize_course_key).unwrap_or_default()
}
