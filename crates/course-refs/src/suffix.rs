//! Section-letter suffix fallback
//!
//! Spreadsheets often carry a section letter (`ENGR 101A`) for a course the
//! catalog only lists by its base number (`ENGR 101`).

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ConfigError;

/// Default shape: department words, a space, three digits, one letter
pub const DEFAULT_SUFFIX_PATTERN: &str = r"^(?P<base>[A-Z]+(?: [A-Z]+)* [0-9]{3})[A-Z]$";

const BASE_GROUP: &str = "base";

lazy_static! {
    static ref DEFAULT_PATTERN: Regex = Regex::new(DEFAULT_SUFFIX_PATTERN).unwrap();
}

/// Canonical keys eligible for suffix stripping, and how to strip them
///
/// The pattern must have a named `base` group; a matching key falls back to
/// the text of that group.
#[derive(Debug, Clone)]
pub struct SuffixFallback {
    pattern: Regex,
}

impl SuffixFallback {
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        if !regex.capture_names().flatten().any(|name| name == BASE_GROUP) {
            return Err(ConfigError::MissingBaseGroup(pattern.to_string()));
        }

        Ok(Self { pattern: regex })
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// The base key for `key`, or `None` when `key` does not have the shape
    pub fn base_key<'k>(&self, key: &'k str) -> Option<&'k str> {
        self.pattern
            .captures(key)
            .and_then(|caps| caps.name(BASE_GROUP))
            .map(|m| m.as_str())
            .filter(|base| !base.is_empty() && *base != key)
    }
}

impl Default for SuffixFallback {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.clone(),
        }
    }
}
