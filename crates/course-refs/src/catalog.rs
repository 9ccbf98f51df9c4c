//! Course lookup table for one catalog version
//!
//! The table maps canonical course keys to course identifiers. It is built
//! once per catalog load and only read while resolving.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize_course_key;

/// A course row from the active catalog snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord<Id = String> {
    pub id: Id,
    pub course_number: String,
}

/// Canonical course key → course identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseTable<Id = String> {
    entries: HashMap<String, Id>,
}

impl<Id> Default for CourseTable<Id> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<Id> CourseTable<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(course number, id)` pairs
    ///
    /// Course numbers are normalized into keys. Blank course numbers are
    /// skipped; when two course numbers share a key the first one is kept.
    pub fn from_pairs<S, I>(pairs: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, Id)>,
    {
        let mut table = Self::new();
        for (course_number, id) in pairs {
            table.insert(course_number.as_ref(), id);
        }
        table
    }

    /// Build a table from catalog records
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CourseRecord<Id>>,
    {
        Self::from_pairs(
            records
                .into_iter()
                .map(|record| (record.course_number, record.id)),
        )
    }

    /// Insert a course under the canonical key of `course_number`
    ///
    /// Returns `false` when the key is empty or already taken.
    pub fn insert(&mut self, course_number: &str, id: Id) -> bool {
        let key = normalize_course_key(course_number);
        if key.is_empty() {
            tracing::warn!("Skipping course with blank course number");
            return false;
        }

        match self.entries.entry(key) {
            Entry::Occupied(existing) => {
                tracing::warn!(
                    "Duplicate course number '{}' (key '{}'), keeping the first course",
                    course_number,
                    existing.key()
                );
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(id);
                true
            }
        }
    }

    /// Look up an already-canonical key; the empty key never matches
    pub fn get(&self, key: &str) -> Option<&Id> {
        if key.is_empty() {
            return None;
        }
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Wrap a map whose keys are already canonical
impl<Id> From<HashMap<String, Id>> for CourseTable<Id> {
    fn from(entries: HashMap<String, Id>) -> Self {
        Self { entries }
    }
}

impl<Id> FromIterator<CourseRecord<Id>> for CourseTable<Id> {
    fn from_iter<I: IntoIterator<Item = CourseRecord<Id>>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}
