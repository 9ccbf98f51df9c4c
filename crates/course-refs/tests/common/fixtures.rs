//! Test fixture loading utilities

use std::path::PathBuf;

use course_refs::{CourseRecord, CourseTable};

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load the catalog snapshot fixture as course records
pub fn load_catalog_records() -> Vec<CourseRecord> {
    let path = fixture_path("catalog.csv");
    let mut reader = csv::Reader::from_path(&path)
        .unwrap_or_else(|e| panic!("Failed to open fixture {:?}: {}", path, e));
    reader
        .deserialize()
        .collect::<Result<Vec<CourseRecord>, _>>()
        .unwrap_or_else(|e| panic!("Failed to parse fixture {:?}: {}", path, e))
}

/// Build the lookup table for the catalog snapshot fixture
pub fn load_catalog() -> CourseTable {
    CourseTable::from_records(load_catalog_records())
}

/// Id of the fixture course with the given canonical key
#[allow(dead_code)]
pub fn course_id(key: &str) -> String {
    load_catalog()
        .get(key)
        .cloned()
        .unwrap_or_else(|| panic!("No fixture course for key: {}", key))
}
