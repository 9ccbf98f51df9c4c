//! Course number extraction integration tests

use course_refs::{extract_all, extract_course_numbers, normalize_course_key};
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn test_extract_prerequisite_phrase() {
    let text = "Prereq: Biology 380. Coreq: Biology 481 and Biology 380 again.";
    assert_eq!(extract_course_numbers(text), vec!["Biology 380", "Biology 481"]);
}

#[rstest]
#[case("Studio (Creative Art 210A)", vec!["Creative Art 210A"])]
#[case("PHYS 301/MATH 200", vec!["PHYS 301", "MATH 200"])]
#[case("Lab for CHEM 110, CHEM 110L, chem 110", vec!["CHEM 110", "CHEM 110L"])]
#[case("ENGR 101 or Engr 101", vec!["ENGR 101"])]
#[case("Section 12 of room 3040", vec![])]
#[case("ENGR 101AB", vec![])]
#[case("Prereq: Creative  Art 210", vec!["Creative  Art 210"])]
#[case("Abcdefghij Klmnopqrstuvwx 101", vec!["Abcdefghij Klmnopqrstuvwx 101"])]
#[case("Abcdefghij Klmnopqrstuvwxy 101", vec!["Klmnopqrstuvwxy 101"])]
#[case("Abcdefghijklmnopqrstuvwxyz 101", vec![])]
#[case("Take Biology 380, not biology 481", vec!["Take Biology 380"])]
fn test_extract_cases(#[case] text: &str, #[case] expected: Vec<&str>) {
    assert_eq!(extract_course_numbers(text), expected, "text: {}", text);
}

#[test]
fn test_extract_all_reports_spans() {
    let text = "Prereq: ENGR 101A; Coreq: MATH 200";
    let found = extract_all(text);
    let spans: Vec<_> = found
        .iter()
        .map(|e| (&text[e.start_index..e.end_index], e.value.as_str()))
        .collect();
    assert_eq!(spans, vec![("ENGR 101A", "ENGR 101A"), ("MATH 200", "MATH 200")]);
}

#[test]
fn test_extract_all_serializes() {
    let found = extract_all("see MATH 200");
    let json = serde_json::to_string(&found).unwrap();
    assert_eq!(json, r#"[{"value":"MATH 200","start_index":4,"end_index":12}]"#);
}

proptest! {
    #[test]
    fn test_extracted_keys_are_distinct(text in "[A-Za-z0-9 .,&-]{0,80}") {
        let found = extract_course_numbers(&text);
        let mut keys: Vec<String> = found.iter().map(|s| normalize_course_key(s)).collect();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), found.len());
    }

    #[test]
    fn test_extracted_values_are_substrings(text in "[A-Za-z0-9 .,&-]{0,80}") {
        for value in extract_course_numbers(&text) {
            prop_assert!(text.contains(&value));
        }
    }

    #[test]
    fn test_embedded_course_number_found(dept in "[A-Z][a-z]{1,10}", number in "[0-9]{3}") {
        let text = format!("prereq: {} {} required", dept, number);
        prop_assert_eq!(extract_course_numbers(&text), vec![format!("{} {}", dept, number)]);
    }
}
