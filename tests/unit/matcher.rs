//! Match finder behavior on realistic text.

use super::common::{assert_results_well_formed, line_of, SAMPLE_TEXT};
use lector::find_all_matches;

#[test]
fn test_reference_scenario() {
    let results = find_all_matches("The cat sat\non the mat", "at", false);
    let got: Vec<_> = results
        .iter()
        .map(|r| (r.text.as_str(), r.line_number, r.start_pos, r.end_pos))
        .collect();
    assert_eq!(
        got,
        vec![("at", 0, 5, 7), ("at", 0, 9, 11), ("at", 1, 21, 23)]
    );
}

#[test]
fn test_sample_text_matches_are_well_formed() {
    for term in ["the", "in", "a", "Winston", "ed", " ", ",", "thirteen."] {
        for case_sensitive in [false, true] {
            let results = find_all_matches(SAMPLE_TEXT, term, case_sensitive);
            assert_results_well_formed(SAMPLE_TEXT, &results);
            for r in &results {
                assert_eq!(r.line_number, line_of(SAMPLE_TEXT, r.start_pos));
            }
        }
    }
}

#[test]
fn test_case_modes_differ() {
    let insensitive = find_all_matches(SAMPLE_TEXT, "the", false);
    let sensitive = find_all_matches(SAMPLE_TEXT, "the", true);
    assert!(insensitive.len() > sensitive.len());
    // "The hallway" starts line 4.
    assert!(insensitive.iter().any(|r| r.text == "The" && r.line_number == 4));
    assert!(sensitive.iter().all(|r| r.text == "the"));
}

#[test]
fn test_idempotent() {
    let first = find_all_matches(SAMPLE_TEXT, "in", false);
    let second = find_all_matches(SAMPLE_TEXT, "in", false);
    assert_eq!(first, second);
}

#[test]
fn test_blank_line_contributes_one_offset() {
    // Line 3 is empty; "The" on line 4 must account for its newline.
    let results = find_all_matches(SAMPLE_TEXT, "The hallway", true);
    assert_eq!(results.len(), 1);
    let expected_start: usize = SAMPLE_TEXT
        .split('\n')
        .take(4)
        .map(|l| l.chars().count() + 1)
        .sum();
    assert_eq!(results[0].start_pos, expected_start);
    assert_eq!(results[0].line_number, 4);
}

#[test]
fn test_trailing_newline_document() {
    let results = find_all_matches("end\n", "end", false);
    assert_eq!(results.len(), 1);
    assert_eq!((results[0].start_pos, results[0].end_pos), (0, 3));
}

#[test]
fn test_whole_document_as_term() {
    let results = find_all_matches("exact", "exact", true);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].end_pos, 5);
}

#[test]
fn test_term_longer_than_every_line() {
    assert!(find_all_matches("ab\ncd", "abcd", false).is_empty());
}
